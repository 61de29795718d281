/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports for the file system,
/// the console and the report formats.
pub mod outbound;
