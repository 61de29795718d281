/// Package graph core: domain model and pure services
///
/// Nothing in this module performs I/O. Raw index text comes in through
/// [`services::IndexParser`], and everything downstream works on an
/// immutable [`domain::DependencyGraph`] snapshot.
pub mod domain;
pub mod services;
