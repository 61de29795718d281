/// Application layer - Use cases, DTOs and read models
///
/// This layer orchestrates the package graph services and talks to the
/// outside world only through ports.
pub mod dto;
pub mod factories;
mod package_search;
pub mod read_models;
mod snapshot_store;
pub mod use_cases;

pub use package_search::{PackageSearch, MIN_QUERY_LENGTH};
pub use snapshot_store::SnapshotStore;
