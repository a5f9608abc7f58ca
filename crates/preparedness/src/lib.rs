pub mod database;
pub mod seed;

pub use database::{BackendKind, Storage, StorageError};
