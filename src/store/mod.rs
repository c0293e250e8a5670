//! Employee record storage.
//!
//! The [`EmployeeStore`] trait is the logical interface every caller uses.
//! Two backends implement it:
//!
//! - [`InMemoryStore`] keeps records in process memory.
//! - [`FileStore`] additionally rewrites a JSON data file after each change.
//!
//! Each single-record operation is atomic. Nothing spans more than one
//! record, and a `list_all` snapshot may be stale as soon as it returns.

mod file;
mod memory;
mod records;

use std::sync::Arc;

use tracing::info;

use crate::config::StorageConfig;
use crate::error::RegistryResult;
use crate::models::{EmployeeFields, EmployeeId, EmployeeRecord};

pub use file::FileStore;
pub use memory::InMemoryStore;

/// Authoritative create/read/update/delete access to employee records.
///
/// Implementations must be safe to call from many request handlers at once.
pub trait EmployeeStore: Send + Sync {
    /// Validates the fields, stores a new record, and returns its fresh id.
    fn create(&self, fields: EmployeeFields) -> RegistryResult<EmployeeId>;

    /// Returns the record with the given id, or `EmployeeNotFound`.
    fn get(&self, id: &EmployeeId) -> RegistryResult<EmployeeRecord>;

    /// Returns a snapshot of every record in insertion order.
    ///
    /// An empty store yields an empty vector.
    fn list_all(&self) -> RegistryResult<Vec<EmployeeRecord>>;

    /// Replaces all mutable fields of a record in one step.
    ///
    /// The same invariants as [`EmployeeStore::create`] apply. Returns the
    /// updated record, or `EmployeeNotFound` if the id is absent.
    fn update(&self, id: &EmployeeId, fields: EmployeeFields) -> RegistryResult<EmployeeRecord>;

    /// Removes a record. Deleting an absent id is a no-op.
    ///
    /// Returns whether a record was actually removed.
    fn delete(&self, id: &EmployeeId) -> RegistryResult<bool>;
}

/// Opens the backend selected by the storage configuration.
///
/// A configured `data_file` selects [`FileStore`]; otherwise records live
/// only in memory.
pub fn open_store(config: &StorageConfig) -> RegistryResult<Arc<dyn EmployeeStore>> {
    match &config.data_file {
        Some(path) => {
            let store = FileStore::open(path, config.unique_emails)?;
            info!(path = %path.display(), records = store.len()?, "Opened file-backed store");
            Ok(Arc::new(store))
        }
        None => {
            info!("Opened in-memory store");
            Ok(Arc::new(InMemoryStore::new(config.unique_emails)))
        }
    }
}
