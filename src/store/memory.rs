//! In-process employee store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::models::{EmployeeFields, EmployeeId, EmployeeRecord};

use super::EmployeeStore;
use super::records::Records;

/// Stores employee records in memory for the lifetime of the process.
///
/// # Example
///
/// ```
/// use employee_registry::models::EmployeeFields;
/// use employee_registry::store::{EmployeeStore, InMemoryStore};
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::new(false);
/// let id = store.create(EmployeeFields {
///     first_name: "Ada".to_string(),
///     last_name: "Lovelace".to_string(),
///     email: "ada@example.com".to_string(),
///     salary: Decimal::new(120000, 0),
///     department_id: "engineering".to_string(),
///     role_id: "engineer".to_string(),
/// })?;
/// assert_eq!(store.get(&id)?.first_name, "Ada");
/// # Ok::<(), employee_registry::error::RegistryError>(())
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Records>,
}

impl InMemoryStore {
    /// Creates an empty store. With `unique_emails`, no two records may share
    /// an email address.
    pub fn new(unique_emails: bool) -> Self {
        Self {
            records: RwLock::new(Records::new(unique_emails)),
        }
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> RegistryResult<usize> {
        Ok(self.read()?.len())
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> RegistryResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> RegistryResult<RwLockReadGuard<'_, Records>> {
        self.records
            .read()
            .map_err(|_| RegistryError::storage("employee records lock poisoned"))
    }

    fn write(&self) -> RegistryResult<RwLockWriteGuard<'_, Records>> {
        self.records
            .write()
            .map_err(|_| RegistryError::storage("employee records lock poisoned"))
    }
}

impl EmployeeStore for InMemoryStore {
    fn create(&self, fields: EmployeeFields) -> RegistryResult<EmployeeId> {
        let id = self.write()?.insert(fields)?;
        debug!(employee_id = %id, "Created employee record");
        Ok(id)
    }

    fn get(&self, id: &EmployeeId) -> RegistryResult<EmployeeRecord> {
        self.read()?.get(id)
    }

    fn list_all(&self) -> RegistryResult<Vec<EmployeeRecord>> {
        Ok(self.read()?.snapshot())
    }

    fn update(&self, id: &EmployeeId, fields: EmployeeFields) -> RegistryResult<EmployeeRecord> {
        let record = self.write()?.replace(id, fields)?;
        debug!(employee_id = %id, "Updated employee record");
        Ok(record)
    }

    fn delete(&self, id: &EmployeeId) -> RegistryResult<bool> {
        let removed = self.write()?.remove(id);
        debug!(employee_id = %id, removed, "Deleted employee record");
        Ok(removed)
    }
}
