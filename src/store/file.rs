//! JSON file-backed employee store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::error::{RegistryError, RegistryResult};
use crate::models::{EmployeeFields, EmployeeId, EmployeeRecord};

use super::EmployeeStore;
use super::records::Records;

/// Stores employee records in memory and mirrors them to a JSON file.
///
/// The file holds a JSON array of records in insertion order. Every
/// mutation is applied to a copy, written to `<file>.tmp`, renamed over the
/// data file, and only then made visible. A failed write leaves both the
/// file and the in-memory records unchanged.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    records: RwLock<Records>,
}

impl FileStore {
    /// Opens the store at `path`, loading existing records if the file exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read or does not contain a
    /// valid record array, and a validation error if a stored record breaks
    /// a record invariant.
    pub fn open<P: AsRef<Path>>(path: P, unique_emails: bool) -> RegistryResult<Self> {
        let path = path.as_ref().to_path_buf();

        let records = match fs::read_to_string(&path) {
            Ok(content) => {
                let stored: Vec<EmployeeRecord> =
                    serde_json::from_str(&content).map_err(|e| {
                        RegistryError::storage(format!(
                            "failed to parse data file '{}': {}",
                            path.display(),
                            e
                        ))
                    })?;
                Records::load(stored, unique_emails)?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Records::new(unique_emails),
            Err(e) => {
                return Err(RegistryError::storage(format!(
                    "failed to read data file '{}': {}",
                    path.display(),
                    e
                )));
            }
        };

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Returns the path of the backing data file.
    pub fn path(&self) -> &Path {
        &self.path
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

    /// Applies `change` to a copy of the records, persists it, then commits.
    fn mutate<T>(
        &self,
        change: impl FnOnce(&mut Records) -> RegistryResult<T>,
    ) -> RegistryResult<T> {
        let mut guard = self.write()?;
        let mut next = guard.clone();
        let outcome = change(&mut next)?;
        self.persist(&next)?;
        *guard = next;
        Ok(outcome)
    }

    fn persist(&self, records: &Records) -> RegistryResult<()> {
        let json = serde_json::to_string_pretty(&records.snapshot())
            .map_err(|e| RegistryError::storage(format!("failed to encode records: {e}")))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)
            .and_then(|()| fs::rename(&tmp, &self.path))
            .map_err(|e| {
                warn!(path = %self.path.display(), error = %e, "Failed to write data file");
                RegistryError::storage(format!(
                    "failed to write data file '{}': {}",
                    self.path.display(),
                    e
                ))
            })
    }
}

impl EmployeeStore for FileStore {
    fn create(&self, fields: EmployeeFields) -> RegistryResult<EmployeeId> {
        let id = self.mutate(|records| records.insert(fields))?;
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
        let record = self.mutate(|records| records.replace(id, fields))?;
        debug!(employee_id = %id, "Updated employee record");
        Ok(record)
    }

    fn delete(&self, id: &EmployeeId) -> RegistryResult<bool> {
        // Absent ids leave the file untouched
        if self.read()?.get(id).is_err() {
            debug!(employee_id = %id, removed = false, "Deleted employee record");
            return Ok(false);
        }
        let removed = self.mutate(|records| Ok(records.remove(id)))?;
        debug!(employee_id = %id, removed, "Deleted employee record");
        Ok(removed)
    }
}
