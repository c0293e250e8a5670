//! Record bookkeeping shared by the store backends.

use std::collections::HashMap;

use crate::error::{RegistryError, RegistryResult};
use crate::models::{EmployeeFields, EmployeeId, EmployeeRecord};

#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    record: EmployeeRecord,
}

/// The canonical record collection plus its insertion counter.
///
/// Backends wrap this in a lock; every method here assumes exclusive access
/// for mutation and applies each change as a whole or not at all.
#[derive(Debug, Clone, Default)]
pub(crate) struct Records {
    next_seq: u64,
    entries: HashMap<EmployeeId, Entry>,
    unique_emails: bool,
}

impl Records {
    pub(crate) fn new(unique_emails: bool) -> Self {
        Self {
            unique_emails,
            ..Self::default()
        }
    }

    /// Rebuilds a collection from records in their stored order.
    pub(crate) fn load(records: Vec<EmployeeRecord>, unique_emails: bool) -> RegistryResult<Self> {
        let mut loaded = Self::new(unique_emails);
        for record in records {
            let id = record.id;
            let fields = record.fields().normalized()?;
            loaded.check_email(&fields.email, None)?;
            if loaded.entries.contains_key(&id) {
                return Err(RegistryError::storage(format!(
                    "duplicate employee id in stored data: {id}"
                )));
            }
            loaded.push(EmployeeRecord::new(id, fields));
        }
        Ok(loaded)
    }

    pub(crate) fn insert(&mut self, fields: EmployeeFields) -> RegistryResult<EmployeeId> {
        let fields = fields.normalized()?;
        self.check_email(&fields.email, None)?;

        let mut id = EmployeeId::new();
        while self.entries.contains_key(&id) {
            id = EmployeeId::new();
        }
        self.push(EmployeeRecord::new(id, fields));
        Ok(id)
    }

    pub(crate) fn get(&self, id: &EmployeeId) -> RegistryResult<EmployeeRecord> {
        self.entries
            .get(id)
            .map(|entry| entry.record.clone())
            .ok_or_else(|| not_found(id))
    }

    pub(crate) fn replace(
        &mut self,
        id: &EmployeeId,
        fields: EmployeeFields,
    ) -> RegistryResult<EmployeeRecord> {
        if !self.entries.contains_key(id) {
            return Err(not_found(id));
        }
        let fields = fields.normalized()?;
        self.check_email(&fields.email, Some(id))?;

        let entry = self.entries.get_mut(id).ok_or_else(|| not_found(id))?;
        entry.record.replace_fields(fields);
        Ok(entry.record.clone())
    }

    pub(crate) fn remove(&mut self, id: &EmployeeId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Copies every record out in insertion order.
    pub(crate) fn snapshot(&self) -> Vec<EmployeeRecord> {
        let mut entries: Vec<&Entry> = self.entries.values().collect();
        entries.sort_by_key(|entry| entry.seq);
        entries.into_iter().map(|entry| entry.record.clone()).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, record: EmployeeRecord) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(record.id, Entry { seq, record });
    }

    fn check_email(&self, email: &str, exclude: Option<&EmployeeId>) -> RegistryResult<()> {
        if !self.unique_emails {
            return Ok(());
        }
        let taken = self.entries.values().any(|entry| {
            Some(&entry.record.id) != exclude && entry.record.email.eq_ignore_ascii_case(email)
        });
        if taken {
            return Err(RegistryError::DuplicateEmail {
                email: email.to_string(),
            });
        }
        Ok(())
    }
}

fn not_found(id: &EmployeeId) -> RegistryError {
    RegistryError::EmployeeNotFound { id: id.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn fields(email: &str) -> EmployeeFields {
        EmployeeFields {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            salary: Decimal::new(1000, 0),
            department_id: "eng".to_string(),
            role_id: "dev".to_string(),
        }
    }

    #[test]
    fn test_snapshot_preserves_insertion_order() {
        let mut records = Records::new(false);
        let ids: Vec<EmployeeId> = (0..20)
            .map(|i| records.insert(fields(&format!("e{i}@example.com"))).unwrap())
            .collect();

        let snapshot_ids: Vec<EmployeeId> = records.snapshot().iter().map(|r| r.id).collect();
        assert_eq!(snapshot_ids, ids);
    }

    #[test]
    fn test_unique_emails_ignore_case_and_self() {
        let mut records = Records::new(true);
        let id = records.insert(fields("ada@example.com")).unwrap();

        let err = records.insert(fields("ADA@example.com")).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateEmail { .. }));

        // Re-saving a record with its own email is not a conflict
        assert!(records.replace(&id, fields("Ada@Example.com")).is_ok());
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let record = EmployeeRecord::new(EmployeeId::new(), fields("a@example.com"));
        let result = Records::load(vec![record.clone(), record], false);
        assert!(matches!(result, Err(RegistryError::StorageError { .. })));
    }

    #[test]
    fn test_replace_missing_id_is_not_found() {
        let mut records = Records::new(false);
        let err = records
            .replace(&EmployeeId::new(), fields("a@example.com"))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
