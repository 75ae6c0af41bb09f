//! # Storage Layer
//!
//! The whole roster lives in a single slot: one JSON array of client records.
//! Backends only need to read and replace that array; every record-level
//! operation is a provided method on [`RecordStore`], so all backends share
//! the same semantics.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - The slot is `<data dir>/<slot>.json`
//!   - Writes go to a temp file and are renamed into place, so a reader
//!     sees either the old array or the new one
//!   - A missing, empty or corrupt slot loads as an empty roster
//!   - A corrupt slot is renamed to `.<slot>.corrupt-<uuid>.json` before the
//!     next write replaces it
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── fitcrm_clients.json   # [{"id": ..., "fullName": ..., ...}, ...]
//! └── config.json           # optional settings
//! ```

use crate::error::{FitcrmError, Result};
use crate::model::{ClientFields, ClientId, ClientRecord};
use tracing::debug;

pub mod fs;
pub mod memory;

/// Abstract interface for the client roster.
pub trait RecordStore {
    /// Every record, in insertion order. Never fails on corrupt data; a
    /// backend that cannot make sense of its slot returns an empty roster.
    fn load_all(&self) -> Result<Vec<ClientRecord>>;

    /// Replaces the entire roster in one step.
    fn save_all(&mut self, records: &[ClientRecord]) -> Result<()>;

    /// Whether the slot has ever been written (it may still be unreadable).
    fn is_initialized(&self) -> Result<bool>;

    /// Mints an id, stamps `lastUpdated`, appends and persists.
    fn create(&mut self, fields: ClientFields) -> Result<ClientRecord> {
        let mut records = self.load_all()?;
        let record = ClientRecord::new(fields);
        records.push(record.clone());
        self.save_all(&records)?;
        debug!(id = %record.id, "client created");
        Ok(record)
    }

    /// Replaces all fields of an existing record, keeping its id and position.
    fn update(&mut self, id: &ClientId, fields: ClientFields) -> Result<ClientRecord> {
        let mut records = self.load_all()?;
        let record = records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| FitcrmError::ClientNotFound(id.clone()))?;
        record.replace_fields(fields);
        let updated = record.clone();
        self.save_all(&records)?;
        debug!(id = %id, "client updated");
        Ok(updated)
    }

    /// Removes the record if present. Returns whether anything was removed;
    /// an unknown id leaves the store untouched.
    fn delete(&mut self, id: &ClientId) -> Result<bool> {
        let mut records = self.load_all()?;
        let before = records.len();
        records.retain(|r| &r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save_all(&records)?;
        debug!(id = %id, "client deleted");
        Ok(true)
    }

    fn find_by_id(&self, id: &ClientId) -> Result<Option<ClientRecord>> {
        Ok(self.load_all()?.into_iter().find(|r| &r.id == id))
    }

    /// Case-insensitive substring match on `fullName`, preserving order.
    /// An empty needle matches everything.
    fn search(&self, name: &str) -> Result<Vec<ClientRecord>> {
        let needle = name.to_lowercase();
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|r| r.name_matches(&needle))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::memory::fixtures::{fields, StoreFixture};
    use super::memory::InMemoryStore;
    use super::*;

    #[test]
    fn create_then_find_returns_input() {
        let mut store = InMemoryStore::new();
        let input = fields("Jane Doe");
        let created = store.create(input.clone()).unwrap();

        let found = store.find_by_id(&created.id).unwrap().unwrap();
        assert_eq!(found.fields, input);
        assert_eq!(found, created);
        assert!(!found.last_updated.is_empty());
    }

    #[test]
    fn create_appends_in_order() {
        let fixture = StoreFixture::new().with_clients(&["A", "B", "C"]);
        let names: Vec<_> = fixture
            .store
            .load_all()
            .unwrap()
            .into_iter()
            .map(|r| r.fields.full_name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut fixture = StoreFixture::new().with_clients(&["A", "B", "C"]);
        let mut records = fixture.store.load_all().unwrap();
        records[1].last_updated = "2000-01-01".into();
        fixture.store.save_all(&records).unwrap();
        let target = records[1].clone();

        let mut changed = fields("Bee");
        changed.age = 55;
        let updated = fixture.store.update(&target.id, changed.clone()).unwrap();
        assert_eq!(updated.id, target.id);

        let all = fixture.store.load_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].id, target.id);
        assert_eq!(all[1].fields, changed);
        assert_eq!(all[1].last_updated, crate::model::today());
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = InMemoryStore::new();
        let err = store
            .update(&ClientId::from("missing"), fields("X"))
            .unwrap_err();
        assert!(matches!(err, FitcrmError::ClientNotFound(_)));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn delete_removes_and_ignores_unknown() {
        let mut fixture = StoreFixture::new().with_clients(&["A", "B"]);
        let first = fixture.store.load_all().unwrap()[0].id.clone();

        assert!(fixture.store.delete(&first).unwrap());
        assert!(fixture.store.find_by_id(&first).unwrap().is_none());

        let before = fixture.store.load_all().unwrap();
        assert!(!fixture.store.delete(&ClientId::from("nope")).unwrap());
        assert_eq!(fixture.store.load_all().unwrap(), before);
    }

    #[test]
    fn search_is_case_insensitive_and_ordered() {
        let fixture = StoreFixture::new().with_clients(&["Anna Lee", "Bob Ray", "Leah Ann"]);
        let hits: Vec<_> = fixture
            .store
            .search("ANN")
            .unwrap()
            .into_iter()
            .map(|r| r.fields.full_name)
            .collect();
        assert_eq!(hits, vec!["Anna Lee", "Leah Ann"]);

        let all = fixture.store.search("").unwrap();
        assert_eq!(all, fixture.store.load_all().unwrap());
    }

    #[test]
    fn save_all_of_load_all_is_idempotent() {
        let mut fixture = StoreFixture::new().with_clients(&["A", "B"]);
        let first = fixture.store.load_all().unwrap();
        fixture.store.save_all(&first).unwrap();
        assert_eq!(fixture.store.load_all().unwrap(), first);
    }
}
