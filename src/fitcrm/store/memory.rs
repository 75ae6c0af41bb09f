use super::RecordStore;
use crate::error::Result;
use crate::model::ClientRecord;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<ClientRecord>,
    saved: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<ClientRecord>> {
        Ok(self.records.clone())
    }

    fn save_all(&mut self, records: &[ClientRecord]) -> Result<()> {
        self.records = records.to_vec();
        self.saved = true;
        Ok(())
    }

    fn is_initialized(&self) -> Result<bool> {
        Ok(self.saved)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ClientFields, ClientRecord};

    /// Valid fields for a client with the given name.
    pub fn fields(full_name: &str) -> ClientFields {
        ClientFields {
            full_name: full_name.to_string(),
            age: 30,
            gender: "Female".to_string(),
            email: "client@example.com".to_string(),
            phone: String::new(),
            goal: "General Fitness".to_string(),
            start_date: "2024-01-01".to_string(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_clients(mut self, names: &[&str]) -> Self {
            for name in names {
                self.store.create(fields(name)).unwrap();
            }
            self
        }

        pub fn with_goal(mut self, name: &str, goal: &str) -> Self {
            let mut f = fields(name);
            f.goal = goal.to_string();
            self.store.create(f).unwrap();
            self
        }

        pub fn first(&self) -> ClientRecord {
            self.store.load_all().unwrap().remove(0)
        }
    }
}
