use super::RecordStore;
use crate::error::{Result, RosterError};
use crate::model::Employee;
use indexmap::IndexMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: IndexMap<String, Employee>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn insert(&mut self, employee: &Employee) -> Result<()> {
        self.records
            .insert(employee.id.clone(), employee.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> Option<Employee> {
        self.records.get(id).cloned()
    }

    fn list(&self) -> Vec<Employee> {
        self.records.values().cloned().collect()
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        if self.records.shift_remove(id).is_none() {
            return Err(RosterError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

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

        pub fn with_employee(mut self, id: &str, name: &str) -> Self {
            let employee = Employee::new(
                id,
                name,
                "Engineer",
                50000.0,
                format!("{}@example.com", id.to_lowercase()),
            );
            self.store.insert(&employee).unwrap();
            self
        }

        pub fn with_employees(mut self, count: usize) -> Self {
            for i in 1..=count {
                let employee = Employee::new(
                    format!("E{}", i),
                    format!("Employee {}", i),
                    "Staff",
                    40000.0 + i as f64,
                    format!("e{}@example.com", i),
                );
                self.store.insert(&employee).unwrap();
            }
            self
        }
    }
}
