//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all roster operations, regardless of the UI driving them.
//!
//! It dispatches to the appropriate command function and returns structured
//! `Result<CmdResult>` values. Business logic belongs in `commands/*.rs`;
//! presentation belongs to the caller.
//!
//! `RosterApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::RecordStore;

/// The main API facade for roster operations.
pub struct RosterApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_employee(&mut self, draft: commands::EmployeeDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn list_employees(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn update_employee(
        &mut self,
        update: &commands::EmployeeUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, update)
    }

    pub fn delete_employee(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn search_employee(&self, id: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, id)
    }
}

pub use commands::{CmdMessage, CmdResult, EmployeeDraft, EmployeeUpdate, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn draft(id: &str) -> EmployeeDraft {
        EmployeeDraft {
            id: id.into(),
            name: "Ann".into(),
            position: "Engineer".into(),
            salary: "75000".into(),
            email: "ann@co.com".into(),
        }
    }

    #[test]
    fn dispatches_through_the_full_lifecycle() {
        let mut api = RosterApi::new(InMemoryStore::new());

        api.add_employee(draft("E1")).unwrap();
        assert_eq!(api.list_employees().unwrap().listed.len(), 1);

        let mut update = EmployeeUpdate::new("E1");
        update.salary = Some("82000".into());
        api.update_employee(&update).unwrap();

        let found = api.search_employee("E1").unwrap();
        assert_eq!(found.listed[0].salary, 82000.0);
        assert_eq!(found.listed[0].name, "Ann");

        api.delete_employee("E1").unwrap();
        assert!(api.list_employees().unwrap().listed.is_empty());
    }
}
