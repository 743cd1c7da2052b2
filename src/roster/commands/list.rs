use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// The full collection, in insertion order. An empty store is a valid,
/// non-error result.
pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let employees = store.list();
    let mut result = CmdResult::default();
    if employees.is_empty() {
        result.add_message(CmdMessage::info("No employees found."));
    }
    Ok(result.with_listed(employees))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_insertion_order() {
        let fixture = StoreFixture::new().with_employees(3);
        let result = run(&fixture.store).unwrap();

        let ids: Vec<&str> = result.listed.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["E1", "E2", "E3"]);
    }

    #[test]
    fn empty_store_is_not_an_error() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();

        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
