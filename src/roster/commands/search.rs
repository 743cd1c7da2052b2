use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// Direct ID lookup. A miss is a normal empty result, not an error.
pub fn run<S: RecordStore>(store: &S, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.get(id) {
        Some(employee) => result.listed.push(employee),
        None => result.add_message(CmdMessage::info(format!("Employee not found: {}", id))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn finds_by_exact_id() {
        let fixture = StoreFixture::new().with_employee("E1", "Ann");
        let result = run(&fixture.store, "E1").unwrap();

        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].name, "Ann");
    }

    #[test]
    fn ids_are_case_sensitive() {
        let fixture = StoreFixture::new().with_employee("E1", "Ann");
        let result = run(&fixture.store, "e1").unwrap();

        assert!(result.listed.is_empty());
    }

    #[test]
    fn miss_on_empty_store_is_not_an_error() {
        let store = InMemoryStore::new();
        let result = run(&store, "E1").unwrap();

        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
