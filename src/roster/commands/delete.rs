use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    store.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Employee deleted: {}", id)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::RecordStore;

    #[test]
    fn deletes_an_existing_employee() {
        let mut fixture = StoreFixture::new().with_employee("E1", "Ann");
        run(&mut fixture.store, "E1").unwrap();

        assert!(fixture.store.is_empty());
        assert!(fixture.store.get("E1").is_none());
    }

    #[test]
    fn deleting_an_absent_id_is_not_found_and_size_stable() {
        let mut fixture = StoreFixture::new().with_employee("E1", "Ann");

        let err = run(&mut fixture.store, "E9").unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
        assert_eq!(fixture.store.len(), 1);

        // Deleting twice keeps failing the same way.
        run(&mut fixture.store, "E1").unwrap();
        let err = run(&mut fixture.store, "E1").unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
        assert_eq!(fixture.store.len(), 0);
    }
}
