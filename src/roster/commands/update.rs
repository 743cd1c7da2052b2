use crate::commands::{CmdMessage, CmdResult, EmployeeUpdate};
use crate::error::{Result, RosterError};
use crate::model::{email_is_valid, parse_salary};
use crate::store::RecordStore;
use tracing::warn;

/// Partial update. Fields left as `None` keep their current value. A supplied
/// salary or email that fails validation is skipped with a warning while the
/// rest of the update still applies; the record persists only if at least one
/// field was accepted.
pub fn run<S: RecordStore>(store: &mut S, update: &EmployeeUpdate) -> Result<CmdResult> {
    let mut employee = store
        .get(&update.id)
        .ok_or_else(|| RosterError::NotFound(update.id.clone()))?;

    let mut result = CmdResult::default();
    let mut changed = false;

    if let Some(name) = supplied(&update.name) {
        employee.name = name.to_string();
        changed = true;
    }
    if let Some(position) = supplied(&update.position) {
        employee.position = position.to_string();
        changed = true;
    }
    if let Some(raw) = supplied(&update.salary) {
        match parse_salary(raw) {
            Some(salary) => {
                employee.salary = salary;
                changed = true;
            }
            None => {
                warn!(id = %employee.id, raw, "salary skipped");
                result.add_message(CmdMessage::warning(format!(
                    "Invalid salary {:?}. Skipped.",
                    raw
                )));
            }
        }
    }
    if let Some(email) = supplied(&update.email) {
        if email_is_valid(email) {
            employee.email = email.to_string();
            changed = true;
        } else {
            warn!(id = %employee.id, email, "email skipped");
            result.add_message(CmdMessage::warning(format!(
                "Invalid email {:?}. Skipped.",
                email
            )));
        }
    }

    if changed {
        store.insert(&employee)?;
        result.add_message(CmdMessage::success(format!("Employee updated: {}", employee.id)));
        result.affected.push(employee);
    } else if result.messages.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update."));
    }

    Ok(result)
}

/// A supplied field is a `Some` with non-whitespace content; anything else
/// means "keep the current value".
fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn updates_only_supplied_fields() {
        let mut fixture = StoreFixture::new().with_employee("E1", "Ann");
        let before = fixture.store.get("E1").unwrap();

        let mut update = EmployeeUpdate::new("E1");
        update.name = Some("Anna".into());
        run(&mut fixture.store, &update).unwrap();

        let after = fixture.store.get("E1").unwrap();
        assert_eq!(after.name, "Anna");
        assert_eq!(after.position, before.position);
        assert_eq!(after.salary, before.salary);
        assert_eq!(after.email, before.email);
    }

    #[test]
    fn skips_invalid_salary_but_applies_the_rest() {
        let mut fixture = StoreFixture::new().with_employee("E1", "Ann");
        let before = fixture.store.get("E1").unwrap();

        let mut update = EmployeeUpdate::new("E1");
        update.salary = Some("lots".into());
        update.position = Some("Lead".into());
        let result = run(&mut fixture.store, &update).unwrap();

        let after = fixture.store.get("E1").unwrap();
        assert_eq!(after.position, "Lead");
        assert_eq!(after.salary, before.salary);
        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, crate::commands::MessageLevel::Warning)));
    }

    #[test]
    fn skips_invalid_email_and_keeps_the_old_one() {
        let mut fixture = StoreFixture::new().with_employee("E1", "Ann");
        let before = fixture.store.get("E1").unwrap();

        let mut update = EmployeeUpdate::new("E1");
        update.email = Some("nope".into());
        run(&mut fixture.store, &update).unwrap();

        assert_eq!(fixture.store.get("E1").unwrap().email, before.email);
    }

    #[test]
    fn rejects_negative_replacement_salary() {
        let mut fixture = StoreFixture::new().with_employee("E1", "Ann");
        let before = fixture.store.get("E1").unwrap();

        let mut update = EmployeeUpdate::new("E1");
        update.salary = Some("-1".into());
        run(&mut fixture.store, &update).unwrap();

        assert_eq!(fixture.store.get("E1").unwrap().salary, before.salary);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &EmployeeUpdate::new("E9")).unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
    }

    #[test]
    fn all_fields_absent_changes_nothing() {
        let mut fixture = StoreFixture::new().with_employee("E1", "Ann");
        let before = fixture.store.get("E1").unwrap();

        let result = run(&mut fixture.store, &EmployeeUpdate::new("E1")).unwrap();

        assert_eq!(fixture.store.get("E1").unwrap(), before);
        assert!(result.affected.is_empty());
    }
}
