use crate::commands::{CmdMessage, CmdResult, EmployeeDraft};
use crate::error::{Result, RosterError};
use crate::model::{email_is_valid, parse_salary, Employee};
use crate::store::RecordStore;

/// Create a new record. All validation runs before the store is touched, so
/// a rejected add leaves the collection exactly as it was.
pub fn run<S: RecordStore>(store: &mut S, draft: EmployeeDraft) -> Result<CmdResult> {
    let id = draft.id.trim();
    if id.is_empty() {
        return Err(RosterError::EmptyField("Employee ID"));
    }
    if store.get(id).is_some() {
        return Err(RosterError::DuplicateId(id.to_string()));
    }

    let name = draft.name.trim();
    if name.is_empty() {
        return Err(RosterError::EmptyField("Name"));
    }
    let position = draft.position.trim();
    if position.is_empty() {
        return Err(RosterError::EmptyField("Position"));
    }
    let salary =
        parse_salary(&draft.salary).ok_or_else(|| RosterError::InvalidSalary(draft.salary.clone()))?;
    let email = draft.email.trim();
    if !email_is_valid(email) {
        return Err(RosterError::InvalidEmail(draft.email.clone()));
    }

    let employee = Employee::new(id, name, position, salary, email);
    store.insert(&employee)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Employee added: {}", employee.id)));
    result.affected.push(employee);
    Ok(result)
}
