use crate::model::Employee;

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Employee>,
    pub listed: Vec<Employee>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, employees: Vec<Employee>) -> Self {
        self.listed = employees;
        self
    }
}

/// Raw field input for `add`, exactly as collected from the user. Parsing
/// and validation happen in the command, not the shell.
#[derive(Debug, Clone)]
pub struct EmployeeDraft {
    pub id: String,
    pub name: String,
    pub position: String,
    pub salary: String,
    pub email: String,
}

/// Partial update input. `None` means the field was not supplied and the
/// current value is kept; supplying a field never clears it.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub id: String,
    pub name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<String>,
    pub email: Option<String>,
}

impl EmployeeUpdate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}
