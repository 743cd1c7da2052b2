use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Employee already exists: {0}")]
    DuplicateId(String),

    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("Invalid salary: {0:?}")]
    InvalidSalary(String),

    #[error("Invalid email: {0:?}")]
    InvalidEmail(String),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Malformed employee file: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<csv::Error> for RosterError {
    fn from(e: csv::Error) -> Self {
        let msg = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(io) => RosterError::Io(io),
            _ => RosterError::Format(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
