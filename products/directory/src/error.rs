use thiserror::Error;

use crate::document::CardHandle;
use crate::employee::EmployeeId;

/// Shared result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Failures local to a single directory operation. None of them end the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("employee {0} is not loaded")]
    UnknownEmployee(EmployeeId),
    #[error("no card {0} in the directory")]
    UnknownCard(CardHandle),
}

impl DirectoryError {
    pub fn code(&self) -> &'static str {
        match self {
            DirectoryError::UnknownEmployee(_) => "UNKNOWN_EMPLOYEE",
            DirectoryError::UnknownCard(_) => "UNKNOWN_CARD",
        }
    }
}
