use thiserror::Error;

/// Remote operations issued by the console. Each carries the message shown to
/// the admin when it fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Login,
    Verify,
    ListStudents,
    CreateStudent,
    UpdateStudent,
    PatchMarks,
    DeleteStudent,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Login => "Login failed",
            Operation::Verify => "Invalid token",
            Operation::ListStudents => "Failed to fetch students",
            Operation::CreateStudent => "Failed to add student",
            Operation::UpdateStudent => "Failed to update student",
            Operation::PatchMarks => "Failed to update marks",
            Operation::DeleteStudent => "Failed to delete student",
        }
    }
}

/// Every failure the API client can report. `Display` is the single-line text
/// shown in the warning banner or on the login form.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// Credentials or token rejected; carries the server's text when it sent one.
    #[error("{0}")]
    Auth(String),

    #[error("{}", .operation.failure_message())]
    Http { operation: Operation, status: u16 },

    #[error("{}", .operation.failure_message())]
    Network { operation: Operation, detail: String },

    #[error("{}", .operation.failure_message())]
    Decode { operation: Operation, detail: String },

    /// Draft could not be turned into a request.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// True when the server refused the credentials or token outright.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Auth(_) | ApiError::Http { status: 401 | 403, .. }
        )
    }
}
