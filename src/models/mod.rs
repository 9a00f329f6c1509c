pub mod auth;
pub mod student;

pub use auth::{LoginRequest, LoginResponse, Session};
pub use student::{DraftField, MarksUpdate, Student, StudentDraft, StudentPayload};
