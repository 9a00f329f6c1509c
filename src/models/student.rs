use serde::{Deserialize, Deserializer, Serialize};

use crate::services::ApiError;

pub const MARKS_MIN: f64 = 0.0;
pub const MARKS_MAX: f64 = 100.0;

/// Student record as returned by the server. The id is server-assigned and
/// never produced on the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub course: String,
    #[serde(default)]
    pub marks: Option<f64>,
}

impl Student {
    /// `"87.5%"` when marks are recorded, `"N/A"` otherwise.
    pub fn marks_label(&self) -> String {
        match self.marks {
            Some(marks) => format!("{}%", marks),
            None => "N/A".to_string(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Editable copy of a student's fields while a modal is open. Marks stay as
/// the raw text typed by the admin until submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub course: String,
    pub marks: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Course,
    Marks,
}

impl StudentDraft {
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            course: student.course.clone(),
            marks: student.marks.map(|m| m.to_string()).unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Email => self.email = value,
            DraftField::Course => self.course = value,
            DraftField::Marks => self.marks = value,
        }
    }

    /// Request body for create/update. Empty marks become `null`.
    pub fn to_payload(&self) -> Result<StudentPayload, ApiError> {
        Ok(StudentPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            course: self.course.clone(),
            marks: parse_optional_marks(&self.marks)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub name: String,
    pub email: String,
    pub course: String,
    pub marks: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarksUpdate {
    pub marks: f64,
}

pub fn parse_optional_marks(text: &str) -> Result<Option<f64>, ApiError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let value: f64 = text
        .parse()
        .map_err(|_| ApiError::Validation("Marks must be a number".to_string()))?;
    check_marks_range(value).map(Some)
}

/// Marks for the dedicated marks-update flow, where a value is mandatory.
pub fn parse_required_marks(text: &str) -> Result<f64, ApiError> {
    parse_optional_marks(text)?
        .ok_or_else(|| ApiError::Validation("Marks are required".to_string()))
}

pub fn check_marks_range(value: f64) -> Result<f64, ApiError> {
    if value.is_finite() && (MARKS_MIN..=MARKS_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(ApiError::Validation(format!(
            "Marks must be between {} and {}",
            MARKS_MIN, MARKS_MAX
        )))
    }
}
