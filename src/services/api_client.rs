// ============================================================================
// API CLIENT - HTTP calls to /api/auth and /students
// ============================================================================
// Stateless apart from the injected session, which supplies the bearer token.
// Any status outside 2xx is a failure regardless of body content.
// ============================================================================

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::models::student::check_marks_range;
use crate::models::{LoginRequest, LoginResponse, MarksUpdate, Student, StudentDraft};
use crate::services::error::{ApiError, Operation};
use crate::services::transport::{FetchTransport, HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::stores::SessionStore;
use crate::utils::{AUTH_PATH, STUDENTS_PATH};

pub struct ApiClient<T: Transport = FetchTransport> {
    base_url: String,
    transport: T,
    session: SessionStore,
}

impl ApiClient<FetchTransport> {
    /// Client for the configured backend, authenticated through `session`.
    pub fn from_config(session: SessionStore) -> Self {
        Self::new(CONFIG.api_base_url.clone(), FetchTransport, session)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T, session: SessionStore) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// POST /api/auth/login
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Logging in as {}", email);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .exchange(Operation::Login, HttpMethod::Post, &format!("{}/login", AUTH_PATH), Some(&body), None)
            .await?;

        if !response.is_success() {
            let message = auth_message(&response, Operation::Login);
            log::error!("❌ Login rejected ({}): {}", response.status, message);
            return Err(ApiError::Auth(message));
        }
        let login = decode::<LoginResponse>(Operation::Login, &response)?;
        log::info!("✅ Logged in as {}", login.name);
        Ok(login)
    }

    /// GET /api/auth/verify with the given token as bearer.
    pub async fn verify(&self, token: &str) -> Result<LoginResponse, ApiError> {
        let response = self
            .exchange::<()>(
                Operation::Verify,
                HttpMethod::Get,
                &format!("{}/verify", AUTH_PATH),
                None,
                Some(token.to_string()),
            )
            .await?;

        if !response.is_success() {
            let message = auth_message(&response, Operation::Verify);
            log::warn!("⚠️ Token verification failed ({}): {}", response.status, message);
            return Err(ApiError::Auth(message));
        }
        decode(Operation::Verify, &response)
    }

    /// GET /students, in server order.
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        let response = self
            .authorized::<()>(Operation::ListStudents, HttpMethod::Get, STUDENTS_PATH, None)
            .await?;
        let students: Vec<Student> = decode(Operation::ListStudents, &response)?;
        log::info!("📋 Loaded {} students", students.len());
        Ok(students)
    }

    /// POST /students
    pub async fn create_student(&self, draft: &StudentDraft) -> Result<Student, ApiError> {
        let payload = draft.to_payload()?;
        let response = self
            .authorized(Operation::CreateStudent, HttpMethod::Post, STUDENTS_PATH, Some(&payload))
            .await?;
        let student: Student = decode(Operation::CreateStudent, &response)?;
        log::info!("✅ Student created: {}", student.id);
        Ok(student)
    }

    /// PUT /students/{id}
    pub async fn update_student(&self, id: &str, draft: &StudentDraft) -> Result<Student, ApiError> {
        let payload = draft.to_payload()?;
        let path = format!("{}/{}", STUDENTS_PATH, path_segment(id));
        let response = self
            .authorized(Operation::UpdateStudent, HttpMethod::Put, &path, Some(&payload))
            .await?;
        let student = decode(Operation::UpdateStudent, &response)?;
        log::info!("✅ Student updated: {}", id);
        Ok(student)
    }

    /// PATCH /students/{id}/marks with only the numeric marks.
    pub async fn patch_marks(&self, id: &str, marks: f64) -> Result<Student, ApiError> {
        let body = MarksUpdate {
            marks: check_marks_range(marks)?,
        };
        let path = format!("{}/{}/marks", STUDENTS_PATH, path_segment(id));
        let response = self
            .authorized(Operation::PatchMarks, HttpMethod::Patch, &path, Some(&body))
            .await?;
        let student = decode(Operation::PatchMarks, &response)?;
        log::info!("✅ Marks updated for {}: {}", id, marks);
        Ok(student)
    }

    /// DELETE /students/email/{email}. The server addresses deletion by email.
    pub async fn delete_student(&self, email: &str) -> Result<(), ApiError> {
        let path = format!("{}/email/{}", STUDENTS_PATH, path_segment(email));
        self.authorized::<()>(Operation::DeleteStudent, HttpMethod::Delete, &path, None)
            .await?;
        log::info!("🗑️ Student deleted: {}", email);
        Ok(())
    }

    /// Student-resource call: bearer from the session, non-2xx mapped to `Http`.
    async fn authorized<B: Serialize>(
        &self,
        operation: Operation,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpResponse, ApiError> {
        let response = self
            .exchange(operation, method, path, body, self.session.token())
            .await?;
        if !response.is_success() {
            log::error!("❌ {} (HTTP {})", operation.failure_message(), response.status);
            return Err(ApiError::Http {
                operation,
                status: response.status,
            });
        }
        Ok(response)
    }

    async fn exchange<B: Serialize>(
        &self,
        operation: Operation,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        bearer: Option<String>,
    ) -> Result<HttpResponse, ApiError> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Validation(format!("Serialization error: {}", e)))?;

        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            body,
            bearer,
        };

        self.transport.send(request).await.map_err(|detail| {
            log::error!("❌ {}: {}", operation.failure_message(), detail);
            ApiError::Network { operation, detail }
        })
    }
}

fn decode<R: DeserializeOwned>(operation: Operation, response: &HttpResponse) -> Result<R, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        log::error!("❌ Parse error for {:?}: {}", operation, e);
        ApiError::Decode {
            operation,
            detail: e.to_string(),
        }
    })
}

/// Percent-encodes everything outside the unreserved set, keeping `@` so
/// email addresses stay readable in logs.
fn path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'@' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Server-provided error text, or the operation's generic message.
fn auth_message(response: &HttpResponse, operation: Operation) -> String {
    let text = response.body.trim();
    if text.is_empty() {
        operation.failure_message().to_string()
    } else {
        text.to_string()
    }
}
