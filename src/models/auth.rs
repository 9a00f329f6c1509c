use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Manual Debug so the password never reaches the logs.
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Body of a successful login or token verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    pub name: String,
}

/// Authenticated administrator, as persisted on the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub admin_email: String,
    pub admin_name: String,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            admin_email: response.email,
            admin_name: response.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_debug_hides_password() {
        let request = LoginRequest {
            email: "admin@school.test".into(),
            password: "hunter2".into(),
        };
        let printed = format!("{:?}", request);
        assert!(printed.contains("admin@school.test"));
        assert!(!printed.contains("hunter2"));
    }
}
