// ============================================================================
// AUTH VIEWMODEL - login, logout and optional token verification
// ============================================================================

use std::rc::Rc;

use crate::models::Session;
use crate::services::{ApiClient, ApiError, FetchTransport, Transport};
use crate::stores::SessionStore;

/// Outcome of asking the server whether the stored token is still good.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCheck {
    Valid(Session),
    /// Token missing or refused; the stored session has been cleared.
    Rejected,
    /// Server unreachable; the session is kept.
    Unknown,
}

pub struct AuthViewModel<T: Transport = FetchTransport> {
    api: Rc<ApiClient<T>>,
}

impl<T: Transport> AuthViewModel<T> {
    pub fn new(api: Rc<ApiClient<T>>) -> Self {
        Self { api }
    }

    fn session(&self) -> &SessionStore {
        self.api.session()
    }

    /// Single login attempt. The session is written only when the server
    /// accepts the credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::Validation("Please fill in all fields".to_string()));
        }

        let session = Session::from(self.api.login(email, password).await?);
        if let Err(e) = self.session().save(&session) {
            log::error!("❌ {}", e);
        }
        Ok(session)
    }

    pub fn logout(&self) {
        log::info!("👋 Logging out");
        self.session().clear();
    }

    pub async fn verify(&self) -> SessionCheck {
        let Some(stored) = self.session().read() else {
            return SessionCheck::Rejected;
        };

        match self.api.verify(&stored.token).await {
            Ok(response) => {
                let session = Session::from(response);
                if session != stored {
                    if let Err(e) = self.session().save(&session) {
                        log::error!("❌ {}", e);
                    }
                }
                SessionCheck::Valid(session)
            }
            Err(e) if e.is_unauthorized() => {
                log::warn!("⚠️ Stored token rejected: {}", e);
                self.session().clear();
                SessionCheck::Rejected
            }
            Err(e) => {
                log::warn!("⚠️ Could not verify session: {}", e);
                SessionCheck::Unknown
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{gate, GateDecision};
    use crate::services::transport::testing::ScriptedTransport;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;

    const GRACE: &str = r#"{"token":"jwt","email":"admin@school.test","name":"Grace"}"#;

    fn auth() -> (AuthViewModel<ScriptedTransport>, ScriptedTransport, Rc<MemoryStorage>) {
        let transport = ScriptedTransport::new();
        let storage = Rc::new(MemoryStorage::new());
        let session = SessionStore::new(storage.clone());
        let api = Rc::new(ApiClient::new("http://api.test", transport.clone(), session));
        (AuthViewModel::new(api), transport, storage)
    }

    #[test]
    fn successful_login_persists_session() {
        let (vm, transport, storage) = auth();
        transport.reply(200, GRACE);

        let session = block_on(vm.login("admin@school.test", "pw")).unwrap();
        assert_eq!(session.admin_name, "Grace");
        assert_eq!(storage.len(), 3);
        assert_eq!(vm.session().read(), Some(session));
    }

    #[test]
    fn wrong_credentials_write_nothing() {
        let (vm, transport, storage) = auth();
        transport.reply(401, "Invalid email or password");

        let err = block_on(vm.login("admin@school.test", "nope")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(storage.is_empty());
        assert_eq!(gate(vm.session()), GateDecision::Deny);
    }

    #[test]
    fn empty_fields_are_rejected_before_any_request() {
        let (vm, transport, _) = auth();
        assert!(matches!(block_on(vm.login("  ", "pw")), Err(ApiError::Validation(_))));
        assert!(matches!(block_on(vm.login("a@b.c", "")), Err(ApiError::Validation(_))));
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn logout_clears_session() {
        let (vm, transport, storage) = auth();
        transport.reply(200, GRACE);
        block_on(vm.login("admin@school.test", "pw")).unwrap();
        vm.logout();
        assert!(storage.is_empty());
    }

    #[test]
    fn verify_outcomes() {
        let (vm, transport, storage) = auth();
        assert_eq!(block_on(vm.verify()), SessionCheck::Rejected);
        assert!(transport.sent().is_empty());

        transport
            .reply(200, GRACE)
            .reply(200, r#"{"token":"jwt","email":"admin@school.test","name":"Grace H."}"#)
            .fail("offline")
            .reply(401, "Invalid token");
        block_on(vm.login("admin@school.test", "pw")).unwrap();

        let renamed = block_on(vm.verify());
        assert!(matches!(renamed, SessionCheck::Valid(ref s) if s.admin_name == "Grace H."));
        assert_eq!(vm.session().read().unwrap().admin_name, "Grace H.");

        assert_eq!(block_on(vm.verify()), SessionCheck::Unknown);
        assert_eq!(storage.len(), 3);

        assert_eq!(block_on(vm.verify()), SessionCheck::Rejected);
        assert!(storage.is_empty());
    }
}
