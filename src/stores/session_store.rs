// ============================================================================
// SESSION STORE - admin token and identity in persistent storage
// ============================================================================
// Built over an injected KeyValueStorage and handed to the auth gate, the
// login flow and the API client at construction time.
// ============================================================================

use std::rc::Rc;

use crate::models::Session;
use crate::utils::{
    BrowserStorage, KeyValueStorage, StorageError, STORAGE_KEY_ADMIN_EMAIL,
    STORAGE_KEY_ADMIN_NAME, STORAGE_KEY_TOKEN,
};

#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    /// Writes all three keys, replacing whatever was stored before.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.storage.set(STORAGE_KEY_TOKEN, &session.token)?;
        self.storage.set(STORAGE_KEY_ADMIN_EMAIL, &session.admin_email)?;
        self.storage.set(STORAGE_KEY_ADMIN_NAME, &session.admin_name)?;
        log::info!("💾 Session saved for {}", session.admin_email);
        Ok(())
    }

    /// Any non-empty token counts as authenticated; its shape is not checked.
    pub fn read(&self) -> Option<Session> {
        let token = self.storage.get(STORAGE_KEY_TOKEN).filter(|t| !t.is_empty())?;
        Some(Session {
            token,
            admin_email: self.storage.get(STORAGE_KEY_ADMIN_EMAIL).unwrap_or_default(),
            admin_name: self.storage.get(STORAGE_KEY_ADMIN_NAME).unwrap_or_default(),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.read().map(|session| session.token)
    }

    pub fn clear(&self) {
        self.storage.remove(STORAGE_KEY_TOKEN);
        self.storage.remove(STORAGE_KEY_ADMIN_EMAIL);
        self.storage.remove(STORAGE_KEY_ADMIN_NAME);
        log::info!("🗑️ Session cleared");
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.read().is_some())
            .finish()
    }
}
