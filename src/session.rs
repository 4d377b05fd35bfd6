// =============================================================================
// Connect-U Web - Session Store
// =============================================================================
// Table of Contents:
// 1. Token Pair
// 2. Storage Backends
// 3. Navigation
// 4. Session Handle
// =============================================================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::LOGIN_PATH;

/// localStorage key holding the access token.
pub const ACCESS_KEY: &str = "access";

/// localStorage key holding the refresh token.
pub const REFRESH_KEY: &str = "refresh";

// -----------------------------------------------------------------------------
// 1. Token Pair
// -----------------------------------------------------------------------------

/// JWT pair issued by `/api/v1/auth/jwt/create/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

// -----------------------------------------------------------------------------
// 2. Storage Backends
// -----------------------------------------------------------------------------

/// String key-value storage the session persists into.
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// Browser `localStorage`.
///
/// Values are written raw rather than JSON-encoded, so other scripts on the
/// same origin read the same plain strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl TokenStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        use gloo_storage::Storage;
        gloo_storage::LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        use gloo_storage::Storage;
        if gloo_storage::LocalStorage::raw().set_item(key, value).is_err() {
            log::warn!("localStorage rejected write for key '{}'", key);
        }
    }

    fn delete(&self, key: &str) {
        use gloo_storage::Storage;
        gloo_storage::LocalStorage::delete(key);
    }
}

// -----------------------------------------------------------------------------
// 3. Navigation
// -----------------------------------------------------------------------------

/// Full-page navigation.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Navigates by assigning `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        crate::utils::navigate_to(path);
    }
}

// -----------------------------------------------------------------------------
// 4. Session Handle
// -----------------------------------------------------------------------------

/// Explicit handle over the persisted token pair.
///
/// Cloning shares the same backends.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn TokenStorage + Send + Sync>,
    navigator: Arc<dyn Navigator + Send + Sync>,
}

impl Session {
    pub fn new(
        storage: impl TokenStorage + Send + Sync + 'static,
        navigator: impl Navigator + Send + Sync + 'static,
    ) -> Self {
        Self {
            storage: Arc::new(storage),
            navigator: Arc::new(navigator),
        }
    }

    /// Session backed by `localStorage` and `window.location`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage, BrowserNavigator)
    }

    /// Stored access token, if any. Empty strings count as absent.
    pub fn access_token(&self) -> Option<String> {
        self.storage.get(ACCESS_KEY).filter(|token| !token.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(REFRESH_KEY).filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Persist both tokens.
    pub fn save(&self, tokens: &TokenPair) {
        self.storage.set(ACCESS_KEY, &tokens.access);
        self.storage.set(REFRESH_KEY, &tokens.refresh);
    }

    /// Remove both tokens.
    pub fn clear(&self) {
        self.storage.delete(ACCESS_KEY);
        self.storage.delete(REFRESH_KEY);
    }

    pub fn redirect(&self, path: &str) {
        self.navigator.redirect(path);
    }

    /// Clear the tokens and send the user to the login page.
    pub fn logout(&self) {
        log::info!("Logging out");
        self.clear();
        self.redirect(LOGIN_PATH);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryStorage, RecordingNavigator};

    fn session() -> (Session, MemoryStorage, RecordingNavigator) {
        let storage = MemoryStorage::default();
        let navigator = RecordingNavigator::default();
        (Session::new(storage.clone(), navigator.clone()), storage, navigator)
    }

    #[test]
    fn test_save_writes_raw_strings() {
        let (session, storage, _) = session();
        session.save(&TokenPair {
            access: "a-1".to_string(),
            refresh: "r-1".to_string(),
        });

        assert_eq!(storage.get("access").as_deref(), Some("a-1"));
        assert_eq!(storage.get("refresh").as_deref(), Some("r-1"));
        assert!(session.is_authenticated());
        assert_eq!(session.refresh_token().as_deref(), Some("r-1"));
    }

    #[test]
    fn test_empty_access_token_is_not_a_session() {
        let (session, storage, _) = session();
        storage.set("access", "");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_logout_clears_and_redirects() {
        let (session, storage, navigator) = session();
        storage.set("access", "a");
        storage.set("refresh", "r");
        storage.set("theme", "dark");

        session.logout();

        assert!(storage.get("access").is_none());
        assert!(storage.get("refresh").is_none());
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));
        assert_eq!(navigator.visited(), vec!["/login".to_string()]);
    }
}
