//! Session Store
//!
//! Single source of truth for the authentication token and role, persisted
//! in local storage so the session survives page reloads. Provided to the
//! component tree as Leptos context at application start.

use leptos::*;

/// Role assigned when the backend does not name one
pub const DEFAULT_ROLE: &str = "user";

const TOKEN_KEY: &str = "ewaste_token";
const ROLE_KEY: &str = "ewaste_role";

/// Plain session value; token absence means unauthenticated
#[derive(Clone, Debug, PartialEq)]
pub struct SessionData {
    pub token: Option<String>,
    pub role: String,
}

impl Default for SessionData {
    fn default() -> Self {
        Self {
            token: None,
            role: DEFAULT_ROLE.to_string(),
        }
    }
}

impl SessionData {
    /// Rebuild session state from whatever was last persisted
    pub fn from_persisted(token: Option<String>, role: Option<String>) -> Self {
        Self {
            token,
            role: role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        }
    }

    /// State after a successful credential exchange
    pub fn logged_in(token: impl Into<String>, role: Option<&str>) -> Self {
        Self {
            token: Some(token.into()),
            role: role.unwrap_or(DEFAULT_ROLE).to_string(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Reactive session handle shared through context
#[derive(Clone)]
pub struct Session {
    data: RwSignal<SessionData>,
}

impl Session {
    /// Seed the session from local storage; absent keys yield the
    /// unauthenticated default
    pub fn restore() -> Self {
        let data = SessionData::from_persisted(storage_get(TOKEN_KEY), storage_get(ROLE_KEY));
        Self {
            data: create_rw_signal(data),
        }
    }

    /// Persist the token and role, then update in-memory state
    pub fn login(&self, token: String, role: Option<String>) {
        let next = SessionData::logged_in(token, role.as_deref());
        if let Some(token) = next.token.as_deref() {
            storage_set(TOKEN_KEY, token);
        }
        storage_set(ROLE_KEY, &next.role);
        self.data.set(next);
    }

    /// Clear persisted state and reset to the unauthenticated default.
    /// Local-only; the token is not revoked on the backend.
    pub fn logout(&self) {
        storage_remove(TOKEN_KEY);
        storage_remove(ROLE_KEY);
        self.data.set(SessionData::default());
    }

    pub fn token(&self) -> Option<String> {
        self.data.with(|d| d.token.clone())
    }

    pub fn role(&self) -> String {
        self.data.with(|d| d.role.clone())
    }

    /// Reactive when read inside a tracking scope
    pub fn is_authenticated(&self) -> bool {
        self.data.with(|d| d.is_authenticated())
    }
}

/// Provide the session to the component tree
pub fn provide_session() {
    provide_context(Session::restore());
}

/// Fetch the session from context
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not provided")
}

// ============ Local storage plumbing ============

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn storage_remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_unauthenticated_with_user_role() {
        let session = SessionData::default();
        assert_eq!(session.token, None);
        assert_eq!(session.role, "user");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn restore_with_nothing_persisted_equals_default() {
        assert_eq!(SessionData::from_persisted(None, None), SessionData::default());
    }

    #[test]
    fn restore_round_trips_persisted_values() {
        let session =
            SessionData::from_persisted(Some("abc".to_string()), Some("admin".to_string()));
        assert_eq!(session.token.as_deref(), Some("abc"));
        assert_eq!(session.role, "admin");
    }

    #[test]
    fn login_defaults_role_to_user() {
        let session = SessionData::logged_in("t0k3n", None);
        assert_eq!(session.token.as_deref(), Some("t0k3n"));
        assert_eq!(session.role, "user");
        assert!(session.is_authenticated());
    }

    #[test]
    fn logout_returns_to_default_regardless_of_login_inputs() {
        for (token, role) in [("abc", Some("admin")), ("xyz", None)] {
            let logged_in = SessionData::logged_in(token, role);
            assert!(logged_in.is_authenticated());

            // logout discards the persisted pair; the rebuilt state is the default
            let after_logout = SessionData::from_persisted(None, None);
            assert_eq!(after_logout, SessionData::default());
            assert_ne!(after_logout, logged_in);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn persisted_session_survives_reload() {
        storage_set(TOKEN_KEY, "abc");
        storage_set(ROLE_KEY, "admin");

        let restored = SessionData::from_persisted(storage_get(TOKEN_KEY), storage_get(ROLE_KEY));
        assert_eq!(restored.token.as_deref(), Some("abc"));
        assert_eq!(restored.role, "admin");

        storage_remove(TOKEN_KEY);
        storage_remove(ROLE_KEY);
        let cleared = SessionData::from_persisted(storage_get(TOKEN_KEY), storage_get(ROLE_KEY));
        assert_eq!(cleared, SessionData::default());
    }
}
