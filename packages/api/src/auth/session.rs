//! # Client-side session
//!
//! [`Session`] is the single piece of shared state in the client: who is signed
//! in, and whether that has been confirmed by the server yet. It mirrors the
//! user record into a [`KeyValueStore`] so a reload can paint the signed-in UI
//! immediately, but the mirror is never trusted on its own:
//!
//! 1. [`Session::restore`] reads the stored user (optimistic) and starts in the
//!    `loading` phase.
//! 2. The caller asks the server who the cookie belongs to and hands the
//!    outcome to [`Session::reconcile`], which either adopts the server's user
//!    or clears everything, and ends the `loading` phase.
//!
//! Logging out is split the same way: the caller fires the logout request and
//! passes its outcome to [`Session::finish_logout`], which clears local state
//! whatever happened on the wire.
//!
//! `is_authenticated()` is derived from the user being present, so the two
//! can never disagree.

use store::KeyValueStore;

use crate::error::ApiError;
use crate::models::User;

/// Storage key for the mirrored user record.
pub const USER_STORAGE_KEY: &str = "user";

#[derive(Debug, Clone)]
pub struct Session<S> {
    user: Option<User>,
    loading: bool,
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    /// Restore the last known user from `store` and enter the loading phase.
    ///
    /// A record that no longer decodes is removed.
    pub fn restore(store: S) -> Self {
        let user = match store.get_json::<User>(USER_STORAGE_KEY) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Discarding unreadable stored user: {e}");
                store.remove(USER_STORAGE_KEY);
                None
            }
        };

        Self {
            user,
            loading: true,
            store,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// `true` until the first server reconciliation has finished.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_verified(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_verified)
    }

    /// Record a user the server has just authenticated.
    pub fn login(&mut self, user: User) {
        tracing::info!("Signed in as {}", user.email);
        self.set_user(user);
    }

    /// Replace the current user record after a profile or verification change.
    pub fn update_user(&mut self, user: User) {
        self.set_user(user);
    }

    /// Apply the outcome of the logout request. Local state is cleared either
    /// way; the server call is best-effort.
    pub fn finish_logout(&mut self, outcome: Result<(), ApiError>) {
        if let Err(e) = outcome {
            tracing::error!("Logout request failed: {e}");
        }
        tracing::info!("Signed out");
        self.clear();
    }

    /// Apply the outcome of the current-user check.
    pub fn reconcile(&mut self, outcome: Result<User, ApiError>) {
        match outcome {
            Ok(user) => self.set_user(user),
            Err(e) => {
                if self.user.is_some() {
                    tracing::info!("Stored session rejected by server: {e}");
                } else {
                    tracing::debug!("No active session: {e}");
                }
                self.clear();
            }
        }
        self.loading = false;
    }

    fn set_user(&mut self, user: User) {
        self.store.set_json(USER_STORAGE_KEY, &user);
        self.user = Some(user);
    }

    fn clear(&mut self) {
        self.user = None;
        self.store.remove(USER_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn ada(verified: bool) -> User {
        User {
            id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
            is_verified: verified,
            profile_pic: None,
        }
    }

    fn stored(user: &User) -> MemoryStore {
        let store = MemoryStore::new();
        store.set_json(USER_STORAGE_KEY, user);
        store
    }

    #[test]
    fn test_restore_empty_store() {
        let session = Session::restore(MemoryStore::new());

        assert!(session.user().is_none());
        assert!(!session.is_authenticated());
        assert!(session.is_loading());
    }

    #[test]
    fn test_restore_is_optimistic() {
        let session = Session::restore(stored(&ada(false)));

        assert!(session.is_authenticated());
        assert!(session.is_loading());
        assert_eq!(session.user().map(|u| u.id.as_str()), Some("u1"));
    }

    #[test]
    fn test_restore_drops_corrupt_record() {
        let store = MemoryStore::new();
        store.set(USER_STORAGE_KEY, "{\"_id\": truncated");

        let session = Session::restore(store.clone());

        assert!(!session.is_authenticated());
        assert!(store.get(USER_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_login_persists_user() {
        let store = MemoryStore::new();
        let mut session = Session::restore(store.clone());

        session.login(ada(false));

        assert!(session.is_authenticated());
        let persisted: Option<User> = store.get_json(USER_STORAGE_KEY).unwrap();
        assert_eq!(persisted, Some(ada(false)));
    }

    #[test]
    fn test_update_user_replaces_record() {
        let store = MemoryStore::new();
        let mut session = Session::restore(store.clone());
        session.login(ada(false));

        session.update_user(ada(false).verified());

        assert!(session.is_verified());
        let persisted: Option<User> = store.get_json(USER_STORAGE_KEY).unwrap();
        assert!(persisted.unwrap().is_verified);
    }

    #[test]
    fn test_logout_clears_even_when_request_fails() {
        let store = stored(&ada(true));
        let mut session = Session::restore(store.clone());
        session.reconcile(Ok(ada(true)));

        session.finish_logout(Err(ApiError::Network("connection refused".to_string())));

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(store.get(USER_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_logout_clears_on_success() {
        let store = stored(&ada(true));
        let mut session = Session::restore(store.clone());

        session.finish_logout(Ok(()));

        assert!(!session.is_authenticated());
        assert!(store.is_empty());
    }

    #[test]
    fn test_reconcile_failure_clears_restored_session() {
        let store = stored(&ada(true));
        let mut session = Session::restore(store.clone());
        assert!(session.is_authenticated());

        session.reconcile(Err(ApiError::Server {
            status: 401,
            message: Some("Unauthorized".to_string()),
        }));

        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
        assert!(store.get(USER_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_reconcile_network_failure_clears_too() {
        let mut session = Session::restore(stored(&ada(true)));

        session.reconcile(Err(ApiError::Network("offline".to_string())));

        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_reconcile_adopts_server_truth() {
        let store = stored(&ada(false));
        let mut session = Session::restore(store.clone());

        // Verified on another device since the record was stored.
        session.reconcile(Ok(ada(true)));

        assert!(session.is_verified());
        assert!(!session.is_loading());
        let persisted: Option<User> = store.get_json(USER_STORAGE_KEY).unwrap();
        assert!(persisted.unwrap().is_verified);
    }
}
