//! Mirrors the auth slice to durable storage and restores it at startup.

use std::sync::Arc;

use shared::UserProfile;

use super::storage::SessionStorage;
use crate::operation::Dispatcher;
use crate::services::api::catalog::auth as ops;
use crate::store::{Action, AuthSlice, Outcome, Session};

pub const TOKEN_KEY: &str = "auth_token";
pub const PROFILE_KEY: &str = "user_profile";

/// Result of startup restoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreResult {
    Authenticated { user: Option<UserProfile> },
    /// No usable token. The last known profile is still available for display.
    Unauthenticated { cached_user: Option<UserProfile> },
}

impl RestoreResult {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, RestoreResult::Authenticated { .. })
    }
}

/// Storage failures are logged and swallowed; the in-memory session stays authoritative.
#[derive(Clone)]
pub struct SessionBridge {
    storage: Arc<dyn SessionStorage>,
}

impl SessionBridge {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Read whatever session was persisted last.
    pub async fn load(&self) -> Session {
        let token = match self.storage.get(TOKEN_KEY).await {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored token");
                None
            }
        };

        let user = match self.storage.get(PROFILE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring unreadable stored profile");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored profile");
                None
            }
        };

        Session { token, user }
    }

    /// Hydrate the store from storage, then confirm the token with a profile fetch.
    ///
    /// A rejected token (401) is cleared but the cached profile kept. Any other failure
    /// leaves the cached session in place so the app works offline.
    pub async fn restore(&self, dispatcher: &Dispatcher) -> RestoreResult {
        let session = self.load().await;
        let has_token = session.token.is_some();
        let cached_user = session.user.clone();
        dispatcher.store().update(|s| s.auth.hydrate(session));

        if !has_token {
            tracing::info!(has_profile = cached_user.is_some(), "No stored session token");
            return RestoreResult::Unauthenticated { cached_user };
        }

        let syncing = dispatcher.syncs_session();
        match dispatcher.fetch::<UserProfile>(ops::GET_PROFILE).await {
            Ok(user) => {
                if !syncing {
                    self.persist_profile(&user).await;
                }
                tracing::info!(user_id = %user.id, "Session restored");
                RestoreResult::Authenticated { user: Some(user) }
            }
            Err(err) if err.is_auth_expired() => {
                if !syncing {
                    self.clear().await;
                }
                tracing::info!("Stored session token was rejected");
                RestoreResult::Unauthenticated { cached_user }
            }
            Err(err) => {
                tracing::warn!(kind = %err.kind, error = %err, "Could not confirm session - keeping cached profile");
                RestoreResult::Authenticated { user: cached_user }
            }
        }
    }

    pub async fn persist_token(&self, token: &str) {
        if let Err(e) = self.storage.set(TOKEN_KEY, token).await {
            tracing::warn!(error = %e, "Failed to persist session token");
        }
    }

    pub async fn persist_profile(&self, user: &UserProfile) {
        let raw = match serde_json::to_string(user) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to encode profile");
                return;
            }
        };
        if let Err(e) = self.storage.set(PROFILE_KEY, &raw).await {
            tracing::warn!(error = %e, "Failed to persist profile");
        }
    }

    /// Drop the token. The profile is kept.
    pub async fn clear(&self) {
        if let Err(e) = self.storage.remove(TOKEN_KEY).await {
            tracing::warn!(error = %e, "Failed to clear session token");
        }
    }

    /// Mirror an applied auth outcome.
    pub(crate) async fn sync(&self, action: &Action, auth: &AuthSlice) {
        let name = action.op.name;
        match &action.outcome {
            Outcome::Fulfilled(_) if auth.error().is_some() => {}
            Outcome::Fulfilled(_) if name == ops::LOGIN.op.name || name == ops::REGISTER.op.name => {
                if let Some(token) = &auth.token {
                    self.persist_token(token).await;
                }
                if let Some(user) = &auth.user {
                    self.persist_profile(user).await;
                }
            }
            Outcome::Fulfilled(_) if name == ops::GET_PROFILE.op.name || name == ops::UPDATE_PROFILE.op.name => {
                if let Some(user) = &auth.user {
                    self.persist_profile(user).await;
                }
            }
            Outcome::Fulfilled(_) if name == ops::CHANGE_PASSCODE.op.name => self.clear().await,
            Outcome::Rejected(err) if name == ops::GET_PROFILE.op.name && err.is_auth_expired() => {
                self.clear().await
            }
            _ => {}
        }
    }
}

impl std::fmt::Debug for SessionBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionBridge").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TransportError;
    use crate::core::http::{HttpRequest, HttpResponse};
    use crate::core::service::HttpExecutor;
    use crate::session::MemoryStorage;
    use crate::store::Store;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::io;

    struct Fixed(Result<HttpResponse, TransportError>);

    #[async_trait]
    impl HttpExecutor for Fixed {
        async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.0.clone()
        }
    }

    struct Broken;

    #[async_trait]
    impl SessionStorage for Broken {
        async fn get(&self, _key: &str) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
        async fn set(&self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
        async fn remove(&self, _key: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    fn user_json() -> Value {
        json!({"id": "42", "first_name": "Ada", "last_name": "Obi", "email": "ada@example.com"})
    }

    fn user() -> UserProfile {
        serde_json::from_value(user_json()).unwrap()
    }

    async fn seeded() -> (Arc<MemoryStorage>, SessionBridge) {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "stored").await.unwrap();
        storage.set(PROFILE_KEY, &user_json().to_string()).await.unwrap();
        let bridge = SessionBridge::new(storage.clone());
        (storage, bridge)
    }

    fn dispatcher(response: Result<HttpResponse, TransportError>, bridge: &SessionBridge) -> Dispatcher {
        Dispatcher::new(Arc::new(Fixed(response)), Store::new(), "http://bank.test/api").with_session(bridge.clone())
    }

    #[tokio::test]
    async fn test_load_reads_token_and_profile() {
        let (_, bridge) = seeded().await;
        let session = bridge.load().await;
        assert_eq!(session.token.as_deref(), Some("stored"));
        assert_eq!(session.user, Some(user()));
    }

    #[tokio::test]
    async fn test_load_ignores_bad_profile() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(PROFILE_KEY, "not json").await.unwrap();
        let session = SessionBridge::new(storage).load().await;
        assert_eq!(session, Session::default());
    }

    #[tokio::test]
    async fn test_restore_confirms_session() {
        let (storage, bridge) = seeded().await;
        let mut fresh = user_json();
        fresh["first_name"] = json!("Adaeze");
        let dispatcher = dispatcher(
            Ok(HttpResponse::new(200, Some(json!({"status": "success", "success": true, "data": fresh})))),
            &bridge,
        );

        let result = bridge.restore(&dispatcher).await;
        assert!(result.is_authenticated());

        let auth = dispatcher.store().auth();
        assert!(auth.is_authenticated);
        assert_eq!(auth.user.as_ref().map(|u| u.first_name.as_str()), Some("Adaeze"));
        let stored = storage.get(PROFILE_KEY).await.unwrap().unwrap();
        assert!(stored.contains("Adaeze"));
    }

    #[tokio::test]
    async fn test_restore_401_clears_token_keeps_profile() {
        let (storage, bridge) = seeded().await;
        let dispatcher = dispatcher(Ok(HttpResponse::new(401, Some(json!({"message": "Token expired"})))), &bridge);

        let result = bridge.restore(&dispatcher).await;
        assert_eq!(result, RestoreResult::Unauthenticated { cached_user: Some(user()) });

        let auth = dispatcher.store().auth();
        assert!(!auth.is_authenticated);
        assert!(auth.token.is_none());
        assert_eq!(auth.user, Some(user()));
        assert_eq!(storage.get(TOKEN_KEY).await.unwrap(), None);
        assert!(storage.get(PROFILE_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_restore_network_failure_keeps_cached_session() {
        let (storage, bridge) = seeded().await;
        let dispatcher = dispatcher(Err(TransportError::Connect("refused".to_string())), &bridge);

        let result = bridge.restore(&dispatcher).await;
        assert_eq!(result, RestoreResult::Authenticated { user: Some(user()) });
        assert!(dispatcher.store().auth().is_authenticated);
        assert_eq!(storage.get(TOKEN_KEY).await.unwrap().as_deref(), Some("stored"));
    }

    #[tokio::test]
    async fn test_restore_without_token_skips_fetch() {
        let storage = Arc::new(MemoryStorage::new());
        let bridge = SessionBridge::new(storage);
        // any request would fail the test through a rejected restore
        let dispatcher = dispatcher(Err(TransportError::Other("unexpected request".to_string())), &bridge);

        let result = bridge.restore(&dispatcher).await;
        assert_eq!(result, RestoreResult::Unauthenticated { cached_user: None });
        assert_eq!(dispatcher.store().read(|s| s.latest_sequence(ops::GET_PROFILE.op)), 0);
    }

    #[tokio::test]
    async fn test_storage_failures_are_swallowed() {
        let bridge = SessionBridge::new(Arc::new(Broken));
        assert_eq!(bridge.load().await, Session::default());
        bridge.persist_token("abc").await;
        bridge.persist_profile(&user()).await;
        bridge.clear().await;
    }

    #[tokio::test]
    async fn test_login_is_persisted() {
        let storage = Arc::new(MemoryStorage::new());
        let bridge = SessionBridge::new(storage.clone());
        let dispatcher = dispatcher(
            Ok(HttpResponse::new(
                200,
                Some(json!({
                    "status": "success",
                    "success": true,
                    "data": {"access_token": "fresh", "user": user_json()}
                })),
            )),
            &bridge,
        );

        dispatcher
            .call::<_, Value>(ops::LOGIN, Some(json!({"email_or_phone": "ada@example.com", "password": "pw"})))
            .await
            .unwrap();

        assert_eq!(storage.get(TOKEN_KEY).await.unwrap().as_deref(), Some("fresh"));
        let stored: UserProfile = serde_json::from_str(&storage.get(PROFILE_KEY).await.unwrap().unwrap()).unwrap();
        assert_eq!(stored, user());
    }
}
