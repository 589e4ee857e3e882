//! Access-token session state for the user-facing shell.
//!
//! The shell keeps two pieces of session state: the bearer token used by
//! every authenticated request, and the last successful login response shown
//! in the account panel. Both survive a reload through a host-provided
//! key-value store; the store itself (browser storage, keychain, a file) is
//! the host's concern.

use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

const ACCESS_TOKEN_KEY: &str = "kots_users_access_token";
const LAST_LOGIN_RESULT_KEY: &str = "kots_users_last_login_result";

/// Payload of a successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub email: String,
    pub role: String,
    pub token: String,
}

/// Envelope the auth endpoints wrap their payloads in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginEnvelope {
    pub success: bool,
    pub message: String,
    pub data: LoginData,
}

/// Host-provided persistence for session values.
///
/// Implementations map string keys to string values; the session layer does
/// its own JSON encoding. Load failures are absorbed by the session (a
/// broken store must never lock the user out of a fresh login).
pub trait SessionStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Process-local store for tests and hosts without persistent storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// In-memory session state backed by a [`SessionStore`].
///
/// The in-memory copy is authoritative: store failures are logged and the
/// state still updates, so flaky storage degrades to a session that does not
/// survive reload instead of a broken one.
#[derive(Debug)]
pub struct AuthSession<S: SessionStore> {
    store: S,
    access_token: Option<String>,
    last_login: Option<LoginEnvelope>,
}

impl<S: SessionStore> AuthSession<S> {
    /// Rebuilds session state from whatever the store still holds.
    ///
    /// A missing or unparsable persisted envelope counts as "no previous
    /// login"; the token is restored independently of it.
    pub fn restore(store: S) -> Self {
        let access_token = Self::load_value(&store, ACCESS_TOKEN_KEY);
        let last_login = Self::load_value(&store, LAST_LOGIN_RESULT_KEY)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(envelope) => Some(envelope),
                Err(err) => {
                    warn!("discarding unparsable persisted login result: {err}");
                    None
                }
            });

        Self {
            store,
            access_token,
            last_login,
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn has_session(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn last_login(&self) -> Option<&LoginEnvelope> {
        self.last_login.as_ref()
    }

    /// Records a successful login and persists both the token and the full
    /// envelope.
    pub fn set_login_result(&mut self, result: LoginEnvelope) {
        self.access_token = Some(result.data.token.clone());

        match serde_json::to_string(&result) {
            Ok(raw) => self.persist(LAST_LOGIN_RESULT_KEY, &raw),
            Err(err) => warn!("failed to encode login result: {err}"),
        }
        self.persist(ACCESS_TOKEN_KEY, &result.data.token);

        self.last_login = Some(result);
    }

    /// Drops the remembered login envelope. The token stays valid.
    pub fn clear_login_result(&mut self) {
        self.last_login = None;
        self.discard(LAST_LOGIN_RESULT_KEY);
    }

    /// Forgets the whole session: token and envelope, in memory and in the
    /// store. Runs on logout and on 401-driven session invalidation.
    pub fn clear_auth(&mut self) {
        self.access_token = None;
        self.last_login = None;
        self.discard(ACCESS_TOKEN_KEY);
        self.discard(LAST_LOGIN_RESULT_KEY);
    }

    fn load_value(store: &S, key: &str) -> Option<String> {
        match store.load(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("session store read failed for {key}: {err}");
                None
            }
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.save(key, value) {
            warn!("session store write failed for {key}: {err}");
        }
    }

    fn discard(&mut self, key: &str) {
        if let Err(err) = self.store.remove(key) {
            warn!("session store remove failed for {key}: {err}");
        }
    }
}
