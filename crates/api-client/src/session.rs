//! Session credential storage
//!
//! The web client keeps its signed-in session in a single storage slot named
//! `tuys.com` and reads the bearer token out of it before every request. Here
//! that slot is an explicit capability: the client is handed a
//! [`SessionStore`] at construction and reads it fresh on every call, so a
//! sign-in performed elsewhere becomes visible to subsequent requests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name for the persisted session, after the web client's storage key
const SESSION_FILE: &str = "tuys.com.json";

/// Directory under the platform config dir holding TUYS state
const APP_DIR: &str = "tuys";

/// Contents of the persisted session slot
///
/// The backend guarantees at least `token`; the remaining fields mirror what
/// the sign-in response carries and are kept for display purposes only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token identifying the signed-in user
    pub token: String,
    /// Numeric id of the signed-in user
    #[serde(default)]
    pub user_id: Option<i32>,
    /// Display name of the signed-in user
    #[serde(default)]
    pub username: Option<String>,
    /// Avatar URL of the signed-in user
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Session {
    /// Create a session holding only a bearer token
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: None,
            username: None,
            avatar: None,
        }
    }
}

/// Session store errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No session has been persisted
    #[error("no session stored")]
    Missing,
    /// The platform exposes no configuration directory
    #[error("no configuration directory available")]
    NoConfigDir,
    /// Reading or writing the session slot failed
    #[error("session store io: {0}")]
    Io(#[from] std::io::Error),
    /// The persisted slot does not hold a valid session object
    #[error("malformed session data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Trait for session persistence
///
/// Injected into the client so tests can substitute a deterministic provider
/// without touching shared storage. Stores are read-heavy: the client loads
/// the session before every request and never writes it — saving and clearing
/// belong to the sign-in and sign-out flows.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the persisted session
    async fn load(&self) -> Result<Session, SessionError>;

    /// Persists a session, replacing any previous one
    async fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Removes the persisted session
    async fn clear(&self) -> Result<(), SessionError>;
}

/// File-backed session store under the user configuration directory
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store at the default location (`<config dir>/tuys/tuys.com.json`)
    pub fn new() -> Result<Self, SessionError> {
        let dir = dirs::config_dir()
            .ok_or(SessionError::NoConfigDir)?
            .join(APP_DIR);
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(SESSION_FILE),
        })
    }

    /// Creates a store at a custom path
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the session file
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Session, SessionError> {
        if !self.path.exists() {
            return Err(SessionError::Missing);
        }
        let data = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        let data = serde_json::to_string(session)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory session store
///
/// Deterministic provider for tests and ephemeral (never-persisted) sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: std::sync::RwLock<Option<Session>>,
}

impl MemorySessionStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a session
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            session: std::sync::RwLock::new(Some(session)),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Session, SessionError> {
        self.session
            .read()
            .expect("session lock poisoned")
            .clone()
            .ok_or(SessionError::Missing)
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        *self.session.write().expect("session lock poisoned") = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        *self.session.write().expect("session lock poisoned") = None;
        Ok(())
    }
}
