//! Authentication endpoints
//!
//! Sign-up, sign-in (email/password or Google OAuth), and sign-out. The
//! sign-in flavors return the signed user together with its bearer token;
//! persisting that token into a [`SessionStore`](crate::session::SessionStore)
//! is the caller's job, which keeps the client itself a pure reader of the
//! session slot.

use crate::client::TuysClient;
use crate::error::ApiResult;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Authentication API interface
#[derive(Clone)]
pub struct AuthApi {
    client: TuysClient,
}

impl AuthApi {
    /// Create a new authentication API interface
    pub(crate) fn new(client: TuysClient) -> Self {
        Self { client }
    }

    /// Register a new account
    ///
    /// POST /auth/sign-up
    pub async fn sign_up(&self, body: &SignUp) -> ApiResult<()> {
        self.client.post("/auth/sign-up", body).await
    }

    /// Sign in with email and password
    ///
    /// POST /auth/sign-in
    pub async fn sign_in(&self, body: &SignIn) -> ApiResult<SignedUser> {
        self.client.post_json("/auth/sign-in", body).await
    }

    /// Invalidate the current session on the backend
    ///
    /// POST /auth/sign-out
    pub async fn sign_out(&self) -> ApiResult<()> {
        self.client.post("/auth/sign-out", &json!({})).await
    }

    /// Sign in through the Google OAuth method
    ///
    /// POST /auth/sign/method/google
    pub async fn sign_in_with_google(&self, body: &SignUp) -> ApiResult<SignedUser> {
        self.client.post_json("/auth/sign/method/google", body).await
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Payload for registering an account (also used by the Google method)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUp {
    pub username: String,
    pub avatar: String,
    pub email: String,
    pub password: String,
}

/// Payload for signing in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignIn {
    pub email: String,
    pub password: String,
}

/// Signed-in user returned by the sign-in flavors: user data plus token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedUser {
    pub id: i32,
    pub username: String,
    pub avatar: String,
    /// Bearer token for subsequent authenticated calls
    pub token: String,
}

impl SignedUser {
    /// Build the session slot contents for this user
    #[must_use]
    pub fn to_session(&self) -> Session {
        Session {
            token: self.token.clone(),
            user_id: Some(self.id),
            username: Some(self.username.clone()),
            avatar: Some(self.avatar.clone()),
        }
    }
}
