//! User endpoints
//!
//! Profile reads, registration data, per-user story listings, username
//! search, and the follow relationship.

use crate::client::TuysClient;
use crate::endpoints::stories::Story;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Users API interface
#[derive(Clone)]
pub struct UsersApi {
    client: TuysClient,
}

impl UsersApi {
    /// Create a new users API interface
    pub(crate) fn new(client: TuysClient) -> Self {
        Self { client }
    }

    /// Fetch the signed-in user's summary
    ///
    /// GET /users/me
    pub async fn me(&self) -> ApiResult<MyData> {
        self.client.get("/users/me").await
    }

    /// Fetch the signed-in user's registration record
    ///
    /// GET /users/register/me
    pub async fn register(&self) -> ApiResult<UserRegister> {
        self.client.get("/users/register/me").await
    }

    /// List the signed-in user's stories
    ///
    /// GET /users/me/stories
    pub async fn my_stories(&self) -> ApiResult<Vec<Story>> {
        self.client.get("/users/me/stories").await
    }

    /// List another user's stories
    ///
    /// GET /users/{userId}/stories
    pub async fn stories(&self, user_id: i32) -> ApiResult<Vec<Story>> {
        self.client.get(&format!("/users/{user_id}/stories")).await
    }

    /// Search users by (partial) username
    ///
    /// GET /users/{username}
    pub async fn search(&self, username: &str) -> ApiResult<Vec<UserSummary>> {
        self.client.get(&format!("/users/{username}")).await
    }

    /// Fetch a user's public profile
    ///
    /// GET /users/user/{userId}
    pub async fn profile(&self, user_id: i32) -> ApiResult<UserData> {
        self.client.get(&format!("/users/user/{user_id}")).await
    }

    /// Follow a user
    ///
    /// POST /users/{userId}/follow
    pub async fn follow(&self, user_id: i32) -> ApiResult<()> {
        self.client.post(&format!("/users/{user_id}/follow"), &json!({})).await
    }

    /// Unfollow a user
    ///
    /// POST /users/{userId}/unfollow
    pub async fn unfollow(&self, user_id: i32) -> ApiResult<()> {
        self.client.post(&format!("/users/{user_id}/unfollow"), &json!({})).await
    }

    /// Update the signed-in user's registration record
    ///
    /// PUT /users/{userId}
    pub async fn update_register(&self, user_id: i32, update: &RegisterUpdate) -> ApiResult<()> {
        self.client.put(&format!("/users/{user_id}"), update).await
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Signed-in user summary (`/users/me`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyData {
    pub id: i32,
    pub username: String,
    pub avatar: String,
    #[serde(rename = "rankColor")]
    pub rank_color: String,
    /// Account status as reported by the backend (e.g. "ACTIVE", "BANNED")
    pub status: String,
}

/// Registration record (`/users/register/me`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegister {
    pub id: i32,
    pub username: String,
    pub avatar: String,
    pub email: String,
    pub about: String,
}

/// Username search result entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub avatar: String,
    #[serde(rename = "rankColor")]
    pub rank_color: String,
    /// Whether the signed-in user already follows this user
    pub following: bool,
    /// Whether this entry is the signed-in user themselves
    #[serde(rename = "isUser")]
    pub is_user: bool,
}

/// Public profile (`/users/user/{userId}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub id: i32,
    pub username: String,
    pub avatar: String,
    pub about: String,
    #[serde(rename = "rankColor")]
    pub rank_color: String,
    pub status: String,
    #[serde(rename = "isFollower")]
    pub is_follower: bool,
    #[serde(rename = "isUser")]
    pub is_user: bool,
    pub followers: i64,
    pub following: i64,
    #[serde(rename = "createdStories")]
    pub created_stories: i64,
}

/// Payload for updating the registration record (email cannot change)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUpdate {
    pub username: String,
    pub avatar: String,
    pub about: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::ApiError;
    use crate::session::{MemorySessionStore, Session};
    use std::sync::Arc;

    fn client_for(server: &mockito::ServerGuard) -> TuysClient {
        let config = ClientConfig::development().with_base_url(server.url());
        let store = Arc::new(MemorySessionStore::with_session(Session::with_token("t1")));
        TuysClient::with_config(config, store).unwrap()
    }

    #[test]
    fn test_user_data_deserialize() {
        let json = r##"{
            "id": 4,
            "username": "rafa",
            "avatar": "https://example.com/rafa.png",
            "about": "conto historias",
            "rankColor": "#B600C6",
            "status": "ACTIVE",
            "isFollower": true,
            "isUser": false,
            "followers": 10,
            "following": 3,
            "createdStories": 27
        }"##;

        let data: UserData = serde_json::from_str(json).unwrap();
        assert_eq!(data.username, "rafa");
        assert!(data.is_follower);
        assert_eq!(data.created_stories, 27);
    }

    #[tokio::test]
    async fn user_stories_hits_positional_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/42/stories")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let stories = client_for(&server).users().stories(42).await.unwrap();
        assert!(stories.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn user_stories_not_found_carries_parsed_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/42/stories")
            .with_status(404)
            .with_body(r#"{"error":"not found"}"#)
            .create_async()
            .await;

        let err = client_for(&server).users().stories(42).await.unwrap_err();

        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message["error"], "not found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn follow_posts_empty_object() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/users/9/follow")
            .match_body(mockito::Matcher::JsonString("{}".to_string()))
            .with_status(200)
            .create_async()
            .await;

        client_for(&server).users().follow(9).await.unwrap();
        mock.assert_async().await;
    }
}
