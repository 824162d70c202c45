//! Story endpoints
//!
//! Covers the `/stories` family: listing (global or per channel), creation,
//! edition, deletion, likes, comments, and denounces.

use crate::client::TuysClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Stories API interface
#[derive(Clone)]
pub struct StoriesApi {
    client: TuysClient,
}

impl StoriesApi {
    /// Create a new stories API interface
    pub(crate) fn new(client: TuysClient) -> Self {
        Self { client }
    }

    /// List all stories
    ///
    /// GET /stories
    pub async fn list(&self) -> ApiResult<Vec<Story>> {
        self.client.get("/stories").await
    }

    /// List the stories of a channel
    ///
    /// GET /stories/{channelId}
    pub async fn list_from_channel(&self, channel_id: i32) -> ApiResult<Vec<Story>> {
        self.client.get(&format!("/stories/{channel_id}")).await
    }

    /// List the comments of a story
    ///
    /// GET /stories/{storyId}/comments
    pub async fn comments(&self, story_id: i32) -> ApiResult<Vec<Comment>> {
        self.client.get(&format!("/stories/{story_id}/comments")).await
    }

    /// Publish a new story
    ///
    /// POST /stories
    pub async fn create(&self, story: &NewStory) -> ApiResult<()> {
        self.client.post("/stories", story).await
    }

    /// Like a story
    ///
    /// POST /stories/{storyId}/like
    pub async fn like(&self, story_id: i32) -> ApiResult<()> {
        self.client.post(&format!("/stories/{story_id}/like"), &json!({})).await
    }

    /// Remove a like from a story
    ///
    /// POST /stories/{storyId}/unlike
    pub async fn unlike(&self, story_id: i32) -> ApiResult<()> {
        self.client.post(&format!("/stories/{story_id}/unlike"), &json!({})).await
    }

    /// Comment on a story
    ///
    /// POST /stories/{storyId}/comments
    pub async fn comment(&self, story_id: i32, comment: &NewComment) -> ApiResult<()> {
        self.client.post(&format!("/stories/{story_id}/comments"), comment).await
    }

    /// Denounce a story
    ///
    /// POST /stories/{storyId}/denounce
    pub async fn denounce(&self, story_id: i32, denounce: &NewComment) -> ApiResult<()> {
        self.client.post(&format!("/stories/{story_id}/denounce"), denounce).await
    }

    /// Edit an owned story
    ///
    /// PUT /stories/{storyId}
    pub async fn update(&self, story_id: i32, update: &StoryUpdate) -> ApiResult<()> {
        self.client.put(&format!("/stories/{story_id}"), update).await
    }

    /// Delete an owned story
    ///
    /// DELETE /stories/{storyId}
    pub async fn delete(&self, story_id: i32) -> ApiResult<()> {
        self.client.delete(&format!("/stories/{story_id}")).await
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Story entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: i32,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: i32,
    /// Publication timestamp (ISO-8601, backend formatted)
    pub date: String,
    pub owner: StoryOwner,
    #[serde(rename = "likedByUser")]
    pub liked_by_user: bool,
    #[serde(rename = "followedByUser")]
    pub followed_by_user: bool,
    pub likes: i64,
    pub comments: i64,
    /// Name of the channel the story was published in
    pub channel: String,
}

/// Author block embedded in a story
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryOwner {
    #[serde(rename = "isOwner")]
    pub is_owner: bool,
    pub username: String,
    pub avatar: String,
    #[serde(rename = "rankColor")]
    pub rank_color: String,
}

/// Comment entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    #[serde(rename = "storyId")]
    pub story_id: i32,
    pub text: String,
    pub owner: StoryOwner,
    /// Whether the comment was written by the story's author
    #[serde(rename = "commentedByAuthor")]
    pub commented_by_author: bool,
}

/// Payload for publishing a story
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStory {
    pub title: String,
    pub body: String,
    #[serde(rename = "channelId")]
    pub channel_id: i32,
}

/// Payload for editing a story (channel cannot change)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryUpdate {
    pub title: String,
    pub body: String,
}

/// Payload for commenting on or denouncing a story
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub text: String,
}
