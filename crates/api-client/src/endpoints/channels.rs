//! Channel endpoints

use crate::client::TuysClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Channels API interface
#[derive(Clone)]
pub struct ChannelsApi {
    client: TuysClient,
}

impl ChannelsApi {
    /// Create a new channels API interface
    pub(crate) fn new(client: TuysClient) -> Self {
        Self { client }
    }

    /// List all story channels
    ///
    /// GET /channels
    pub async fn list(&self) -> ApiResult<Vec<Channel>> {
        self.client.get("/channels").await
    }
}

/// Story channel entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: i32,
    pub name: String,
    /// Background image URL shown behind the channel name
    pub background: String,
}
