//! Notification endpoints

use crate::client::TuysClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Notifications API interface
#[derive(Clone)]
pub struct NotificationsApi {
    client: TuysClient,
}

impl NotificationsApi {
    /// Create a new notifications API interface
    pub(crate) fn new(client: TuysClient) -> Self {
        Self { client }
    }

    /// List the signed-in user's notifications, newest first
    ///
    /// GET /notifications
    pub async fn list(&self) -> ApiResult<Vec<Notification>> {
        self.client.get("/notifications").await
    }

    /// Mark a notification as read
    ///
    /// POST /notifications/{id}/read
    pub async fn mark_read(&self, id: i32) -> ApiResult<()> {
        self.client.post(&format!("/notifications/{id}/read"), &json!({})).await
    }
}

/// Notification entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i32,
    pub text: String,
    /// Creation timestamp (ISO-8601, backend formatted)
    pub date: String,
    pub read: bool,
}
