//! Ranking endpoint

use crate::client::TuysClient;
use crate::endpoints::stories::Story;
use crate::error::ApiResult;

/// Ranking API interface
#[derive(Clone)]
pub struct RankingApi {
    client: TuysClient,
}

impl RankingApi {
    /// Create a new ranking API interface
    pub(crate) fn new(client: TuysClient) -> Self {
        Self { client }
    }

    /// List the best-ranked stories, best first
    ///
    /// GET /ranking
    pub async fn list(&self) -> ApiResult<Vec<Story>> {
        self.client.get("/ranking").await
    }
}
