use std::time::Duration;

use anyhow::{Result, bail};
use serde::Deserialize;
use storage::dto::leaderboard::CodeforcesUser;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    comment: Option<String>,
    #[serde(default)]
    result: Vec<CodeforcesUser>,
}

impl ApiResponse {
    fn into_users(self) -> Result<Vec<CodeforcesUser>> {
        if self.status != "OK" {
            bail!(
                "Codeforces API returned {}: {}",
                self.status,
                self.comment.unwrap_or_default()
            );
        }
        Ok(self.result)
    }
}

/// Minimal client for the public Codeforces API
#[derive(Debug, Clone)]
pub struct CodeforcesClient {
    base_url: String,
    client: reqwest::Client,
}

impl CodeforcesClient {
    pub fn new(base_url: &str) -> reqwest::Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .user_agent(concat!("tournament-web/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(10))
                .build()?,
        })
    }

    /// Fetch rating records for `;`-separated handles in one request
    pub async fn user_info(&self, handles: &str) -> Result<Vec<CodeforcesUser>> {
        let url = format!("{}/user.info", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("handles", handles)])
            .send()
            .await?;
        let body = response.json::<ApiResponse>().await?;

        body.into_users()
    }
}
