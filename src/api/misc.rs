// SPDX-License-Identifier: MIT

//! User activity and health-check operations.

use reqwest::Method;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::HealthStatus;

impl ApiClient {
    /// GET /user/activity — the user's votes, comments, and bookmarks feed.
    pub async fn activity(&self) -> Result<Value> {
        self.execute_json(self.request(Method::GET, "/user/activity"))
            .await
    }

    /// GET /health — backend liveness.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.execute_json(self.request(Method::GET, "/health")).await
    }
}
