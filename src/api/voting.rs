// SPDX-License-Identifier: MIT

//! Bias-vote operations. One boolean per user per article; aggregates are
//! computed server-side and come back in `vote_stats`.

use reqwest::Method;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::article::VoteOutcome;

impl ApiClient {
    /// POST /articles/{id}/vote — cast or change a bias vote.
    pub async fn vote_article(&self, article_id: u64, is_biased: bool) -> Result<VoteOutcome> {
        let body = json!({ "is_biased": is_biased });
        self.execute_json(
            self.request(Method::POST, &format!("/articles/{article_id}/vote"))
                .json(&body),
        )
        .await
    }

    /// DELETE /articles/{id}/vote — retract the user's vote.
    pub async fn delete_vote(&self, article_id: u64) -> Result<VoteOutcome> {
        self.execute_json(self.request(Method::DELETE, &format!("/articles/{article_id}/vote")))
            .await
    }
}
