// SPDX-License-Identifier: MIT

//! Article comment operations.

use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::Comment;

#[derive(Deserialize)]
struct CommentsEnvelope {
    comments: Vec<Comment>,
}

impl ApiClient {
    /// GET /articles/{id}/comments — all comments on an article.
    pub async fn comments(&self, article_id: u64) -> Result<Vec<Comment>> {
        let envelope: CommentsEnvelope = self
            .execute_json(self.request(Method::GET, &format!("/articles/{article_id}/comments")))
            .await?;
        Ok(envelope.comments)
    }

    /// POST /articles/{id}/comments — add a comment.
    pub async fn add_comment(&self, article_id: u64, content: &str) -> Result<Value> {
        let body = json!({ "content": content });
        self.execute_json(
            self.request(Method::POST, &format!("/articles/{article_id}/comments"))
                .json(&body),
        )
        .await
    }
}
