// SPDX-License-Identifier: MIT

//! Bookmark operations. Create/delete plus a paginated list; the list body
//! is backend-owned and passed through verbatim.

use reqwest::Method;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::PageQuery;

impl ApiClient {
    /// GET /bookmarks — the user's bookmarks, paginated.
    pub async fn bookmarks(&self, query: &PageQuery) -> Result<Value> {
        self.execute_json(self.request(Method::GET, "/bookmarks").query(query))
            .await
    }

    /// POST /articles/{id}/bookmark — bookmark an article.
    pub async fn add_bookmark(&self, article_id: u64) -> Result<Value> {
        self.execute_json(self.request(Method::POST, &format!("/articles/{article_id}/bookmark")))
            .await
    }

    /// DELETE /articles/{id}/bookmark — remove a bookmark.
    pub async fn remove_bookmark(&self, article_id: u64) -> Result<Value> {
        self.execute_json(
            self.request(Method::DELETE, &format!("/articles/{article_id}/bookmark")),
        )
        .await
    }
}
