// SPDX-License-Identifier: MIT

//! Article feed and category operations.

use reqwest::Method;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::article::ArticleEnvelope;
use crate::models::{Article, ArticlePage, ArticleQuery, Category};

#[derive(Deserialize)]
struct CategoriesEnvelope {
    categories: Vec<Category>,
}

impl ApiClient {
    /// GET /articles — one page of the feed, filtered and sorted per the
    /// query.
    pub async fn articles(&self, query: &ArticleQuery) -> Result<ArticlePage> {
        self.execute_json(self.request(Method::GET, "/articles").query(query))
            .await
    }

    /// GET /articles/{id} — a single article.
    ///
    /// The backend has shipped two shapes for this endpoint (`{article:
    /// {...}}` and the bare object); both decode to the same thing here, and
    /// anything else is an [`UnexpectedFormat`](crate::ApiError::UnexpectedFormat)
    /// error.
    pub async fn article(&self, article_id: u64) -> Result<Article> {
        let body = self
            .execute_text(self.request(Method::GET, &format!("/articles/{article_id}")))
            .await?;
        ArticleEnvelope::decode(&body)
    }

    /// GET /categories — the category list with per-category counts.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let envelope: CategoriesEnvelope = self
            .execute_json(self.request(Method::GET, "/categories"))
            .await?;
        Ok(envelope.categories)
    }
}
