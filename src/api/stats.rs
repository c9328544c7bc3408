// SPDX-License-Identifier: MIT

//! Platform statistics operations.
//!
//! Seven independent endpoints, each returned verbatim, plus `all_stats`
//! which fans out to all of them concurrently for dashboard loads. The
//! fan-out is all-or-nothing: one failed endpoint fails the bundle.

use reqwest::Method;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::StatsBundle;

impl ApiClient {
    /// GET /stats/overview — headline platform totals.
    pub async fn stats_overview(&self) -> Result<Value> {
        self.stats("overview").await
    }

    /// GET /stats/voting — voting pattern aggregates.
    pub async fn voting_stats(&self) -> Result<Value> {
        self.stats("voting").await
    }

    /// GET /stats/bookmarks — bookmark pattern aggregates.
    pub async fn bookmark_stats(&self) -> Result<Value> {
        self.stats("bookmarks").await
    }

    /// GET /stats/sources — per-news-source aggregates.
    pub async fn source_stats(&self) -> Result<Value> {
        self.stats("sources").await
    }

    /// GET /stats/categories — per-category aggregates.
    pub async fn category_stats(&self) -> Result<Value> {
        self.stats("categories").await
    }

    /// GET /stats/authors — per-author aggregates.
    pub async fn author_stats(&self) -> Result<Value> {
        self.stats("authors").await
    }

    /// GET /stats/engagement — engagement aggregates.
    pub async fn engagement_stats(&self) -> Result<Value> {
        self.stats("engagement").await
    }

    /// Fetch all seven statistics endpoints concurrently.
    ///
    /// No partial results: if any endpoint fails, the whole call fails with
    /// that endpoint's error.
    pub async fn all_stats(&self) -> Result<StatsBundle> {
        let (overview, voting, bookmarks, sources, categories, authors, engagement) =
            tokio::try_join!(
                self.stats_overview(),
                self.voting_stats(),
                self.bookmark_stats(),
                self.source_stats(),
                self.category_stats(),
                self.author_stats(),
                self.engagement_stats(),
            )?;

        Ok(StatsBundle {
            overview,
            voting,
            bookmarks,
            sources,
            categories,
            authors,
            engagement,
        })
    }

    async fn stats(&self, resource: &str) -> Result<Value> {
        self.execute_json(self.request(Method::GET, &format!("/stats/{resource}")))
            .await
    }
}
