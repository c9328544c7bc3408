//! Article, category, comment, and paging payloads.
//!
//! Fields mirror the backend's article serialization; anything the backend
//! adds later lands in `extra` instead of breaking deserialization.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// A news article.
///
/// Only `id` and `headline` are guaranteed; per-user fields (`user_vote`,
/// `is_bookmarked`) are present only on authenticated fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub headline: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub article_link: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub source_logo: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub vote_stats: Option<VoteStats>,
    #[serde(default)]
    pub total_votes: Option<u32>,
    /// The requesting user's bias vote, when authenticated.
    #[serde(default)]
    pub user_vote: Option<bool>,
    #[serde(default)]
    pub is_bookmarked: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Aggregate bias-vote counts, computed server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoteStats {
    pub biased: u32,
    pub not_biased: u32,
    pub biased_percentage: f64,
    pub not_biased_percentage: f64,
}

/// Body of a vote create/delete, carrying updated aggregates when the
/// backend includes them.
#[derive(Debug, Clone, Deserialize)]
pub struct VoteOutcome {
    #[serde(default)]
    pub vote_stats: Option<VoteStats>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One page of articles.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Paging metadata attached to list responses.
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    pub total_pages: u64,
    pub total_items: u64,
}

/// A category with its article count.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub count: u64,
}

/// A comment on an article.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub content: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Query parameters for GET /articles. All optional; `None` fields are
/// omitted from the query string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Query parameters for paginated list endpoints (e.g. GET /bookmarks).
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// The two response shapes GET /articles/{id} is known to produce: the
/// article wrapped in an envelope, or the bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ArticleEnvelope {
    Wrapped { article: Article },
    Bare(Article),
}

impl ArticleEnvelope {
    /// Decode either known shape; anything else is an explicit client-side
    /// error rather than a silently malformed value.
    pub(crate) fn decode(body: &str) -> Result<Article> {
        let envelope: ArticleEnvelope = serde_json::from_str(body).map_err(|_| {
            ApiError::UnexpectedFormat(
                "article response matched neither {article: ...} nor a bare article object"
                    .to_string(),
            )
        })?;
        Ok(match envelope {
            ArticleEnvelope::Wrapped { article } => article,
            ArticleEnvelope::Bare(article) => article,
        })
    }
}
