//! Platform statistics aggregates for dashboard consumption.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Combined result of the seven statistics endpoints.
///
/// Each field carries its endpoint's body verbatim; the shapes are owned by
/// the backend and rendered as-is by dashboards.
#[derive(Debug, Clone, Serialize)]
pub struct StatsBundle {
    pub overview: Value,
    pub voting: Value,
    pub bookmarks: Value,
    pub sources: Value,
    pub categories: Value,
    pub authors: Value,
    pub engagement: Value,
}

/// Body of GET /health.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
