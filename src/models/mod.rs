// SPDX-License-Identifier: MIT

//! Data models for the NETRA API.

pub mod article;
pub mod stats;
pub mod user;

pub use article::{
    Article, ArticlePage, ArticleQuery, Category, Comment, PageQuery, Pagination, VoteOutcome,
    VoteStats,
};
pub use stats::{HealthStatus, StatsBundle};
pub use user::{AuthResponse, ProfileUpdate, User};
