// SPDX-License-Identifier: MIT

//! netra-client: async Rust client for the NETRA news-aggregation and
//! bias-voting platform API.
//!
//! Covers authentication and session management, the article feed, bias
//! voting, comments, bookmarks, user activity, platform statistics, and
//! health checks.
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use netra_client::{ApiClient, ClientConfig, FileSessionStore};
//!
//! # async fn run() -> netra_client::Result<()> {
//! let config = ClientConfig::from_env();
//! let store = Arc::new(FileSessionStore::new("netra-session.json"));
//! let client = ApiClient::new(&config, store)?;
//!
//! client.login("alice", "secret").await?;
//! let page = client.articles(&Default::default()).await?;
//! println!("{} articles", page.articles.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use session::{FileSessionStore, MemorySessionStore, SessionState, SessionStore};
