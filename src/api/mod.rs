// SPDX-License-Identifier: MIT

//! API operations, grouped per backend resource.
//!
//! Each file extends [`ApiClient`](crate::client::ApiClient) with the
//! operations for one resource group; every method performs exactly one
//! HTTP call and returns the decoded body.

pub mod articles;
pub mod auth;
pub mod bookmarks;
pub mod comments;
pub mod misc;
pub mod stats;
pub mod voting;
