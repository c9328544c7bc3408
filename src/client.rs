// SPDX-License-Identifier: MIT

//! Core HTTP client: request construction, bearer-token attachment, and
//! 401-driven session teardown.
//!
//! The per-resource operations live in the `api` module; everything routes
//! through `execute`/`execute_json` here, so the cross-cutting behavior is
//! one explicit pipeline instead of hidden interceptor hooks.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::watch;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::session::{SessionState, SessionStore};

/// Async client for the NETRA platform API.
///
/// Cheap to clone; clones share the HTTP connection pool, the session store,
/// and the session-state channel.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
    session_tx: Arc<watch::Sender<SessionState>>,
}

impl ApiClient {
    /// Create a client from a config and a session store.
    ///
    /// The store decides durability (in-memory for tests, file-backed for a
    /// real session); the client only reads and writes through it.
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        let initial = match session.token() {
            Some(token) if !token.is_empty() => SessionState::Authenticated,
            _ => SessionState::Unauthenticated,
        };
        let (session_tx, _) = watch::channel(initial);

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session,
            session_tx: Arc::new(session_tx),
        })
    }

    /// Observe session-state transitions.
    ///
    /// The receiver flips to `Unauthenticated` on logout or when any request
    /// comes back 401. Navigation in response to expiry is the subscriber's
    /// concern, not the client's.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.session_tx.subscribe()
    }

    /// The session store this client was built with.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Build a request for `path` (which must start with `/`), attaching the
    /// stored bearer token when one exists.
    ///
    /// Requests without a token are still sent; rejecting them is the
    /// backend's job.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "NETRA API request");
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match self.session.token() {
            Some(token) if !token.is_empty() => builder.bearer_auth(token),
            _ => builder,
        }
    }

    /// Send a request and map failure statuses.
    ///
    /// A 401 tears down the local session (store cleared, state channel
    /// flipped) before the error is returned, so the caller still observes
    /// the failure but the session side effect has already run.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<reqwest::Response> {
        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(ApiError::SessionExpired);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    /// Send a request and decode a JSON body.
    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let body = self.execute(builder).await?.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::UnexpectedFormat(e.to_string()))
    }

    /// Send a request and return the raw body text.
    pub(crate) async fn execute_text(&self, builder: RequestBuilder) -> Result<String> {
        Ok(self.execute(builder).await?.text().await?)
    }

    /// Record that a session token is now held.
    pub(crate) fn mark_authenticated(&self) {
        self.session_tx.send_replace(SessionState::Authenticated);
    }

    /// Session teardown in response to a 401.
    pub(crate) fn expire_session(&self) {
        tracing::warn!("Received 401, clearing local session");
        self.clear_session();
    }

    /// Clear the session and publish the transition.
    pub(crate) fn clear_session(&self) {
        self.session.clear();
        self.session_tx.send_replace(SessionState::Unauthenticated);
    }
}
