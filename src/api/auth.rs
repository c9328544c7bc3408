// SPDX-License-Identifier: MIT

//! Authentication and session operations.
//!
//! `login`/`register` persist the issued token (and user profile, when the
//! backend sends one) into the session store, so subsequent requests carry
//! the bearer header automatically. `logout`, `is_authenticated`, and
//! `cached_user` are client-only and never touch the network.

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{AuthResponse, ProfileUpdate, User};

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

impl ApiClient {
    /// POST /auth/register — create an account and start a session.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse> {
        let body = json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let response: AuthResponse = self
            .execute_json(self.request(Method::POST, "/auth/register").json(&body))
            .await?;
        self.persist_auth(&response);
        Ok(response)
    }

    /// POST /auth/login — authenticate and start a session.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse> {
        let body = json!({
            "username": username,
            "password": password,
        });
        let response: AuthResponse = self
            .execute_json(self.request(Method::POST, "/auth/login").json(&body))
            .await?;
        self.persist_auth(&response);
        Ok(response)
    }

    /// End the local session. No network call; clearing an already-empty
    /// session is fine.
    pub fn logout(&self) {
        tracing::debug!("Logging out, clearing local session");
        self.clear_session();
    }

    /// GET /auth/me — the authenticated user's profile.
    pub async fn current_user(&self) -> Result<User> {
        let envelope: UserEnvelope = self
            .execute_json(self.request(Method::GET, "/auth/me"))
            .await?;
        Ok(envelope.user)
    }

    /// PUT /auth/profile — partial profile update. Re-caches the user
    /// profile when the response carries one.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<AuthResponse> {
        let response: AuthResponse = self
            .execute_json(self.request(Method::PUT, "/auth/profile").json(update))
            .await?;
        if let Some(user) = &response.user {
            self.session().update_user(user);
        }
        Ok(response)
    }

    /// Whether a non-empty token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.session().token().is_some_and(|t| !t.is_empty())
    }

    /// The cached user profile, if any. Never fails: a missing or corrupt
    /// cache reads as `None`.
    pub fn cached_user(&self) -> Option<User> {
        self.session().user()
    }

    fn persist_auth(&self, response: &AuthResponse) {
        if let Some(token) = &response.access_token {
            self.session().store(token, response.user.as_ref());
            self.mark_authenticated();
        }
    }
}
