//! HTTP client for the goal API
//!
//! Implements the [`GoalApi`] port with `reqwest`. Any transport failure or
//! non-2xx response becomes a [`GoalApiError`].

use crate::config::FileClientConfig;
use async_trait::async_trait;
use inorbit_application::{GoalApi, GoalApiError};
use inorbit_domain::{Goal, GoalDraft};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Body of a successful `POST /goals` response
#[derive(Debug, Deserialize)]
struct CreatedGoalBody {
    goal: Goal,
}

/// Body of an error response
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Goal API client over HTTP
pub struct HttpGoalApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGoalApi {
    /// Create a client for the API at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GoalApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GoalApiError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &FileClientConfig) -> Result<Self, GoalApiError> {
        Self::new(
            config.api_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn goals_url(&self) -> String {
        format!("{}/goals", self.base_url)
    }
}

#[async_trait]
impl GoalApi for HttpGoalApi {
    async fn create_goal(&self, draft: &GoalDraft) -> Result<Goal, GoalApiError> {
        let url = self.goals_url();
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| GoalApiError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            return Err(GoalApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<CreatedGoalBody>()
            .await
            .map(|body| body.goal)
            .map_err(|e| GoalApiError::InvalidResponse(e.to_string()))
    }
}
