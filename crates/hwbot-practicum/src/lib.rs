//! Practicum homework API adapter (reqwest).
//!
//! This crate implements the `hwbot-core` HomeworkApi port over the homework
//! statuses HTTP API.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde_json::Value;

use hwbot_core::{config::Config, errors::Error, ports::HomeworkApi, Result};

pub struct PracticumClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(cfg: &Config) -> Self {
        Self {
            http: Client::new(),
            endpoint: cfg.endpoint.clone(),
            token: cfg.practicum_token.clone(),
        }
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        // A zero cursor means "from now"; the server expects a real timestamp.
        let from_date = if from_date == 0 {
            Utc::now().timestamp()
        } else {
            from_date
        };

        let response = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| Error::Transport(format!("request to {} failed: {e}", self.endpoint)))?;

        let status = response.status();
        tracing::debug!(status = %status, from_date, "homework API answered");

        if status != StatusCode::OK {
            let reason = status.canonical_reason().unwrap_or("unknown").to_string();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::EndpointUnavailable {
                status: status.as_u16(),
                reason,
                body,
                from_date,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::MalformedResponse(format!("body is not valid json: {e}")))
    }
}
