use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::services::practicum::types::PracticumError;

/// Source of homework status payloads.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, PracticumError>;
}

/// Practicum API client
/// Handles all communication with the homework statuses endpoint
pub struct PracticumClient {
    client: Client,
    token: String,
    endpoint: String,
}

impl PracticumClient {
    pub fn new(token: String, endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            token,
            endpoint,
        }
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, PracticumError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| PracticumError::Http(e.to_string()))?;

        // The API signals application errors in-band with HTTP 200;
        // anything other than 200 is a transport-level failure.
        if response.status() != StatusCode::OK {
            return Err(PracticumError::Status(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| PracticumError::Parse(e.to_string()))
    }
}
