//! RANDOM.ORG JSON-RPC client
//!
//! Calls `generateIntegers` on the JSON-RPC 2.0 endpoint and returns
//! `result.random.data`. Transport failures, non-success statuses, JSON-RPC
//! error objects and bodies without a result are all reported as errors.

use crate::config::{GeneratorConfig, DEFAULT_RANDOM_ORG_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::errors::CipherError;
use crate::generator::{IntegerRequest, RandomSource};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const JSONRPC_VERSION: &str = "2.0";
const REQUEST_ID: u64 = 213;

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'static str,
    params: GenerateIntegersParams<'a>,
    id: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateIntegersParams<'a> {
    api_key: &'a str,
    n: usize,
    min: i64,
    max: i64,
    replacement: bool,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<GenerateIntegersResult>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateIntegersResult {
    random: RandomData,
    #[serde(default)]
    bits_used: Option<u64>,
    #[serde(default)]
    requests_left: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RandomData {
    data: Vec<i64>,
    #[serde(default)]
    completion_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Clone)]
pub struct RandomOrgClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl RandomOrgClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
                .build()
                .unwrap_or_else(|_| Client::new()),
            endpoint: DEFAULT_RANDOM_ORG_ENDPOINT.to_string(),
            api_key,
        }
    }

    /// Builds a client from generator settings; fails if no API key is set.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, CipherError> {
        config.validate()?;
        let api_key = config.require_api_key()?.to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| CipherError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key,
        })
    }

    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RandomSource for RandomOrgClient {
    async fn generate_integers(&self, request: IntegerRequest) -> Result<Vec<i64>, CipherError> {
        let body = JsonRpcRequest {
            jsonrpc: JSONRPC_VERSION,
            method: "generateIntegers",
            params: GenerateIntegersParams {
                api_key: &self.api_key,
                n: request.n,
                min: request.min,
                max: request.max,
                replacement: request.replacement,
            },
            id: REQUEST_ID,
        };

        log::info!(
            "Requesting {} integers in [{}, {}] from {}",
            request.n,
            request.min,
            request.max,
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Random service request failed: {}", e);
                CipherError::RandomService(format!("request to {} failed: {}", self.endpoint, e))
            })?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            log::error!("Random service returned HTTP {}", status);
            return Err(CipherError::RandomService(format!(
                "HTTP {} from {}: {}",
                status, self.endpoint, text
            )));
        }

        let parsed: JsonRpcResponse = serde_json::from_str(&text).map_err(|e| {
            CipherError::RandomService(format!("Cannot parse JSON response: {}", e))
        })?;

        if let Some(err) = parsed.error {
            return Err(CipherError::RandomService(format!(
                "JSON-RPC error {}: {}",
                err.code, err.message
            )));
        }

        let result = parsed.result.ok_or_else(|| {
            CipherError::RandomService("JSON-RPC response carries no result".to_string())
        })?;

        log::debug!(
            "Random service answered {} values (completed {:?}, bits used {:?}, requests left {:?})",
            result.random.data.len(),
            result.random.completion_time,
            result.bits_used,
            result.requests_left
        );
        Ok(result.random.data)
    }
}
