//! HTTP client for the Spendwell bank API.
//!
//! This module provides a shared HTTP client for communicating with the
//! Spendwell cloud service. It implements the provider traits from
//! `spendwell-core` so the services never see HTTP details.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;

use spendwell_core::errors::{Error, Result, TokenError};
use spendwell_core::tokens::{BankAccessToken, TokenProviderTrait};
use spendwell_core::transactions::{RemoteTransaction, TransactionProviderTrait};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL for the Spendwell cloud service.
pub const DEFAULT_API_URL: &str = "https://api.spendwell.app";

// ─────────────────────────────────────────────────────────────────────────────
// API Response Types (internal, for parsing cloud API responses)
// ─────────────────────────────────────────────────────────────────────────────

#[allow(dead_code)]
#[derive(Debug, serde::Deserialize)]
struct ApiAuthResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<ApiAuthData>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiAuthData {
    #[serde(default)]
    access_token: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiAccessTokensResponse {
    #[serde(default)]
    access_tokens: Vec<BankAccessToken>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiTransactionsResponse {
    #[serde(default)]
    transactions: Vec<RemoteTransaction>,
}

#[allow(dead_code)]
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Bank API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the Spendwell bank API.
///
/// This client provides methods for:
/// - Fetching the public access token
/// - Fetching per-bank access tokens for a user
/// - Fetching bank transactions
///
/// # Example
///
/// ```ignore
/// let client = BankApiClient::new("https://api.spendwell.app")?
///     .with_access_token("your-token")?;
/// let transactions = client.fetch_transactions().await?;
/// ```
#[derive(Debug, Clone)]
pub struct BankApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: Option<HeaderValue>,
}

impl BankApiClient {
    /// Create a new bank API client without authentication.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header: None,
        })
    }

    /// Attach a bearer token used for authenticated endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token format is invalid.
    pub fn with_access_token(mut self, access_token: &str) -> Result<Self> {
        let header = HeaderValue::from_str(&format!("Bearer {}", access_token))
            .map_err(|e| Error::Unexpected(format!("Invalid access token format: {}", e)))?;
        self.auth_header = Some(header);
        Ok(self)
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(auth) = &self.auth_header {
            headers.insert(AUTHORIZATION, auth.clone());
        }
        headers
    }

    /// Make a GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[BankApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    /// Parse an HTTP response, handling errors appropriately.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // Try to parse error response for a better message
            if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                let msg = err
                    .message
                    .or(err.error)
                    .unwrap_or_else(|| format!("HTTP {}", status));
                return Err(Error::Network(format!("API error: {}", msg)));
            }
            return Err(Error::Network(format!(
                "API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Unexpected(format!("Failed to parse response: {} - {}", e, body)))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Provider Trait Implementations
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl TokenProviderTrait for BankApiClient {
    /// Fetch the public (non bank-scoped) access token.
    async fn fetch_public_access_token(&self) -> Result<String> {
        let api_response: ApiAuthResponse = self.get("/api/v1/auth/public-token").await?;

        let token = api_response
            .data
            .and_then(|d| d.access_token)
            .unwrap_or_default();
        if token.is_empty() {
            return Err(TokenError::Invalid.into());
        }

        debug!("[BankApi] Fetched public access token");
        Ok(token)
    }

    /// Fetch the per-bank access tokens for the given user.
    async fn fetch_bank_access_tokens(&self, user_id: &str) -> Result<Vec<BankAccessToken>> {
        let path = format!(
            "/api/v1/users/{}/access-tokens",
            urlencoding::encode(user_id)
        );
        let api_response: ApiAccessTokensResponse = self.get(&path).await?;

        info!(
            "[BankApi] Fetched {} bank access tokens",
            api_response.access_tokens.len()
        );
        Ok(api_response.access_tokens)
    }
}

#[async_trait]
impl TransactionProviderTrait for BankApiClient {
    /// Fetch all transactions for the authenticated user.
    async fn fetch_transactions(&self) -> Result<Vec<RemoteTransaction>> {
        let api_response: ApiTransactionsResponse = self.get("/api/v1/transactions").await?;

        info!(
            "[BankApi] Fetched {} transactions",
            api_response.transactions.len()
        );
        Ok(api_response.transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BankApiClient::new("https://api.spendwell.app");
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_url_normalization() {
        let client = BankApiClient::new("https://api.spendwell.app/").unwrap();
        assert_eq!(client.base_url, "https://api.spendwell.app");
    }

    #[test]
    fn test_with_access_token_sets_auth_header() {
        let client = BankApiClient::new(DEFAULT_API_URL)
            .unwrap()
            .with_access_token("test-token")
            .unwrap();
        assert!(client.auth_header.is_some());
    }

    #[test]
    fn test_with_access_token_rejects_invalid_characters() {
        let client = BankApiClient::new(DEFAULT_API_URL)
            .unwrap()
            .with_access_token("bad\ntoken");
        assert!(client.is_err());
    }

    #[test]
    fn test_auth_response_parses_nested_token() {
        let json = r#"{
            "status": "ok",
            "message": "authenticated",
            "data": { "accessToken": "tok-123" }
        }"#;
        let parsed: ApiAuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.unwrap().access_token.as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_access_tokens_response_parses_camel_case() {
        let json = r#"{
            "accessTokens": [
                { "accessToken": "bank-tok", "bankId": "bank-1" }
            ]
        }"#;
        let parsed: ApiAccessTokensResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_tokens.len(), 1);
        assert_eq!(parsed.access_tokens[0].bank_id, "bank-1");
    }
}
