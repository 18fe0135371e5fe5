use async_trait::async_trait;

use super::tokens_model::BankAccessToken;
use crate::errors::Result;

/// Trait for fetching tokens from the remote API.
#[async_trait]
pub trait TokenProviderTrait: Send + Sync {
    /// Fetches the public (non bank-scoped) access token.
    async fn fetch_public_access_token(&self) -> Result<String>;

    /// Fetches the per-bank access tokens for the given user.
    async fn fetch_bank_access_tokens(&self, user_id: &str) -> Result<Vec<BankAccessToken>>;
}

/// Trait for persisting tokens in secure local storage.
pub trait TokenStoreTrait: Send + Sync {
    fn save_public_token(&self, token: &str) -> Result<()>;

    /// Reads the stored public token. Fails with `TokenError::Missing`
    /// when no token has been saved.
    fn read_public_token(&self) -> Result<String>;

    fn save_bank_tokens(&self, tokens: &[BankAccessToken]) -> Result<()>;

    /// Reads the stored bank token list. An empty store yields an empty
    /// list, not an error.
    fn read_bank_tokens(&self) -> Result<Vec<BankAccessToken>>;
}

/// Trait defining the contract for token operations.
#[async_trait]
pub trait TokenServiceTrait: Send + Sync {
    async fn refresh_public_token(&self) -> Result<String>;
    fn read_public_token(&self) -> Result<String>;
    async fn refresh_bank_tokens(&self, user_id: &str) -> Result<Vec<BankAccessToken>>;
    fn read_bank_tokens(&self) -> Result<Vec<BankAccessToken>>;
}
