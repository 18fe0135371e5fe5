use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::tokens_model::BankAccessToken;
use super::tokens_traits::{TokenProviderTrait, TokenServiceTrait, TokenStoreTrait};
use crate::errors::{Result, TokenError};

/// Service for fetching tokens from the remote API and keeping the
/// secure store in sync with them.
pub struct TokenService {
    provider: Arc<dyn TokenProviderTrait>,
    store: Arc<dyn TokenStoreTrait>,
}

impl TokenService {
    pub fn new(provider: Arc<dyn TokenProviderTrait>, store: Arc<dyn TokenStoreTrait>) -> Self {
        Self { provider, store }
    }
}

#[async_trait]
impl TokenServiceTrait for TokenService {
    /// Fetches a fresh public token, persists it, and returns it.
    ///
    /// An empty token from the remote API is rejected without touching
    /// the store. Provider and store failures propagate to the caller.
    async fn refresh_public_token(&self) -> Result<String> {
        let token = self.provider.fetch_public_access_token().await?;
        if token.is_empty() {
            return Err(TokenError::Invalid.into());
        }
        self.store.save_public_token(&token)?;
        debug!("Public access token refreshed");
        Ok(token)
    }

    fn read_public_token(&self) -> Result<String> {
        self.store.read_public_token()
    }

    /// Fetches the bank token list for a user, persists it, and returns it.
    async fn refresh_bank_tokens(&self, user_id: &str) -> Result<Vec<BankAccessToken>> {
        let tokens = self.provider.fetch_bank_access_tokens(user_id).await?;
        self.store.save_bank_tokens(&tokens)?;
        debug!("Stored {} bank access tokens", tokens.len());
        Ok(tokens)
    }

    fn read_bank_tokens(&self) -> Result<Vec<BankAccessToken>> {
        self.store.read_bank_tokens()
    }
}
