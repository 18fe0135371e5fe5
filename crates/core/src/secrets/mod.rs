//! Secure token storage backed by the operating system keyring.

use keyring::Entry;

use crate::errors::{Error, Result, TokenError};
use crate::tokens::{BankAccessToken, TokenStoreTrait};

const SERVICE: &str = "spendwell";
const PUBLIC_TOKEN_KEY: &str = "public-access-token";
const BANK_TOKENS_KEY: &str = "bank-access-tokens";

/// `TokenStoreTrait` implementation that keeps tokens in the OS keychain.
///
/// The bank token list is stored as a single JSON document under one
/// entry so that saving replaces the whole list atomically.
#[derive(Default)]
pub struct KeyringTokenStore;

impl KeyringTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn entry(key: &str) -> Result<Entry> {
        Entry::new(SERVICE, key).map_err(Error::from)
    }
}

impl TokenStoreTrait for KeyringTokenStore {
    fn save_public_token(&self, token: &str) -> Result<()> {
        Self::entry(PUBLIC_TOKEN_KEY)?
            .set_password(token)
            .map_err(Error::from)
    }

    fn read_public_token(&self) -> Result<String> {
        match Self::entry(PUBLIC_TOKEN_KEY)?.get_password() {
            Ok(token) => Ok(token),
            Err(keyring::Error::NoEntry) => Err(TokenError::Missing.into()),
            Err(e) => Err(Error::from(e)),
        }
    }

    fn save_bank_tokens(&self, tokens: &[BankAccessToken]) -> Result<()> {
        let document = serde_json::to_string(tokens)?;
        Self::entry(BANK_TOKENS_KEY)?
            .set_password(&document)
            .map_err(Error::from)
    }

    fn read_bank_tokens(&self) -> Result<Vec<BankAccessToken>> {
        match Self::entry(BANK_TOKENS_KEY)?.get_password() {
            Ok(document) => Ok(serde_json::from_str(&document)?),
            Err(keyring::Error::NoEntry) => Ok(Vec::new()),
            Err(e) => Err(Error::from(e)),
        }
    }
}
