//! Tokens module - domain models, services, and traits.

mod tokens_model;
mod tokens_service;
mod tokens_traits;


pub use tokens_model::BankAccessToken;
pub use tokens_service::TokenService;
pub use tokens_traits::{TokenProviderTrait, TokenServiceTrait, TokenStoreTrait};
