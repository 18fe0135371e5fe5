//! Spendwell Connect - HTTP client for the remote bank API.
//!
//! This crate implements the provider traits defined in `spendwell-core`
//! against the Spendwell cloud service.

pub mod client;

pub use client::{BankApiClient, DEFAULT_API_URL};
