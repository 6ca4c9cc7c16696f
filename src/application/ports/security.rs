// src/application/ports/security.rs
use crate::{
    application::{
        ApplicationResult,
        dto::{AuthTokenDto, TokenClaims},
    },
    domain::account::Account,
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// `Ok(false)` on mismatch; errors are reserved for hasher failures.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, account: &Account) -> ApplicationResult<AuthTokenDto>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<TokenClaims>;
}
