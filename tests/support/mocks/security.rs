// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use quill_core::{
    application::{
        ApplicationResult,
        dto::{AuthTokenDto, TokenClaims},
        error::ApplicationError,
        ports::security::{PasswordHasher, TokenManager},
    },
    domain::{account::Account, identifier::Identifier},
};

use super::time::fixed_now;

const HASH_PREFIX: &str = "plain:";
const TOKEN_PREFIX: &str = "token-";

/// Reversible "hash" so tests can assert on stored values.
#[derive(Default, Clone)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{HASH_PREFIX}{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(expected_hash.strip_prefix(HASH_PREFIX) == Some(password))
    }
}

pub fn token_for(id: Identifier) -> String {
    format!("{TOKEN_PREFIX}{id}")
}

/// Tokens are `token-<account id>`; anything else is rejected.
#[derive(Default, Clone)]
pub struct StaticTokenManager;

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn issue(&self, account: &Account) -> ApplicationResult<AuthTokenDto> {
        Ok(AuthTokenDto {
            token: token_for(account.id()),
            issued_at: fixed_now(),
            expires_at: fixed_now() + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<TokenClaims> {
        let account_id = token
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|id| Identifier::new(id).ok())
            .ok_or_else(|| ApplicationError::unauthorized("Invalid or expired token"))?;

        Ok(TokenClaims {
            account_id,
            email: String::new(),
            name: String::new(),
            role_id: None,
            role_name: None,
            issued_at: fixed_now(),
            expires_at: fixed_now() + Duration::hours(1),
        })
    }
}
