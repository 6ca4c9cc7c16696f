use super::AccountDto;
use crate::domain::identifier::Identifier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// Facts carried by a verified bearer token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub account_id: Identifier,
    pub email: String,
    pub name: String,
    pub role_id: Option<Identifier>,
    pub role_name: Option<String>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub account: AccountDto,
}
