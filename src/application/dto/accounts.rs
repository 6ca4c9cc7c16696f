use crate::domain::{
    access::{Permission, Role},
    account::Account,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub id: String,
    pub name: String,
    pub permissions: Vec<Permission>,
}

impl From<&Role> for RoleDto {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id().to_string(),
            name: role.name().to_owned(),
            permissions: role.permissions(),
        }
    }
}

/// Public view of an account. The password hash never leaves the domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Option<RoleDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Account> for AccountDto {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id().to_string(),
            name: account.name().to_owned(),
            email: account.email().to_owned(),
            role: account.role().map(|role| RoleDto::from(role.as_ref())),
            created_at: account.created_at(),
            updated_at: account.updated_at(),
        }
    }
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self::from(&account)
    }
}
