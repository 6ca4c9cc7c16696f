// src/domain/access/permission.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PermissionAction {
    Create,
    Read,
    Update,
    Delete,
}

impl PermissionAction {
    pub const ALL: [Self; 4] = [Self::Create, Self::Read, Self::Update, Self::Delete];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Read => "READ",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATE" => Ok(Self::Create),
            "READ" => Ok(Self::Read),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            other => Err(DomainError::Validation(format!(
                "Invalid permission action: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PermissionSubject {
    Account,
    Article,
}

impl PermissionSubject {
    pub const ALL: [Self; 2] = [Self::Account, Self::Article];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "ACCOUNT",
            Self::Article => "ARTICLE",
        }
    }
}

impl fmt::Display for PermissionSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionSubject {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACCOUNT" => Ok(Self::Account),
            "ARTICLE" => Ok(Self::Article),
            other => Err(DomainError::Validation(format!(
                "Invalid permission subject: {other}"
            ))),
        }
    }
}

/// An `(action, subject)` capability a role may hold. Equality is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    action: PermissionAction,
    subject: PermissionSubject,
}

impl Permission {
    pub const fn create(action: PermissionAction, subject: PermissionSubject) -> Self {
        Self { action, subject }
    }

    /// Builds a permission from its textual form, e.g. `("UPDATE", "ARTICLE")`.
    pub fn parse(action: &str, subject: &str) -> DomainResult<Self> {
        if action.is_empty() || subject.is_empty() {
            return Err(DomainError::validation(
                "Permission action and subject are required",
            ));
        }
        Ok(Self::create(action.parse()?, subject.parse()?))
    }

    pub const fn action(&self) -> PermissionAction {
        self.action
    }

    pub const fn subject(&self) -> PermissionSubject {
        self.subject
    }

    pub fn matches(&self, action: PermissionAction, subject: PermissionSubject) -> bool {
        self.action == action && self.subject == subject
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.action, self.subject)
    }
}

impl FromStr for Permission {
    type Err = DomainError;

    /// Parses the `ACTION:SUBJECT` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (action, subject) = s.split_once(':').unwrap_or((s, ""));
        Self::parse(action, subject)
    }
}
