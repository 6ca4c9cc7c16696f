// src/domain/identifier.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};
use uuid::{Uuid, Variant, Version};

const SUFFIX_LEN: usize = 8;

/// Identity shared by every entity: a canonical, lowercase, version 4 UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(Uuid);

impl Identifier {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let value = value.as_ref();
        let invalid = || DomainError::validation("Invalid UUID format");

        // `Uuid::parse_str` also accepts braced, simple and upper-case forms.
        if value.len() != 36 || value.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(invalid());
        }
        let parsed = Uuid::parse_str(value).map_err(|_| invalid())?;
        if parsed.get_version() != Some(Version::Random) || parsed.get_variant() != Variant::RFC4122 {
            return Err(invalid());
        }
        Ok(Self(parsed))
    }

    /// Fresh random identifier. `new_v4` always yields a valid version 4 value.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Last eight hex characters, used to disambiguate derived slugs.
    pub fn suffix(&self) -> String {
        let simple = self.0.simple().to_string();
        simple[simple.len() - SUFFIX_LEN..].to_owned()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for Identifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.to_string()
    }
}
