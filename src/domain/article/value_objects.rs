// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifier::Identifier;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const TITLE_MIN_LEN: usize = 5;
const TITLE_MAX_LEN: usize = 150;
const CONTENT_MIN_LEN: usize = 100;
const CONTENT_MAX_LEN: usize = 50_000;

fn check_trimmed_length(value: &str, label: &str, min: usize, max: usize) -> DomainResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{label} cannot be empty")));
    }
    let len = trimmed.chars().count();
    if len < min {
        return Err(DomainError::Validation(format!(
            "{label} must be at least {min} characters long"
        )));
    }
    if len > max {
        return Err(DomainError::Validation(format!(
            "{label} must be at most {max} characters long"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        check_trimmed_length(&value, "Title", TITLE_MIN_LEN, TITLE_MAX_LEN)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content(String);

impl Content {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        check_trimmed_length(&value, "Content", CONTENT_MIN_LEN, CONTENT_MAX_LEN)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Content> for String {
    fn from(value: Content) -> Self {
        value.0
    }
}

/// URL-safe article key matching `^[a-z0-9]+(-[a-z0-9]+)*$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("Slug cannot be empty"));
        }
        if !PATTERN.is_match(&value) {
            return Err(DomainError::validation("Invalid slug format"));
        }
        Ok(Self(value))
    }

    /// Derives `<folded-title>-<last 8 hex of id>`. Identical titles on different
    /// entities therefore never share a slug.
    pub fn from_title(title: &str, id: &Identifier) -> DomainResult<Self> {
        let base = fold_title(title);
        let suffix = id.suffix();
        if base.is_empty() {
            return Self::new(suffix);
        }
        Self::new(format!("{base}-{suffix}"))
    }

    /// Title-only form. Uniqueness is then up to the store's slug index.
    pub fn from_title_only(title: &str) -> DomainResult<Self> {
        Self::new(fold_title(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Lowercases, drops punctuation and stray combining marks, then lets `slug`
/// fold accents to ASCII and join words with single hyphens. Letters outside
/// Latin scripts are transliterated rather than dropped.
fn fold_title(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '-' | '_'))
        .collect();
    slug::slugify(kept)
}
