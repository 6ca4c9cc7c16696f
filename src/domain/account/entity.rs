// src/domain/account/entity.rs
use crate::domain::access::{PermissionAction, PermissionSubject, Role};
use crate::domain::account::value_objects::{Email, HashedPassword, Name};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identifier::Identifier;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Input for [`Account::create`]. Raw values are validated by the factory.
#[derive(Debug, Clone)]
pub struct AccountDraft {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Arc<Role>,
}

/// A persisted account as handed back by storage, before re-validation.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub role: Option<Arc<Role>>,
}

/// Identity entity. Every mutator checks the acting account before touching state.
#[derive(Debug, Clone)]
pub struct Account {
    id: Identifier,
    name: Name,
    email: Email,
    password: HashedPassword,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    role: Option<Arc<Role>>,
}

impl Account {
    pub fn create(
        actor: &Self,
        draft: AccountDraft,
        id: Identifier,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        actor.ensure_can(
            PermissionAction::Create,
            PermissionSubject::Account,
            "You are not allowed to create an account",
        )?;

        Ok(Self {
            id,
            name: Name::new(draft.name)?,
            email: Email::new(draft.email)?,
            password: HashedPassword::new(draft.password_hash)?,
            created_at: now,
            updated_at: now,
            role: Some(draft.role),
        })
    }

    pub fn restore(record: AccountRecord) -> DomainResult<Self> {
        if record.updated_at < record.created_at {
            return Err(DomainError::validation(
                "Account cannot be updated before it was created",
            ));
        }

        Ok(Self {
            id: Identifier::new(&record.id)?,
            name: Name::new(record.name)?,
            email: Email::new(record.email)?,
            password: HashedPassword::new(record.password_hash)?,
            created_at: record.created_at,
            updated_at: record.updated_at,
            role: record.role,
        })
    }

    /// Replaces the supplied fields. `updated_at` only moves when a value actually differs.
    pub fn update_information(
        &mut self,
        actor: &Self,
        name: Option<&str>,
        email: Option<&str>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        actor.ensure_can(
            PermissionAction::Update,
            PermissionSubject::Account,
            "You are not allowed to update the account information",
        )?;

        let name = name.map(Name::new).transpose()?;
        let email = email.map(Email::new).transpose()?;

        let mut changed = false;
        if let Some(name) = name.filter(|name| *name != self.name) {
            self.name = name;
            changed = true;
        }
        if let Some(email) = email.filter(|email| *email != self.email) {
            self.email = email;
            changed = true;
        }
        if changed {
            self.touch(now);
        }
        Ok(())
    }

    /// Only the account owner may change the password, whatever their role.
    pub fn ensure_password_changeable_by(&self, actor: &Self) -> DomainResult<()> {
        if self.same_identity(actor) {
            Ok(())
        } else {
            Err(DomainError::forbidden(
                "You are not allowed to update the account password",
            ))
        }
    }

    pub fn change_password(
        &mut self,
        actor: &Self,
        password_hash: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_password_changeable_by(actor)?;

        self.password = HashedPassword::new(password_hash)?;
        self.touch(now);
        Ok(())
    }

    pub fn set_role(&mut self, actor: &Self, role: Arc<Role>, now: DateTime<Utc>) -> DomainResult<()> {
        actor.ensure_can(
            PermissionAction::Update,
            PermissionSubject::Account,
            "You are not allowed to update the account role",
        )?;

        self.role = Some(role);
        self.touch(now);
        Ok(())
    }

    pub fn has_permission(&self, action: PermissionAction, subject: PermissionSubject) -> bool {
        self.role
            .as_ref()
            .is_some_and(|role| role.has_permission(action, subject))
    }

    /// Guard clause used by every permission-gated operation.
    pub fn ensure_can(
        &self,
        action: PermissionAction,
        subject: PermissionSubject,
        message: &str,
    ) -> DomainResult<()> {
        if self.has_permission(action, subject) {
            Ok(())
        } else {
            Err(DomainError::forbidden(message))
        }
    }

    pub fn same_identity(&self, other: &Self) -> bool {
        self.id == other.id
    }

    pub const fn id(&self) -> Identifier {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn password_hash(&self) -> &str {
        self.password.as_str()
    }

    pub fn role(&self) -> Option<&Arc<Role>> {
        self.role.as_ref()
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }
}
