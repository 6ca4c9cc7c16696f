// src/application/commands/accounts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{
            id::IdGenerator,
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
    },
    domain::{
        access::{Role, RoleRepository},
        account::{Account, AccountRepository, HashedPassword, Password},
        identifier::Identifier,
    },
};

pub struct AccountCommandService {
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) role_repo: Arc<dyn RoleRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) id_generator: Arc<dyn IdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AccountCommandService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        role_repo: Arc<dyn RoleRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            account_repo,
            role_repo,
            password_hasher,
            token_manager,
            id_generator,
            clock,
        }
    }

    pub(super) async fn load_account(&self, id: &str) -> ApplicationResult<Account> {
        let not_found = || ApplicationError::not_found(format!("Account with id '{id}' not found"));
        // A malformed id can never match a stored account.
        let parsed = Identifier::new(id).map_err(|_| not_found())?;
        self.account_repo
            .find_by_id(parsed)
            .await?
            .ok_or_else(not_found)
    }

    pub(super) async fn load_role(&self, id: &str) -> ApplicationResult<Arc<Role>> {
        let not_found = || ApplicationError::not_found("Role not found");
        let parsed = Identifier::new(id).map_err(|_| not_found())?;
        self.role_repo
            .find_by_id(parsed)
            .await?
            .ok_or_else(not_found)
    }

    /// Conflict unless `email` is free or already belongs to `owner`.
    pub(super) async fn ensure_email_available(
        &self,
        email: &str,
        owner: Option<Identifier>,
    ) -> ApplicationResult<()> {
        match self.account_repo.find_by_email(email).await? {
            Some(existing) if Some(existing.id()) != owner => Err(ApplicationError::conflict(
                format!("Account with email '{email}' already exists"),
            )),
            _ => Ok(()),
        }
    }

    /// Applies the plaintext policy, then hashes.
    pub(super) async fn hash_password(&self, plaintext: &str) -> ApplicationResult<HashedPassword> {
        let password = Password::new(plaintext)?;
        let hashed = self.password_hasher.hash(password.as_str()).await?;
        Ok(HashedPassword::new(hashed)?)
    }
}
