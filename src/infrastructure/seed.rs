// src/infrastructure/seed.rs
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{security::PasswordHasher, time::Clock},
    },
    domain::{
        access::{Role, RoleRepository},
        account::{Account, AccountRecord, AccountRepository, Email, Password},
        identifier::Identifier,
    },
};

pub const ADMIN_ROLE_ID: &str = "ca73df2c-f18d-4d81-b119-565da3ad58f2";
pub const EDITOR_ROLE_ID: &str = "062f8c5b-9bbc-4705-8b65-4de5823996a7";
pub const READER_ROLE_ID: &str = "e7c7b813-d12a-4844-a5bd-63b44d64ee6e";

pub const ADMIN_NAME: &str = "Administrator";

/// Credentials for the bootstrap administrator.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
}

impl Default for AdminSeed {
    fn default() -> Self {
        Self {
            email: "admin@example.com".into(),
            password: "adminPass123".into(),
        }
    }
}

/// Inserts the well-known roles that are missing and, when no account
/// exists yet, an administrator. Safe to run on every start.
pub async fn seed_defaults(
    roles: &dyn RoleRepository,
    accounts: &dyn AccountRepository,
    password_hasher: &dyn PasswordHasher,
    clock: &dyn Clock,
    admin: &AdminSeed,
) -> ApplicationResult<Option<Account>> {
    for (id, name) in [
        (ADMIN_ROLE_ID, Role::ADMIN),
        (EDITOR_ROLE_ID, Role::EDITOR),
        (READER_ROLE_ID, Role::READER),
    ] {
        if roles.find_by_name(name).await?.is_none() {
            roles
                .insert(Role::new(id, name, Role::default_permissions(name))?)
                .await?;
            tracing::info!(role = name, "seeded role");
        }
    }

    if accounts.count().await? > 0 {
        return Ok(None);
    }

    let admin_role = roles
        .find_by_name(Role::ADMIN)
        .await?
        .ok_or_else(|| ApplicationError::infrastructure("ADMIN role missing after seeding"))?;
    let email = Email::new(admin.email.as_str())?;
    let password = Password::new(admin.password.as_str())?;
    let password_hash = password_hasher.hash(password.as_str()).await?;
    let now = clock.now();

    // No actor exists yet, so the administrator is restored rather than created.
    let account = Account::restore(AccountRecord {
        id: Identifier::generate().to_string(),
        name: ADMIN_NAME.into(),
        email: email.into_inner(),
        password_hash,
        created_at: now,
        updated_at: now,
        role: Some(admin_role),
    })?;
    let account = accounts.insert(account).await?;
    tracing::info!(account_id = %account.id(), email = account.email(), "seeded administrator");
    Ok(Some(account))
}
