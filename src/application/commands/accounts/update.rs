use super::AccountCommandService;
use crate::{
    application::{dto::AccountDto, error::ApplicationResult},
    domain::{
        access::{PermissionAction, PermissionSubject},
        account::Account,
    },
};

#[derive(Debug, Default)]
pub struct UpdateAccountCommand {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role_id: Option<String>,
}

impl AccountCommandService {
    /// Applies every supplied field to a working copy and persists once, so a
    /// refusal on any field leaves the stored account untouched.
    pub async fn update_account(
        &self,
        actor: &Account,
        command: UpdateAccountCommand,
    ) -> ApplicationResult<AccountDto> {
        if let Err(err) = actor.ensure_can(
            PermissionAction::Update,
            PermissionSubject::Account,
            "You are not allowed to update accounts",
        ) {
            tracing::warn!(actor_id = %actor.id(), target = %command.id, "account update refused");
            return Err(err.into());
        }

        let mut account = self.load_account(&command.id).await?;
        // Ownership first, so a refused caller never triggers policy checks or hashing.
        if let Some(Err(err)) = command
            .password
            .as_ref()
            .map(|_| account.ensure_password_changeable_by(actor))
        {
            tracing::warn!(actor_id = %actor.id(), target = %command.id, "password change refused");
            return Err(err.into());
        }

        if let Some(email) = command
            .email
            .as_deref()
            .filter(|email| *email != account.email())
        {
            self.ensure_email_available(email, Some(account.id())).await?;
        }

        let now = self.clock.now();
        account.update_information(actor, command.name.as_deref(), command.email.as_deref(), now)?;

        if let Some(role_id) = command.role_id.as_deref() {
            let role = self.load_role(role_id).await?;
            account.set_role(actor, role, now)?;
        }

        if let Some(password) = command.password.as_deref() {
            let hashed = self.hash_password(password).await?;
            account.change_password(actor, hashed.into_inner(), now)?;
        }

        let account = self.account_repo.update(account).await?;
        tracing::info!(account_id = %account.id(), actor_id = %actor.id(), "account updated");
        Ok(AccountDto::from(&account))
    }
}
