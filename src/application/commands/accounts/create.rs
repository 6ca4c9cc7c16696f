use super::AccountCommandService;
use crate::{
    application::{
        dto::{AccountDto, AuthTokenDto},
        error::ApplicationResult,
    },
    domain::{
        access::{PermissionAction, PermissionSubject},
        account::{Account, AccountDraft},
    },
};
use serde::Serialize;
use std::sync::Arc;

pub struct CreateAccountCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountResult {
    pub token: AuthTokenDto,
    pub account: AccountDto,
}

impl AccountCommandService {
    pub async fn create_account(
        &self,
        actor: &Account,
        command: CreateAccountCommand,
    ) -> ApplicationResult<CreateAccountResult> {
        // Checked up front so unprivileged callers cannot probe for taken emails.
        if let Err(err) = actor.ensure_can(
            PermissionAction::Create,
            PermissionSubject::Account,
            "You are not allowed to create an account",
        ) {
            tracing::warn!(actor_id = %actor.id(), "account creation refused");
            return Err(err.into());
        }

        self.ensure_email_available(&command.email, None).await?;
        let role = self.load_role(&command.role_id).await?;
        let password_hash = self.hash_password(&command.password).await?;

        let account = Account::create(
            actor,
            AccountDraft {
                name: command.name,
                email: command.email,
                password_hash: password_hash.into_inner(),
                role: Arc::clone(&role),
            },
            self.id_generator.next_id(),
            self.clock.now(),
        )?;

        let account = self.account_repo.insert(account).await?;
        let token = self.token_manager.issue(&account).await?;

        tracing::info!(
            account_id = %account.id(),
            role = role.name(),
            actor_id = %actor.id(),
            "account created"
        );

        Ok(CreateAccountResult {
            token,
            account: AccountDto::from(&account),
        })
    }
}
