use super::AuthCommandService;
use crate::{
    application::{
        dto::{AccountDto, LoginResult},
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{Email, Password},
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl AuthCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResult> {
        let email = Email::new(command.email)?;
        Password::new(command.password.as_str())?;

        let invalid = || ApplicationError::unauthorized("Invalid credentials");

        let Some(account) = self.account_repo.find_by_email(email.as_str()).await? else {
            tracing::debug!(email = email.as_str(), "login for unknown email");
            return Err(invalid());
        };

        let matches = self
            .password_hasher
            .verify(&command.password, account.password_hash())
            .await?;
        if !matches {
            tracing::warn!(account_id = %account.id(), "login with wrong password");
            return Err(invalid());
        }

        let token = self.token_manager.issue(&account).await?;
        tracing::info!(account_id = %account.id(), "account logged in");
        Ok(LoginResult {
            token,
            account: AccountDto::from(&account),
        })
    }
}
