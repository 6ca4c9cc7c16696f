use super::AccountCommandService;
use crate::{application::error::ApplicationResult, domain::account::Account};

pub struct ChangePasswordCommand {
    pub id: String,
    pub password: String,
}

impl AccountCommandService {
    /// Self-service password change. Ownership is checked before any hashing.
    pub async fn change_password(
        &self,
        actor: &Account,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<()> {
        let mut account = self.load_account(&command.id).await?;
        if let Err(err) = account.ensure_password_changeable_by(actor) {
            tracing::warn!(actor_id = %actor.id(), target = %command.id, "password change refused");
            return Err(err.into());
        }

        let hashed = self.hash_password(&command.password).await?;
        account.change_password(actor, hashed.into_inner(), self.clock.now())?;

        self.account_repo.update(account).await?;
        tracing::info!(account_id = %actor.id(), "password changed");
        Ok(())
    }
}
