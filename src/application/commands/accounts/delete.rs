use super::AccountCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        access::{PermissionAction, PermissionSubject},
        account::Account,
    },
};

pub struct DeleteAccountCommand {
    pub id: String,
}

impl AccountCommandService {
    pub async fn delete_account(
        &self,
        actor: &Account,
        command: DeleteAccountCommand,
    ) -> ApplicationResult<()> {
        if let Err(err) = actor.ensure_can(
            PermissionAction::Delete,
            PermissionSubject::Account,
            "You are not allowed to delete accounts",
        ) {
            tracing::warn!(actor_id = %actor.id(), target = %command.id, "account deletion refused");
            return Err(err.into());
        }

        let account = self.load_account(&command.id).await?;
        if account.same_identity(actor) {
            return Err(ApplicationError::forbidden(
                "You cannot delete your own account",
            ));
        }

        self.account_repo.mark_deleted(account.id()).await?;
        tracing::info!(account_id = %account.id(), actor_id = %actor.id(), "account deleted");
        Ok(())
    }
}
