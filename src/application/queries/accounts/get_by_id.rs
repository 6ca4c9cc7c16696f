use super::AccountQueryService;
use crate::{
    application::{
        dto::AccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        access::{PermissionAction, PermissionSubject},
        account::Account,
        identifier::Identifier,
    },
};

pub struct GetAccountByIdQuery {
    pub id: String,
}

impl AccountQueryService {
    pub async fn get_account_by_id(
        &self,
        actor: &Account,
        query: GetAccountByIdQuery,
    ) -> ApplicationResult<AccountDto> {
        actor.ensure_can(
            PermissionAction::Read,
            PermissionSubject::Account,
            "You are not allowed to read accounts",
        )?;

        let not_found =
            || ApplicationError::not_found(format!("Account with id '{}' not found", query.id));
        let id = Identifier::new(&query.id).map_err(|_| not_found())?;
        tracing::debug!(account_id = %id, "loading account");

        let account = self
            .account_repo
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)?;
        Ok(AccountDto::from(&account))
    }
}
