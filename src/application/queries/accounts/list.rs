use super::AccountQueryService;
use crate::{
    application::{
        dto::{AccountDto, PageRequest, Paginated},
        error::ApplicationResult,
    },
    domain::{
        access::{PermissionAction, PermissionSubject},
        account::Account,
    },
};

#[derive(Debug, Default)]
pub struct ListAccountsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl AccountQueryService {
    pub async fn list_accounts(
        &self,
        actor: &Account,
        query: ListAccountsQuery,
    ) -> ApplicationResult<Paginated<AccountDto>> {
        actor.ensure_can(
            PermissionAction::Read,
            PermissionSubject::Account,
            "You are not allowed to list accounts",
        )?;

        let request = PageRequest::new(query.page, query.limit)?;
        let (accounts, total) = self
            .account_repo
            .list_page(request.offset(), request.limit())
            .await?;
        tracing::debug!(page = request.page(), total, "listing accounts");

        let data = accounts.iter().map(AccountDto::from).collect();
        Ok(Paginated::new(data, request, total))
    }
}
