use super::page_bounds;
use crate::domain::{
    account::{Account, AccountRepository},
    errors::{DomainError, DomainResult},
    identifier::Identifier,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

struct StoredAccount {
    account: Account,
    deleted: bool,
}

/// Accounts are soft deleted: the row stays but no finder returns it, and its
/// email becomes available again.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<Identifier, StoredAccount>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_conflict(
    accounts: &HashMap<Identifier, StoredAccount>,
    account: &Account,
) -> DomainResult<()> {
    let taken = accounts.values().any(|stored| {
        !stored.deleted
            && stored.account.email() == account.email()
            && stored.account.id() != account.id()
    });
    if taken {
        return Err(DomainError::conflict(format!(
            "Account with email '{}' already exists",
            account.email()
        )));
    }
    Ok(())
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: Account) -> DomainResult<Account> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.id()) {
            return Err(DomainError::conflict(format!(
                "Account with id '{}' already exists",
                account.id()
            )));
        }
        email_conflict(&accounts, &account)?;
        accounts.insert(
            account.id(),
            StoredAccount {
                account: account.clone(),
                deleted: false,
            },
        );
        Ok(account)
    }

    async fn update(&self, account: Account) -> DomainResult<Account> {
        let mut accounts = self.accounts.write().await;
        email_conflict(&accounts, &account)?;
        match accounts.get_mut(&account.id()) {
            Some(stored) if !stored.deleted => {
                stored.account = account.clone();
                Ok(account)
            }
            _ => Err(DomainError::not_found(format!(
                "Account with id '{}' not found",
                account.id()
            ))),
        }
    }

    async fn find_by_id(&self, id: Identifier) -> DomainResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .get(&id)
            .filter(|stored| !stored.deleted)
            .map(|stored| stored.account.clone()))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|stored| !stored.deleted && stored.account.email() == email)
            .map(|stored| stored.account.clone()))
    }

    async fn count(&self) -> DomainResult<u64> {
        let accounts = self.accounts.read().await;
        let live = accounts.values().filter(|stored| !stored.deleted).count();
        Ok(live as u64)
    }

    async fn list_page(&self, offset: u64, limit: u64) -> DomainResult<(Vec<Account>, u64)> {
        let accounts = self.accounts.read().await;
        let mut live: Vec<&Account> = accounts
            .values()
            .filter(|stored| !stored.deleted)
            .map(|stored| &stored.account)
            .collect();
        live.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });

        let (start, end) = page_bounds(live.len(), offset, limit);
        let page = live[start..end].iter().map(|account| (*account).clone()).collect();
        Ok((page, live.len() as u64))
    }

    async fn mark_deleted(&self, id: Identifier) -> DomainResult<()> {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(&id) {
            Some(stored) if !stored.deleted => {
                stored.deleted = true;
                Ok(())
            }
            _ => Err(DomainError::not_found(format!(
                "Account with id '{id}' not found"
            ))),
        }
    }
}
