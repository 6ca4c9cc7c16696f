use crate::domain::account::entity::Account;
use crate::domain::errors::DomainResult;
use crate::domain::identifier::Identifier;
use async_trait::async_trait;

/// Storage for accounts. Accounts marked deleted are invisible to every finder.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Fails with `Conflict` when the email is already taken.
    async fn insert(&self, account: Account) -> DomainResult<Account>;
    async fn update(&self, account: Account) -> DomainResult<Account>;
    async fn find_by_id(&self, id: Identifier) -> DomainResult<Option<Account>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>>;
    async fn count(&self) -> DomainResult<u64>;
    /// Newest first. Returns the page and the total number of live accounts.
    async fn list_page(&self, offset: u64, limit: u64) -> DomainResult<(Vec<Account>, u64)>;
    async fn mark_deleted(&self, id: Identifier) -> DomainResult<()>;
}
