use crate::domain::access::role::Role;
use crate::domain::errors::DomainResult;
use crate::domain::identifier::Identifier;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn insert(&self, role: Role) -> DomainResult<Arc<Role>>;
    async fn find_by_id(&self, id: Identifier) -> DomainResult<Option<Arc<Role>>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Arc<Role>>>;
    async fn list(&self) -> DomainResult<Vec<Arc<Role>>>;
}
