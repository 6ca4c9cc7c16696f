use crate::domain::{
    access::{Role, RoleRepository},
    errors::{DomainError, DomainResult},
    identifier::Identifier,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRoleRepository {
    roles: RwLock<Vec<Arc<Role>>>,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn insert(&self, role: Role) -> DomainResult<Arc<Role>> {
        let mut roles = self.roles.write().await;
        if roles
            .iter()
            .any(|existing| existing.id() == role.id() || existing.name() == role.name())
        {
            return Err(DomainError::conflict(format!(
                "Role '{}' already exists",
                role.name()
            )));
        }
        let role = Arc::new(role);
        roles.push(Arc::clone(&role));
        Ok(role)
    }

    async fn find_by_id(&self, id: Identifier) -> DomainResult<Option<Arc<Role>>> {
        let roles = self.roles.read().await;
        Ok(roles.iter().find(|role| role.id() == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Arc<Role>>> {
        let roles = self.roles.read().await;
        Ok(roles.iter().find(|role| role.name() == name).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Arc<Role>>> {
        Ok(self.roles.read().await.clone())
    }
}
