// src/domain/access/role.rs
use crate::domain::access::permission::{Permission, PermissionAction, PermissionSubject};
use crate::domain::account::Name;
use crate::domain::errors::DomainResult;
use crate::domain::identifier::Identifier;

/// A named bundle of permissions. The permission list is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    id: Identifier,
    name: Name,
    permissions: Vec<Permission>,
}

impl Role {
    pub const ADMIN: &'static str = "ADMIN";
    pub const EDITOR: &'static str = "EDITOR";
    pub const READER: &'static str = "READER";

    pub fn new(
        id: impl AsRef<str>,
        name: impl Into<String>,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> DomainResult<Self> {
        Ok(Self {
            id: Identifier::new(id)?,
            name: Name::new(name)?,
            permissions: permissions.into_iter().collect(),
        })
    }

    pub fn without_permissions(id: impl AsRef<str>, name: impl Into<String>) -> DomainResult<Self> {
        Self::new(id, name, [])
    }

    pub fn has_permission(&self, action: PermissionAction, subject: PermissionSubject) -> bool {
        self.permissions
            .iter()
            .any(|permission| permission.matches(action, subject))
    }

    pub const fn id(&self) -> Identifier {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns a copy; changing it never affects the role.
    pub fn permissions(&self) -> Vec<Permission> {
        self.permissions.clone()
    }

    /// Default permission set for the well-known role names.
    pub fn default_permissions(name: &str) -> Vec<Permission> {
        use PermissionAction as A;
        use PermissionSubject as S;

        match name {
            Self::ADMIN => S::ALL
                .iter()
                .flat_map(|subject| A::ALL.iter().map(|action| Permission::create(*action, *subject)))
                .collect(),
            Self::EDITOR => A::ALL
                .iter()
                .map(|action| Permission::create(*action, S::Article))
                .collect(),
            Self::READER => vec![Permission::create(A::Read, S::Article)],
            _ => Vec::new(),
        }
    }
}
