pub mod permission;
pub mod repository;
pub mod role;

pub use permission::{Permission, PermissionAction, PermissionSubject};
pub use repository::RoleRepository;
pub use role::Role;
