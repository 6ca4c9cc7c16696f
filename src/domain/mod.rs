pub mod access;
pub mod account;
pub mod article;
pub mod errors;
pub mod identifier;

pub use errors::{DomainError, DomainResult};
pub use identifier::Identifier;
