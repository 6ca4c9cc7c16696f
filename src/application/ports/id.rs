// src/application/ports/id.rs
use crate::domain::identifier::Identifier;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Identifier;
}
