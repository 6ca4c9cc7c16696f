use crate::{
    application::ports::{id::IdGenerator, time::Clock},
    domain::identifier::Identifier,
};
use chrono::{DateTime, Utc};

#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random version 4 identifiers.
#[derive(Default, Clone)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Identifier {
        Identifier::generate()
    }
}
