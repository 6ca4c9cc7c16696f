// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod ids;
pub mod security;
pub mod time;

pub use ids::CountingIdGenerator;
pub use security::{PlainPasswordHasher, StaticTokenManager, token_for};
pub use time::{DummyClock, SteppingClock, fixed_now};
