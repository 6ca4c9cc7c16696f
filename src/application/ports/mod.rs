// src/application/ports/mod.rs
pub mod id;
pub mod security;
pub mod time;

// Trait-object aliases used at injection sites.
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type TokenManagerPort = dyn security::TokenManager;
pub type ClockPort = dyn time::Clock;
pub type IdGeneratorPort = dyn id::IdGenerator;
