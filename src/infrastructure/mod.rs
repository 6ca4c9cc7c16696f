pub mod repositories;
pub mod security;
pub mod seed;
pub mod system;
