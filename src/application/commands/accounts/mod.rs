// src/application/commands/accounts/mod.rs
mod create;
mod delete;
mod password;
mod service;
mod update;

pub use create::{CreateAccountCommand, CreateAccountResult};
pub use delete::DeleteAccountCommand;
pub use password::ChangePasswordCommand;
pub use service::AccountCommandService;
pub use update::UpdateAccountCommand;
