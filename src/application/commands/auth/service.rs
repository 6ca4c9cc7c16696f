use std::sync::Arc;

use crate::{
    application::ports::security::{PasswordHasher, TokenManager},
    domain::account::AccountRepository,
};

pub struct AuthCommandService {
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
}

impl AuthCommandService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        Self {
            account_repo,
            password_hasher,
            token_manager,
        }
    }
}
