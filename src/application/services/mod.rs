// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            accounts::AccountCommandService, articles::ArticleCommandService,
            auth::AuthCommandService,
        },
        error::ApplicationError,
        ports::{ClockPort, IdGeneratorPort, PasswordHasherPort, TokenManagerPort},
        queries::{accounts::AccountQueryService, articles::ArticleQueryService},
    },
    domain::{
        access::RoleRepository, account::Account, account::AccountRepository,
        article::ArticleRepository,
    },
};

/// Repositories and ports the use-case services are wired from.
pub struct ServiceDependencies {
    pub account_repo: Arc<dyn AccountRepository>,
    pub role_repo: Arc<dyn RoleRepository>,
    pub article_repo: Arc<dyn ArticleRepository>,
    pub password_hasher: Arc<PasswordHasherPort>,
    pub token_manager: Arc<TokenManagerPort>,
    pub id_generator: Arc<IdGeneratorPort>,
    pub clock: Arc<ClockPort>,
}

pub struct ApplicationServices {
    pub auth_commands: Arc<AuthCommandService>,
    pub account_commands: Arc<AccountCommandService>,
    pub account_queries: Arc<AccountQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    account_repo: Arc<dyn AccountRepository>,
    token_manager: Arc<TokenManagerPort>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let auth_commands = Arc::new(AuthCommandService::new(
            Arc::clone(&deps.account_repo),
            Arc::clone(&deps.password_hasher),
            Arc::clone(&deps.token_manager),
        ));

        let account_commands = Arc::new(AccountCommandService::new(
            Arc::clone(&deps.account_repo),
            Arc::clone(&deps.role_repo),
            Arc::clone(&deps.password_hasher),
            Arc::clone(&deps.token_manager),
            Arc::clone(&deps.id_generator),
            Arc::clone(&deps.clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&deps.article_repo),
            Arc::clone(&deps.id_generator),
            Arc::clone(&deps.clock),
        ));

        let account_queries = Arc::new(AccountQueryService::new(Arc::clone(&deps.account_repo)));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&deps.article_repo)));

        Self {
            auth_commands,
            account_commands,
            account_queries,
            article_commands,
            article_queries,
            account_repo: deps.account_repo,
            token_manager: deps.token_manager,
        }
    }

    /// Resolves a raw bearer token to the current state of its account.
    ///
    /// The token only identifies the caller; role and permissions always come
    /// from the stored account, so revoked roles or deleted accounts take
    /// effect immediately.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<Arc<Account>> {
        let claims = self.token_manager.authenticate(token).await?;

        let account = self
            .account_repo
            .find_by_id(claims.account_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(account_id = %claims.account_id, "token for missing account");
                ApplicationError::unauthorized("Account not found")
            })?;

        Ok(Arc::new(account))
    }
}
