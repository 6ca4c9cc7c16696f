use std::sync::Arc;

use crate::{
    application::error::ApplicationResult,
    domain::{
        access::{PermissionAction, PermissionSubject},
        account::Account,
        article::ArticleRepository,
    },
};

pub struct ArticleQueryService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
}

impl ArticleQueryService {
    pub fn new(article_repo: Arc<dyn ArticleRepository>) -> Self {
        Self { article_repo }
    }

    pub(super) fn ensure_can_read(actor: &Account) -> ApplicationResult<()> {
        actor.ensure_can(
            PermissionAction::Read,
            PermissionSubject::Article,
            "You are not allowed to read articles",
        )?;
        Ok(())
    }
}
