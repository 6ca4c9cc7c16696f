// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{id::IdGenerator, time::Clock},
    },
    domain::{
        article::{Article, ArticleRepository},
        identifier::Identifier,
    },
};

pub struct ArticleCommandService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) id_generator: Arc<dyn IdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            article_repo,
            id_generator,
            clock,
        }
    }

    pub(super) async fn load_article(&self, id: &str) -> ApplicationResult<Article> {
        let not_found = || ApplicationError::not_found(format!("Article with id '{id}' not found"));
        let parsed = Identifier::new(id).map_err(|_| not_found())?;
        self.article_repo
            .find_by_id(parsed)
            .await?
            .ok_or_else(not_found)
    }
}
