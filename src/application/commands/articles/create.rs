use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{account::Account, article::Article},
};
use std::sync::Arc;

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &Arc<Account>,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = Article::create(
            actor,
            &command.title,
            &command.content,
            self.id_generator.next_id(),
            self.clock.now(),
        )
        .inspect_err(|err| {
            tracing::debug!(actor_id = %actor.id(), error = %err, "article rejected");
        })?;

        let created = self.article_repo.insert(article).await?;
        tracing::info!(
            article_id = %created.id(),
            slug = created.slug(),
            author_id = %actor.id(),
            "article created"
        );
        Ok(created.into())
    }
}
