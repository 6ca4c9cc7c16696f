use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::account::Account,
};

#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &Account,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_article(&command.id).await?;

        if let Err(err) = article.update(
            actor,
            command.title.as_deref(),
            command.content.as_deref(),
            self.clock.now(),
        ) {
            tracing::warn!(actor_id = %actor.id(), article_id = %article.id(), error = %err, "article update rejected");
            return Err(err.into());
        }

        let updated = self.article_repo.update(article).await?;
        tracing::info!(article_id = %updated.id(), slug = updated.slug(), "article updated");
        Ok(updated.into())
    }
}
