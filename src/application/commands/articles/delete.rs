use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::account::Account};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &Account,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.load_article(&command.id).await?;

        if let Err(err) = article.ensure_deletable_by(actor) {
            tracing::warn!(actor_id = %actor.id(), article_id = %article.id(), "article deletion refused");
            return Err(err.into());
        }

        self.article_repo.delete(article.id()).await?;
        tracing::info!(article_id = %article.id(), actor_id = %actor.id(), "article deleted");
        Ok(())
    }
}
