use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{account::Account, identifier::Identifier},
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        actor: &Account,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        Self::ensure_can_read(actor)?;

        let not_found =
            || ApplicationError::not_found(format!("Article with id '{}' not found", query.id));
        let id = Identifier::new(&query.id).map_err(|_| not_found())?;

        let article = self
            .article_repo
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)?;
        Ok(article.into())
    }
}
