use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::Account,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        actor: &Account,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        Self::ensure_can_read(actor)?;
        tracing::debug!(slug = %query.slug, "loading article by slug");

        let article = self
            .article_repo
            .find_by_slug(&query.slug)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!(
                    "Article with slug '{}' not found",
                    query.slug
                ))
            })?;
        Ok(article.into())
    }
}
