use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, PageRequest, Paginated},
        error::ApplicationResult,
    },
    domain::account::Account,
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        actor: &Account,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Paginated<ArticleDto>> {
        Self::ensure_can_read(actor)?;

        let request = PageRequest::new(query.page, query.limit)?;
        let (articles, total) = self
            .article_repo
            .list_page(request.offset(), request.limit())
            .await?;
        tracing::debug!(page = request.page(), total, "listing articles");

        let data = articles.iter().map(ArticleDto::from).collect();
        Ok(Paginated::new(data, request, total))
    }
}
