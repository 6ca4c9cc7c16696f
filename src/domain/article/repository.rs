use crate::domain::article::entity::Article;
use crate::domain::errors::DomainResult;
use crate::domain::identifier::Identifier;
use async_trait::async_trait;

/// Storage for articles. Slugs are unique across the store.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Fails with `Conflict` when the slug is already taken.
    async fn insert(&self, article: Article) -> DomainResult<Article>;
    async fn update(&self, article: Article) -> DomainResult<Article>;
    async fn find_by_id(&self, id: Identifier) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Article>>;
    /// Newest first. Returns the page and the total number of articles.
    async fn list_page(&self, offset: u64, limit: u64) -> DomainResult<(Vec<Article>, u64)>;
    async fn delete(&self, id: Identifier) -> DomainResult<()>;
}
