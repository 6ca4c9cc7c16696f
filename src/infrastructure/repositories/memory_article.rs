use super::page_bounds;
use crate::domain::{
    article::{Article, ArticleRepository},
    errors::{DomainError, DomainResult},
    identifier::Identifier,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: RwLock<HashMap<Identifier, Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn slug_conflict(articles: &HashMap<Identifier, Article>, article: &Article) -> DomainResult<()> {
    if articles
        .values()
        .any(|existing| existing.slug() == article.slug() && existing.id() != article.id())
    {
        return Err(DomainError::conflict(format!(
            "Article with slug '{}' already exists",
            article.slug()
        )));
    }
    Ok(())
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn insert(&self, article: Article) -> DomainResult<Article> {
        let mut articles = self.articles.write().await;
        if articles.contains_key(&article.id()) {
            return Err(DomainError::conflict(format!(
                "Article with id '{}' already exists",
                article.id()
            )));
        }
        slug_conflict(&articles, &article)?;
        articles.insert(article.id(), article.clone());
        Ok(article)
    }

    async fn update(&self, article: Article) -> DomainResult<Article> {
        let mut articles = self.articles.write().await;
        slug_conflict(&articles, &article)?;
        let Some(stored) = articles.get_mut(&article.id()) else {
            return Err(DomainError::not_found(format!(
                "Article with id '{}' not found",
                article.id()
            )));
        };
        *stored = article.clone();
        Ok(article)
    }

    async fn find_by_id(&self, id: Identifier) -> DomainResult<Option<Article>> {
        Ok(self.articles.read().await.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Article>> {
        let articles = self.articles.read().await;
        Ok(articles.values().find(|article| article.slug() == slug).cloned())
    }

    async fn list_page(&self, offset: u64, limit: u64) -> DomainResult<(Vec<Article>, u64)> {
        let articles = self.articles.read().await;
        let mut all: Vec<&Article> = articles.values().collect();
        all.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });

        let (start, end) = page_bounds(all.len(), offset, limit);
        let page = all[start..end].iter().map(|article| (*article).clone()).collect();
        Ok((page, all.len() as u64))
    }

    async fn delete(&self, id: Identifier) -> DomainResult<()> {
        let mut articles = self.articles.write().await;
        articles
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(format!("Article with id '{id}' not found")))
    }
}
