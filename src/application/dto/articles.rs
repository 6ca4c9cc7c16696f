use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleAuthorDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author: ArticleAuthorDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleDto {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id().to_string(),
            title: article.title().to_owned(),
            slug: article.slug().to_owned(),
            content: article.content().to_owned(),
            author: ArticleAuthorDto {
                id: article.author().id().to_string(),
                name: article.author().name().to_owned(),
                email: article.author().email().to_owned(),
            },
            created_at: article.created_at(),
            updated_at: article.updated_at(),
        }
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self::from(&article)
    }
}
