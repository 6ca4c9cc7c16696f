// src/presentation/http/controllers/articles.rs
use super::PageParams;
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, Paginated},
    queries::articles::{GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let article = state
        .services
        .article_commands
        .create_article(
            &actor,
            CreateArticleCommand {
                title: payload.title,
                content: payload.content,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Paginated<ArticleDto>>> {
    let page = state
        .services
        .article_queries
        .list_articles(
            &actor,
            ListArticlesQuery {
                page: params.page,
                limit: params.limit,
            },
        )
        .await
        .into_http()?;
    Ok(Json(page))
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(&actor, GetArticleByIdQuery { id })
        .await
        .into_http()?;
    Ok(Json(article))
}

pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    let article = state
        .services
        .article_queries
        .get_article_by_slug(&actor, GetArticleBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(Json(article))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let article = state
        .services
        .article_commands
        .update_article(
            &actor,
            UpdateArticleCommand {
                id,
                title: payload.title,
                content: payload.content,
            },
        )
        .await
        .into_http()?;
    Ok(Json(article))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(&actor, DeleteArticleCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
