use super::PageParams;
use crate::application::{
    commands::accounts::{
        ChangePasswordCommand, CreateAccountCommand, CreateAccountResult, DeleteAccountCommand,
        UpdateAccountCommand,
    },
    dto::{AccountDto, Paginated},
    queries::accounts::{GetAccountByIdQuery, ListAccountsQuery},
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
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub password: String,
}

pub async fn create_account(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateAccountRequest>,
) -> HttpResult<(StatusCode, Json<CreateAccountResult>)> {
    let created = state
        .services
        .account_commands
        .create_account(
            &actor,
            CreateAccountCommand {
                name: payload.name,
                email: payload.email,
                password: payload.password,
                role_id: payload.role_id,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_accounts(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Paginated<AccountDto>>> {
    let page = state
        .services
        .account_queries
        .list_accounts(
            &actor,
            ListAccountsQuery {
                page: params.page,
                limit: params.limit,
            },
        )
        .await
        .into_http()?;
    Ok(Json(page))
}

pub async fn get_account(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<AccountDto>> {
    let account = state
        .services
        .account_queries
        .get_account_by_id(&actor, GetAccountByIdQuery { id })
        .await
        .into_http()?;
    Ok(Json(account))
}

pub async fn update_account(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAccountRequest>,
) -> HttpResult<Json<AccountDto>> {
    let account = state
        .services
        .account_commands
        .update_account(
            &actor,
            UpdateAccountCommand {
                id,
                name: payload.name,
                email: payload.email,
                password: payload.password,
                role_id: payload.role_id,
            },
        )
        .await
        .into_http()?;
    Ok(Json(account))
}

pub async fn change_password(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<ChangePasswordRequest>,
) -> HttpResult<StatusCode> {
    state
        .services
        .account_commands
        .change_password(
            &actor,
            ChangePasswordCommand {
                id,
                password: payload.password,
            },
        )
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_account(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .account_commands
        .delete_account(&actor, DeleteAccountCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
