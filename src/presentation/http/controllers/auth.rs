use crate::application::{commands::auth::LoginCommand, dto::LoginResult};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResult>> {
    let result = state
        .services
        .auth_commands
        .login(LoginCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()?;
    Ok(Json(result))
}
