// src/presentation/http/controllers/mod.rs
pub mod accounts;
pub mod articles;
pub mod auth;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}
