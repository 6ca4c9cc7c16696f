pub mod accounts;
pub mod articles;
pub mod auth;
pub mod pagination;

pub use accounts::{AccountDto, RoleDto};
pub use articles::{ArticleAuthorDto, ArticleDto};
pub use auth::{AuthTokenDto, LoginResult, TokenClaims};
pub use pagination::{PageRequest, Paginated, PaginationMeta};
