mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetAccountByIdQuery;
pub use list::ListAccountsQuery;
pub use service::AccountQueryService;
