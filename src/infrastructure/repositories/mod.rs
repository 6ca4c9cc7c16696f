// src/infrastructure/repositories/mod.rs
mod memory_account;
mod memory_article;
mod memory_role;

pub use memory_account::InMemoryAccountRepository;
pub use memory_article::InMemoryArticleRepository;
pub use memory_role::InMemoryRoleRepository;

fn page_bounds(len: usize, offset: u64, limit: u64) -> (usize, usize) {
    let start = usize::try_from(offset).unwrap_or(usize::MAX).min(len);
    let take = usize::try_from(limit).unwrap_or(usize::MAX);
    (start, start.saturating_add(take).min(len))
}
