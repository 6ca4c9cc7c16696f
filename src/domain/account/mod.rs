pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Account, AccountDraft, AccountRecord};
pub use repository::AccountRepository;
pub use value_objects::{Email, HashedPassword, Name, Password};
