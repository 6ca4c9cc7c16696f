pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleRecord};
pub use repository::ArticleRepository;
pub use value_objects::{Content, Slug, Title};
