pub mod cursor;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use cursor::ArticleListCursor;
pub use entity::{Article, ArticlePatch, NewArticle};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle};
