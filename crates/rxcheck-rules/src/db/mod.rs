pub mod converter;
pub mod entity;
pub mod schema;

pub use entity::rule;
pub use schema::ensure_schema;
