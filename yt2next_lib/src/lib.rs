pub mod api;
pub mod models;
pub mod resolver;
pub mod url;

pub use resolver::{resolve_next, ResolveError, Settings};
