pub mod placeholders;
pub mod routes;

pub use routes::{App, Route};
