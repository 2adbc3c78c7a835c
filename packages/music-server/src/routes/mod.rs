mod health;
mod query;

pub use health::{health_handler, HealthResponse};
pub use query::{query_handler, QueryRequest};
