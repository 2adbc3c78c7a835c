//! Process entry points for the song query assistant: environment
//! configuration and the HTTP transport.

pub mod app;
pub mod config;
pub mod routes;

pub use app::build_app;
pub use config::Config;
