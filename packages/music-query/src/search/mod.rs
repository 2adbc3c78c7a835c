//! Web searcher implementations.

mod rapidapi;

pub use rapidapi::RapidApiSearcher;
