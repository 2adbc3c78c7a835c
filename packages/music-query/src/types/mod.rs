//! Value types for the music query pipeline.

pub mod config;
pub mod lexicon;
pub mod query;
pub mod response;
pub mod song;
