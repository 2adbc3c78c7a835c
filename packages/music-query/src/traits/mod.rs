//! Collaborator abstractions.
//!
//! These traits define the two external services the assistant consumes.
//! Applications pick the implementations; the pipeline only sees the traits.

pub mod generator;
pub mod searcher;
