//! Text generator implementations.
//!
//! This module provides the production implementation of the
//! `TextGenerator` trait. Users can use it directly or implement their own.

mod openai;

pub use openai::OpenAiGenerator;
