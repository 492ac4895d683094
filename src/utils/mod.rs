//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code candidate generation

pub mod code_generator;
