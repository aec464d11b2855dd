//! Generators for test input text.

pub mod yaml;

pub use yaml::*;
