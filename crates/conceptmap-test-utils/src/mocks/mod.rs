//! Mock implementations of the workspace's seams.

pub mod diagram_generator;

pub use diagram_generator::*;
