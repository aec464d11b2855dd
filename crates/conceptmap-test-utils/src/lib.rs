//! Testing utilities for the conceptmapper workspace.
//!
//! Sample definitions and maps, a mock of the diagram generator seam, and a
//! fake generator that records what it was asked to draw.

pub mod builders;
pub mod data_generators;
pub mod implementations;
pub mod mocks;

/// Re-export commonly used types for convenience
pub use mockall;

pub use implementations::RecordingDiagramGenerator;
pub use mocks::MockDiagramGenerator;
