//! Fake implementations for testing.

pub mod recording_diagram_generator;

pub use recording_diagram_generator::RecordingDiagramGenerator;
