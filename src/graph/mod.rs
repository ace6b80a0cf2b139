//! In-memory graph operations: the core data structure and its construction discipline.

pub mod builder;
pub mod gate;
pub mod labeled_graph;
pub mod relate;

pub use builder::GraphBuilder;
pub use gate::{ConstructionGate, ConstructionKind};
pub use labeled_graph::Graph;
pub use relate::{EdgeCursor, Target};
