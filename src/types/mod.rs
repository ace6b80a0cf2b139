//! All data types for the labeled graph library.

pub mod edge;
pub mod error;
pub mod id;
pub mod render;
pub mod vertex;
pub mod warning;

use std::fmt;

use serde::Serialize;

pub use edge::{Direction, Edge, EdgeKey, EdgeView};
pub use error::{GraphError, GraphResult};
pub use id::{EdgeId, GraphId, VertexId};
pub use render::canonical_text;
pub use vertex::Vertex;
pub use warning::GraphWarning;

/// Opaque client payload carried as a vertex value or an edge weight.
///
/// Anything cloneable that can be rendered is accepted; rendering prefers the
/// compact JSON encoding and falls back to the `Debug` form.
pub trait Payload: Clone + Serialize + fmt::Debug {}

impl<T: Clone + Serialize + fmt::Debug> Payload for T {}
