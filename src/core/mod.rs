//! Core-Domänentypen: Nodes, Paths, Wegpunkt-Graph, Spatial-Index.

pub mod graph;
pub mod node;
pub mod path;
pub mod spatial;

pub use graph::{GraphSnapshot, WaypointGraph};
pub use node::Node;
pub use path::Path;
pub use spatial::{SpatialIndex, SpatialMatch};
