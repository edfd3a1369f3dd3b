//! Lese-Schnittstelle zum Graph-Store, wie sie Verfeinerung und Geometrie brauchen.

use glam::Vec3;

use crate::core::{Path, WaypointGraph};
use crate::shared::RouteError;

/// Read-only Abfragen gegen einen Wegpunkt-Graphen.
///
/// Implementierungen dürfen den Graphen während einer Abfrage nicht verändern.
pub trait GraphQuery {
    /// ID des nächstgelegenen Nodes, `None` bei leerem Graphen.
    fn nearest_node(&self, point: Vec3) -> Option<u64>;

    /// Alle Paths, an denen `node_id` Endpunkt ist (unabhängig von der Richtung).
    fn paths_incident_to(&self, node_id: u64) -> Vec<Path>;

    /// Position eines Nodes; unbekannte IDs liefern `DegenerateGraph`.
    fn node_position(&self, node_id: u64) -> Result<Vec3, RouteError>;
}

impl GraphQuery for WaypointGraph {
    fn nearest_node(&self, point: Vec3) -> Option<u64> {
        WaypointGraph::nearest_node(self, point).map(|m| m.node_id)
    }

    fn paths_incident_to(&self, node_id: u64) -> Vec<Path> {
        self.paths_touching(node_id).copied().collect()
    }

    fn node_position(&self, node_id: u64) -> Result<Vec3, RouteError> {
        self.node(node_id)
            .map(|n| n.position)
            .ok_or_else(|| RouteError::unknown_node(node_id))
    }
}
