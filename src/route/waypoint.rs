//! Wegpunkt-Referenz: entweder Graph-Node oder literaler Weltpunkt.

use glam::Vec3;

use super::GraphQuery;
use crate::shared::RouteError;

/// Element einer Wegpunktfolge. Nodes werden erst beim Geometrie-Aufbau aufgelöst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waypoint {
    /// Verweis auf einen Graph-Node
    Node(u64),
    /// Konkreter Weltpunkt (Endpunkte, projizierte Punkte)
    Literal(Vec3),
}

impl Waypoint {
    /// Löst den Wegpunkt zu einer Position auf.
    pub fn resolve<G: GraphQuery + ?Sized>(&self, graph: &G) -> Result<Vec3, RouteError> {
        match *self {
            Waypoint::Node(id) => graph.node_position(id),
            Waypoint::Literal(point) => Ok(point),
        }
    }
}

/// Löst eine komplette Wegpunktfolge in Reihenfolge auf.
pub fn resolve_waypoints<G: GraphQuery + ?Sized>(
    waypoints: &[Waypoint],
    graph: &G,
) -> Result<Vec<Vec3>, RouteError> {
    waypoints.iter().map(|w| w.resolve(graph)).collect()
}
