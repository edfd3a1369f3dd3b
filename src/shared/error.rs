//! Typisierte Fehler der Routen-Verfeinerung und Pfad-Geometrie.

use glam::Vec3;
use thiserror::Error;

/// Fehlerarten, die ein Aufrufer behandeln kann (neu versuchen, direkt laufen, melden).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Nearest-Node-Abfrage lief gegen einen leeren Graphen
    #[error("kein Node in der Nähe von {point}")]
    NoNodeNearPoint {
        /// Angefragter Weltpunkt
        point: Vec3,
    },

    /// Die Suche lieferte keine Route (z.B. getrennte Teilgraphen)
    #[error("keine Route gefunden")]
    NoRouteFound,

    /// Graph ist inkonsistent oder eine referenzierte ID existiert nicht
    #[error("ungültiger Graph: {0}")]
    DegenerateGraph(String),

    /// Nach der Verfeinerung bleiben weniger als 2 Punkte
    #[error("zu wenige Wegpunkte für eine Geometrie: {count}")]
    InsufficientWaypoints {
        /// Anzahl aufgelöster Punkte
        count: usize,
    },
}

impl RouteError {
    /// Kurzform für eine unbekannte Node-ID.
    pub fn unknown_node(node_id: u64) -> Self {
        Self::DegenerateGraph(format!("Node {} existiert nicht", node_id))
    }
}
