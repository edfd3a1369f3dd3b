//! Der zentrale Wegpunkt-Graph mit Nodes, Paths, Inzidenz-Tabelle und Spatial-Index.

use super::{Node, Path};
use super::{SpatialIndex, SpatialMatch};
use crate::shared::RouteError;
use glam::Vec3;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serialisierbarer Schnappschuss eines Graphen (Node- und Path-Listen).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Alle Wegpunkte in Authoring-Reihenfolge
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Alle Verbindungen in Authoring-Reihenfolge
    #[serde(default)]
    pub paths: Vec<Path>,
}

/// Arena aller Nodes und Paths, indexiert über stabile IDs.
///
/// Jede Mutation baut den Index (Inzidenz + KD-Tree) neu auf.
/// Verfeinerung und Geometrie lesen ausschließlich.
#[derive(Debug, Clone)]
pub struct WaypointGraph {
    /// Alle Wegpunkte, indexiert nach ihrer ID (Einfüge-Reihenfolge)
    nodes: IndexMap<u64, Node>,
    /// Alle Verbindungen, indexiert nach ihrer ID (Einfüge-Reihenfolge)
    paths: IndexMap<u64, Path>,
    /// Node-ID → IDs aller anliegenden Paths
    incidence: HashMap<u64, Vec<u64>>,
    /// Persistenter Spatial-Index fuer Nearest-Node-Abfragen
    spatial_index: SpatialIndex,
}

impl WaypointGraph {
    /// Erstellt einen leeren Graphen
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            paths: IndexMap::new(),
            incidence: HashMap::new(),
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Baut einen Graphen aus Listen auf.
    ///
    /// Nodes und Paths ohne ID erhalten in Listenreihenfolge `max_id + 1`, `max_id + 2`, ...
    /// Doppelte IDs und Paths mit unbekannten Endpunkten werden abgelehnt.
    pub fn from_parts(nodes: Vec<Node>, paths: Vec<Path>) -> Result<Self, RouteError> {
        let mut graph = Self::new();

        let mut next_node_id = nodes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        for mut node in nodes {
            if !node.has_id() {
                node.id = next_node_id;
                next_node_id += 1;
            }
            if graph.nodes.insert(node.id, node).is_some() {
                return Err(RouteError::DegenerateGraph(format!(
                    "doppelte Node-ID {}",
                    node.id
                )));
            }
        }

        let mut next_path_id = paths.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        for mut path in paths {
            if path.id == 0 {
                path.id = next_path_id;
                next_path_id += 1;
            }
            graph.check_endpoints(&path)?;
            clamp_cost(&mut path);
            if graph.paths.insert(path.id, path).is_some() {
                return Err(RouteError::DegenerateGraph(format!(
                    "doppelte Path-ID {}",
                    path.id
                )));
            }
        }

        graph.reindex();
        log::debug!(
            "Graph aufgebaut: {} Nodes, {} Paths",
            graph.node_count(),
            graph.path_count()
        );
        Ok(graph)
    }

    /// Baut einen Graphen aus einem Schnappschuss auf.
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Result<Self, RouteError> {
        Self::from_parts(snapshot.nodes, snapshot.paths)
    }

    /// Erzeugt einen Schnappschuss in Einfüge-Reihenfolge.
    pub fn to_snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.values().copied().collect(),
            paths: self.paths.values().copied().collect(),
        }
    }

    /// Fügt einen Node hinzu und gibt seine (ggf. neu vergebene) ID zurück
    pub fn add_node(&mut self, mut node: Node) -> Result<u64, RouteError> {
        if !node.has_id() {
            node.id = self.next_node_id();
        } else if self.nodes.contains_key(&node.id) {
            return Err(RouteError::DegenerateGraph(format!(
                "doppelte Node-ID {}",
                node.id
            )));
        }
        let id = node.id;
        self.nodes.insert(id, node);
        self.reindex();
        Ok(id)
    }

    /// Fügt eine Verbindung hinzu und gibt ihre (ggf. neu vergebene) ID zurück
    pub fn add_path(&mut self, mut path: Path) -> Result<u64, RouteError> {
        self.check_endpoints(&path)?;
        clamp_cost(&mut path);
        if path.id == 0 {
            path.id = self.next_path_id();
        } else if self.paths.contains_key(&path.id) {
            return Err(RouteError::DegenerateGraph(format!(
                "doppelte Path-ID {}",
                path.id
            )));
        }
        let id = path.id;
        self.paths.insert(id, path);
        self.reindex();
        Ok(id)
    }

    /// Entfernt einen Node inklusive aller anliegenden Paths
    pub fn remove_node(&mut self, node_id: u64) -> Option<Node> {
        let removed = self.nodes.shift_remove(&node_id);
        if removed.is_some() {
            self.paths.retain(|_, p| !p.touches(node_id));
            self.reindex();
        }
        removed
    }

    /// Baut Inzidenz-Tabelle und Spatial-Index aus dem aktuellen Stand neu auf.
    pub fn reindex(&mut self) {
        self.incidence.clear();
        for path in self.paths.values() {
            self.incidence.entry(path.node_a).or_default().push(path.id);
            if path.node_b != path.node_a {
                self.incidence.entry(path.node_b).or_default().push(path.id);
            }
        }
        self.spatial_index = SpatialIndex::from_nodes(&self.nodes);
    }

    /// Berechnet die nächste freie Node-ID
    pub fn next_node_id(&self) -> u64 {
        self.nodes.keys().max().copied().unwrap_or(0) + 1
    }

    /// Berechnet die nächste freie Path-ID
    pub fn next_path_id(&self) -> u64 {
        self.paths.keys().max().copied().unwrap_or(0) + 1
    }

    /// Findet einen Node über seine ID
    pub fn node(&self, node_id: u64) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Findet einen Path über seine ID
    pub fn path(&self, path_id: u64) -> Option<&Path> {
        self.paths.get(&path_id)
    }

    /// Findet die Verbindung zwischen zwei Nodes (unabhängig von der Orientierung)
    pub fn path_between(&self, node_a: u64, node_b: u64) -> Option<&Path> {
        self.incidence
            .get(&node_a)?
            .iter()
            .filter_map(|id| self.paths.get(id))
            .find(|p| p.connects(node_a, node_b))
    }

    /// Alle Paths, die an `node_id` anliegen (Richtung egal), in Einfüge-Reihenfolge
    pub fn paths_touching(&self, node_id: u64) -> impl Iterator<Item = &Path> {
        self.incidence
            .get(&node_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.paths.get(id))
    }

    /// Iterator über alle Nodes (read-only).
    pub fn nodes_iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterator über alle Paths (read-only).
    pub fn paths_iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.values()
    }

    /// Gibt die Anzahl der Nodes zurück
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt die Anzahl der Paths zurück
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Findet den nächstgelegenen Node zur Weltposition.
    pub fn nearest_node(&self, query: Vec3) -> Option<SpatialMatch> {
        self.spatial_index.nearest(query)
    }

    fn check_endpoints(&self, path: &Path) -> Result<(), RouteError> {
        for id in [path.node_a, path.node_b] {
            if !self.nodes.contains_key(&id) {
                return Err(RouteError::DegenerateGraph(format!(
                    "Path {} verweist auf unbekannten Node {}",
                    path.id, id
                )));
            }
        }
        Ok(())
    }
}

/// Kosten sind nie negativ; negative oder NaN-Werte werden zu 0.
fn clamp_cost(path: &mut Path) {
    if path.cost.is_nan() || path.cost < 0.0 {
        log::warn!(
            "Path {} hat ungültige Kosten {}, verwende 0",
            path.id,
            path.cost
        );
        path.cost = 0.0;
    }
}

impl Default for WaypointGraph {
    fn default() -> Self {
        Self::new()
    }
}
