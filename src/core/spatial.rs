//! Spatial-Index (KD-Tree) für schnelle Node-Abfragen.

use glam::Vec3;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};
use std::collections::HashSet;

use crate::core::Node;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Nodes
    pub node_id: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen Nodes eines Graphen.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 3>,
    node_ids: Vec<u64>,
}

fn to_query(point: Vec3) -> [f64; 3] {
    [point.x as f64, point.y as f64, point.z as f64]
}

/// Bitmuster einer Position; `-0.0` und `0.0` gelten als gleich.
fn point_key(point: [f64; 3]) -> [u64; 3] {
    point.map(|c| (c + 0.0).to_bits())
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 3]>::new()).into(),
            node_ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Nodes.
    ///
    /// Deckungsgleiche Positionen werden zu einem Eintrag zusammengefasst, der
    /// die kleinste ID behält (der KD-Tree fasst höchstens 32 identische Punkte
    /// pro Bucket).
    pub fn from_nodes(nodes: &IndexMap<u64, Node>) -> Self {
        let mut sorted_ids: Vec<u64> = nodes.keys().copied().collect();
        sorted_ids.sort_unstable();

        let mut seen: HashSet<[u64; 3]> = HashSet::with_capacity(sorted_ids.len());
        let mut node_ids = Vec::with_capacity(sorted_ids.len());
        let mut entries: Vec<[f64; 3]> = Vec::with_capacity(sorted_ids.len());

        for id in sorted_ids {
            let Some(node) = nodes.get(&id) else {
                continue;
            };
            let point = to_query(node.position);
            if seen.insert(point_key(point)) {
                node_ids.push(id);
                entries.push(point);
            }
        }

        let tree: KdTree<f64, 3> = (&entries).into();

        Self { tree, node_ids }
    }

    /// Gibt `true` zurück, wenn keine Nodes im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// Findet den nächsten Node zur gegebenen Weltposition.
    pub fn nearest(&self, query: Vec3) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&to_query(query));
        let node_id = *self.node_ids.get(result.item as usize)?;

        Some(SpatialMatch {
            node_id,
            distance: (result.distance as f32).sqrt(),
        })
    }
}
