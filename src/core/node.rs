//! Einzelner Wegpunkt des Graphen.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ein Wegpunkt mit stabiler ID und Weltposition.
///
/// Die ID `0` bedeutet "noch nicht vergeben"; der Graph vergibt beim
/// Einfügen bzw. beim Reindex die nächste freie ID.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stabile ID (0 = wird beim Einfügen vergeben)
    #[serde(default)]
    pub id: u64,
    /// Position in Weltkoordinaten
    pub position: Vec3,
}

impl Node {
    /// Erstellt einen Node ohne vergebene ID.
    pub fn new(position: Vec3) -> Self {
        Self { id: 0, position }
    }

    /// Erstellt einen Node mit fester ID.
    pub fn with_id(id: u64, position: Vec3) -> Self {
        Self { id, position }
    }

    /// Prüft ob bereits eine gültige ID vergeben wurde.
    pub fn has_id(&self) -> bool {
        self.id > 0
    }
}
