//! Repräsentiert eine Verbindung ("Path") zwischen zwei Wegpunkten.

use serde::{Deserialize, Serialize};

/// Eine Verbindung zwischen zwei Wegpunkten
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// Stabile ID (0 = wird beim Einfügen vergeben)
    #[serde(default)]
    pub id: u64,
    /// Node-ID des Endpunkts A
    pub node_a: u64,
    /// Node-ID des Endpunkts B
    pub node_b: u64,
    /// Traversierungskosten (>= 0)
    #[serde(default)]
    pub cost: f32,
    /// Einbahn: nur A → B befahrbar
    #[serde(default)]
    pub one_way: bool,
}

impl Path {
    /// Erstellt eine ungerichtete Verbindung ohne Kosten.
    pub fn new(node_a: u64, node_b: u64) -> Self {
        Self {
            id: 0,
            node_a,
            node_b,
            cost: 0.0,
            one_way: false,
        }
    }

    /// Setzt die Traversierungskosten (negative Werte werden auf 0 geklemmt).
    pub fn with_cost(mut self, cost: f32) -> Self {
        self.cost = cost.max(0.0);
        self
    }

    /// Markiert die Verbindung als Einbahn (A → B).
    pub fn one_way(mut self) -> Self {
        self.one_way = true;
        self
    }

    /// Prüft ob `node_id` einer der beiden Endpunkte ist.
    pub fn touches(&self, node_id: u64) -> bool {
        self.node_a == node_id || self.node_b == node_id
    }

    /// Liefert den gegenüberliegenden Endpunkt, falls `node_id` ein Endpunkt ist.
    pub fn other_end(&self, node_id: u64) -> Option<u64> {
        if self.node_a == node_id {
            Some(self.node_b)
        } else if self.node_b == node_id {
            Some(self.node_a)
        } else {
            None
        }
    }

    /// Prüft ob die Verbindung in Richtung `from` → `to` befahren werden darf.
    pub fn allows(&self, from: u64, to: u64) -> bool {
        if self.node_a == from && self.node_b == to {
            return true;
        }
        !self.one_way && self.node_b == from && self.node_a == to
    }

    /// Prüft ob die Verbindung dasselbe ungeordnete Node-Paar verbindet.
    pub fn connects(&self, a: u64, b: u64) -> bool {
        (self.node_a == a && self.node_b == b) || (self.node_a == b && self.node_b == a)
    }
}
