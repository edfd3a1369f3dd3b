//! Zentrale Konfiguration für Routen-Abfragen.
//!
//! `RouteOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Geometrie ───────────────────────────────────────────────────────

/// Abtastpunkte pro Catmull-Rom-Segment (entspricht Schrittweite 0.05).
pub const CATMULL_ROM_SAMPLES_PER_SEGMENT: usize = 20;

// ── Abfrage-Modi ────────────────────────────────────────────────────

/// Art der erzeugten Pfad-Geometrie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathLineType {
    /// Polyline durch alle Wegpunkte
    #[default]
    Straight,
    /// Abgetastete Catmull-Rom-Kurve durch alle Wegpunkte
    CatmullRomCurve,
}

/// Genauigkeitsstufe der Endpunkt-Verfeinerung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAccuracy {
    /// Direkt über die unveränderten Graph-Nodes
    Fast,
    /// Start/Ende auf die nächste Verbindung projizieren (inkl. Fallback-Suche)
    #[default]
    Accurate,
    /// Reserviert für weitere Verfeinerungsschritte; verhält sich derzeit wie `Accurate`
    Maximal,
}

impl SearchAccuracy {
    /// Prüft ob Start/Ende auf Verbindungen projiziert werden.
    pub fn refines_endpoints(self) -> bool {
        matches!(self, Self::Accurate | Self::Maximal)
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Routen-Optionen.
/// Wird als `waypoint_route.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    /// Standard-Geometrie für neue Abfragen
    #[serde(default)]
    pub line_type: PathLineType,
    /// Standard-Genauigkeit für neue Abfragen
    #[serde(default)]
    pub accuracy: SearchAccuracy,
    /// Abtastpunkte pro Catmull-Rom-Segment (mindestens 1)
    #[serde(default = "default_samples_per_segment")]
    pub catmull_rom_samples_per_segment: usize,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            line_type: PathLineType::default(),
            accuracy: SearchAccuracy::default(),
            catmull_rom_samples_per_segment: CATMULL_ROM_SAMPLES_PER_SEGMENT,
        }
    }
}

/// Serde-Default für `catmull_rom_samples_per_segment` (Abwärtskompatibilität).
fn default_samples_per_segment() -> usize {
    CATMULL_ROM_SAMPLES_PER_SEGMENT
}

impl RouteOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("waypoint-route"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("waypoint_route.toml")
    }

    /// Effektive Abtastdichte (nie 0).
    pub fn samples_per_segment(&self) -> usize {
        self.catmull_rom_samples_per_segment.max(1)
    }
}
