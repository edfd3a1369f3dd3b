//! Erzeugt aus einer Wegpunktfolge die konkrete Punktfolge (Gerade oder Catmull-Rom).

use glam::Vec3;

use super::{resolve_waypoints, GraphQuery, Waypoint};
use crate::shared::{sample_catmull_rom, PathLineType, RouteError, CATMULL_ROM_SAMPLES_PER_SEGMENT};

/// Baut Pfad-Geometrie aus Wegpunkten. Reine Funktion der Eingabe.
pub struct PathGeometryBuilder<'g, G: GraphQuery + ?Sized> {
    graph: &'g G,
    samples_per_segment: usize,
}

impl<'g, G: GraphQuery + ?Sized> PathGeometryBuilder<'g, G> {
    /// Erstellt einen Builder mit Standard-Abtastdichte.
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            samples_per_segment: CATMULL_ROM_SAMPLES_PER_SEGMENT,
        }
    }

    /// Setzt die Abtastpunkte pro Catmull-Rom-Segment (mindestens 1).
    pub fn with_samples_per_segment(mut self, samples: usize) -> Self {
        self.samples_per_segment = samples.max(1);
        self
    }

    /// Baut die Geometrie im gewünschten Modus.
    pub fn build(
        &self,
        waypoints: &[Waypoint],
        line_type: PathLineType,
    ) -> Result<Vec<Vec3>, RouteError> {
        match line_type {
            PathLineType::Straight => self.build_straight(waypoints),
            PathLineType::CatmullRomCurve => self.build_catmull_rom(waypoints),
        }
    }

    /// Polyline durch alle aufgelösten Wegpunkte in Eingabereihenfolge.
    pub fn build_straight(&self, waypoints: &[Waypoint]) -> Result<Vec<Vec3>, RouteError> {
        log::debug!("Gerade Linienführung gewählt");
        let points = resolve_waypoints(waypoints, self.graph)?;
        if points.len() < 2 {
            return Err(RouteError::InsufficientWaypoints {
                count: points.len(),
            });
        }
        Ok(points)
    }

    /// Abgetastete Catmull-Rom-Kurve durch alle aufgelösten Wegpunkte.
    ///
    /// Unter 3 Punkten ist keine Kurve möglich; die Punkte werden direkt übernommen.
    pub fn build_catmull_rom(&self, waypoints: &[Waypoint]) -> Result<Vec<Vec3>, RouteError> {
        log::debug!("Catmull-Rom-Linienführung gewählt");
        let points = resolve_waypoints(waypoints, self.graph)?;
        Ok(sample_catmull_rom(&points, self.samples_per_segment))
    }
}
