//! Verfeinerung einer groben Node-Route an Start und Ende.
//!
//! Der erste und letzte Node der Route werden durch die Projektion des
//! angefragten Punkts auf die erste bzw. letzte Verbindung ersetzt. Landet die
//! Projektion auf einem Segment-Endpunkt, wird zusätzlich der nächste Punkt auf
//! irgendeiner anliegenden Verbindung eingefügt (nicht ersetzt).

use glam::Vec3;

use super::{GraphQuery, Waypoint};
use crate::shared::{closest_point_on_segment, RouteError, SearchAccuracy};

/// Korrigiert grobe Routen gegen einen read-only Graphen.
pub struct RouteRefiner<'g, G: GraphQuery + ?Sized> {
    graph: &'g G,
}

impl<'g, G: GraphQuery + ?Sized> RouteRefiner<'g, G> {
    /// Erstellt einen Refiner für den übergebenen Graphen.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Erzeugt die Wegpunktfolge für `start` → `end` entlang der groben `route`.
    ///
    /// Das Ergebnis beginnt immer mit `start` und endet mit `end` als literale Punkte.
    /// Eine leere Route liefert `NoRouteFound`.
    pub fn refine(
        &self,
        start: Vec3,
        end: Vec3,
        route: &[u64],
        accuracy: SearchAccuracy,
    ) -> Result<Vec<Waypoint>, RouteError> {
        let (Some(&first_id), Some(&last_id)) = (route.first(), route.last()) else {
            return Err(RouteError::NoRouteFound);
        };

        let mut waypoints: Vec<Waypoint> = Vec::with_capacity(route.len() + 4);
        waypoints.extend(route.iter().map(|&id| Waypoint::Node(id)));

        log::debug!("Genauigkeit {:?} gewählt", accuracy);

        if accuracy.refines_endpoints() {
            if waypoints.len() > 1 {
                self.correct_start(&mut waypoints, start, first_id)?;
                self.correct_end(&mut waypoints, end, last_id)?;
            } else {
                log::warn!(
                    "Route mit {} Node kann nicht verfeinert werden",
                    waypoints.len()
                );
            }
        }

        waypoints.insert(0, Waypoint::Literal(start));
        waypoints.push(Waypoint::Literal(end));
        Ok(waypoints)
    }

    /// Ersetzt den ersten Wegpunkt durch die Projektion von `start` auf die erste Verbindung.
    fn correct_start(
        &self,
        waypoints: &mut Vec<Waypoint>,
        start: Vec3,
        first_id: u64,
    ) -> Result<(), RouteError> {
        let seg_a = waypoints[0].resolve(self.graph)?;
        let seg_b = waypoints[1].resolve(self.graph)?;
        let projection = closest_point_on_segment(start, seg_a, seg_b);
        waypoints[0] = Waypoint::Literal(projection.point);

        if projection.at_extremity {
            let better = self.closest_point_on_any_path(first_id, start)?;
            log::debug!(
                "Start liegt außerhalb der ersten Verbindung, füge {} vor Node {} ein",
                better,
                first_id
            );
            waypoints.insert(0, Waypoint::Literal(better));
        }
        Ok(())
    }

    /// Ersetzt den letzten Wegpunkt durch die Projektion von `end` auf die letzte Verbindung.
    ///
    /// Arbeitet auf der bereits startkorrigierten Folge: bei einer 2-Node-Route ist
    /// der vorletzte Eintrag schon die Start-Projektion.
    fn correct_end(
        &self,
        waypoints: &mut Vec<Waypoint>,
        end: Vec3,
        last_id: u64,
    ) -> Result<(), RouteError> {
        let last = waypoints.len() - 1;
        let seg_a = waypoints[last - 1].resolve(self.graph)?;
        let seg_b = waypoints[last].resolve(self.graph)?;
        let projection = closest_point_on_segment(end, seg_a, seg_b);
        waypoints[last] = Waypoint::Literal(projection.point);

        if projection.at_extremity {
            let better = self.closest_point_on_any_path(last_id, end)?;
            log::debug!(
                "Ende liegt außerhalb der letzten Verbindung, füge {} nach Node {} an",
                better,
                last_id
            );
            waypoints.push(Waypoint::Literal(better));
        }
        Ok(())
    }

    /// Nächster Punkt zu `point` auf allen Verbindungen, die an `node_id` anliegen.
    ///
    /// Ausgangswert ist die Node-Position selbst; ein Kandidat gewinnt nur bei
    /// echt kleinerer quadratischer Distanz.
    pub fn closest_point_on_any_path(&self, node_id: u64, point: Vec3) -> Result<Vec3, RouteError> {
        let mut closest = self.graph.node_position(node_id)?;
        let mut closest_dist = closest.distance_squared(point);

        for path in self.graph.paths_incident_to(node_id) {
            let seg_a = self.graph.node_position(path.node_a)?;
            let seg_b = self.graph.node_position(path.node_b)?;
            let candidate = closest_point_on_segment(point, seg_a, seg_b).point;
            let dist = candidate.distance_squared(point);
            if dist < closest_dist {
                closest_dist = dist;
                closest = candidate;
            }
        }

        Ok(closest)
    }
}
