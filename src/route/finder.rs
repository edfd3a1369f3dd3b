//! Einstiegspunkt für Routen-Abfragen zwischen zwei Weltpunkten.
//!
//! Ablauf: Nearest-Node für Start und Ende → externe Suche → Verfeinerung →
//! Geometrie. Die Suche kann synchron laufen oder über ein [`RouteTicket`]
//! später eintreffen; Verfeinerung und Geometrie laufen dann auf dem Thread,
//! der das Ergebnis abholt.

use std::sync::Arc;
use std::thread;

use glam::Vec3;

use super::{GraphQuery, PathGeometryBuilder, RouteRefiner, RouteSearch, RouteTicket, Waypoint};
use crate::shared::{PathLineType, RouteError, RouteOptions, SearchAccuracy};

/// Eine Abfrage von `start` nach `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathRequest {
    /// Angefragter Startpunkt (wird immer exakt erreicht)
    pub start: Vec3,
    /// Angefragter Zielpunkt (wird immer exakt erreicht)
    pub end: Vec3,
    /// Gewünschte Geometrie
    pub line_type: PathLineType,
    /// Gewünschte Genauigkeit der Endpunkt-Verfeinerung
    pub accuracy: SearchAccuracy,
}

impl PathRequest {
    /// Erstellt eine Abfrage mit Standard-Modi.
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self {
            start,
            end,
            line_type: PathLineType::default(),
            accuracy: SearchAccuracy::default(),
        }
    }

    /// Erstellt eine Abfrage mit den Modi aus den Optionen.
    pub fn from_options(start: Vec3, end: Vec3, options: &RouteOptions) -> Self {
        Self {
            start,
            end,
            line_type: options.line_type,
            accuracy: options.accuracy,
        }
    }

    /// Setzt die Geometrie.
    pub fn with_line_type(mut self, line_type: PathLineType) -> Self {
        self.line_type = line_type;
        self
    }

    /// Setzt die Genauigkeit.
    pub fn with_accuracy(mut self, accuracy: SearchAccuracy) -> Self {
        self.accuracy = accuracy;
        self
    }
}

/// Fassade über Verfeinerung und Geometrie. Hält keinen Zustand zwischen Abfragen.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    options: RouteOptions,
}

impl PathFinder {
    /// Erstellt einen PathFinder mit den übergebenen Optionen.
    pub fn new(options: RouteOptions) -> Self {
        Self { options }
    }

    /// Aktive Optionen.
    pub fn options(&self) -> &RouteOptions {
        &self.options
    }

    /// Erstellt eine Abfrage mit den Standard-Modi dieses PathFinders.
    pub fn request(&self, start: Vec3, end: Vec3) -> PathRequest {
        PathRequest::from_options(start, end, &self.options)
    }

    /// Sucht synchron und liefert die fertige Punktfolge.
    pub fn find_path<G, S>(
        &self,
        graph: &G,
        search: &S,
        request: &PathRequest,
    ) -> Result<Vec<Vec3>, RouteError>
    where
        G: GraphQuery + ?Sized,
        S: RouteSearch + ?Sized,
    {
        let (start_id, end_id) = self.resolve_endpoints(graph, request)?;
        let route = search.find_route(start_id, end_id);
        self.complete_route(graph, request, route)
    }

    /// Startet die Suche und gibt ein Handle zurück, das später abgeschlossen wird.
    ///
    /// Schlägt bereits die Nearest-Node-Auflösung fehl, wird keine Suche gestartet.
    pub fn find_path_deferred<'g, G, S>(
        &self,
        graph: &'g G,
        search: &S,
        request: PathRequest,
    ) -> Result<PendingPath<'g, G>, RouteError>
    where
        G: GraphQuery + ?Sized,
        S: RouteSearch + ?Sized,
    {
        let (start_id, end_id) = self.resolve_endpoints(graph, &request)?;
        Ok(PendingPath {
            finder: self.clone(),
            graph,
            request,
            ticket: search.find_route_deferred(start_id, end_id),
        })
    }

    /// Startet die Suche und ruft `completion` mit dem Ergebnis auf.
    ///
    /// Das Warten auf die Suche sowie Verfeinerung und Geometrie laufen auf einem
    /// eigenen Thread; dort wird auch `completion` aufgerufen (auch im Fehlerfall).
    pub fn find_path_with_callback<G, S, F>(
        &self,
        graph: Arc<G>,
        search: &S,
        request: PathRequest,
        completion: F,
    ) -> thread::JoinHandle<()>
    where
        G: GraphQuery + Send + Sync + 'static,
        S: RouteSearch + ?Sized,
        F: FnOnce(Result<Vec<Vec3>, RouteError>) + Send + 'static,
    {
        let ticket = self
            .resolve_endpoints(graph.as_ref(), &request)
            .map(|(start_id, end_id)| search.find_route_deferred(start_id, end_id));
        let finder = self.clone();

        thread::spawn(move || {
            let result = ticket
                .and_then(|ticket| finder.complete_route(graph.as_ref(), &request, ticket.wait()));
            if let Err(e) = &result {
                log::error!("Pfad konnte nicht erstellt werden: {}", e);
            }
            completion(result);
        })
    }

    /// Pfad zwischen zwei bekannten Nodes, ohne Endpunkt-Verfeinerung.
    pub fn find_path_between_nodes<G, S>(
        &self,
        graph: &G,
        search: &S,
        start_id: u64,
        end_id: u64,
        line_type: PathLineType,
    ) -> Result<Vec<Vec3>, RouteError>
    where
        G: GraphQuery + ?Sized,
        S: RouteSearch + ?Sized,
    {
        graph.node_position(start_id)?;
        graph.node_position(end_id)?;

        let route = match search.find_route(start_id, end_id) {
            Some(route) if !route.is_empty() => route,
            _ => {
                log::error!(
                    "Kein Pfad zwischen Node {} und Node {} gefunden",
                    start_id,
                    end_id
                );
                return Err(RouteError::NoRouteFound);
            }
        };

        let waypoints: Vec<Waypoint> = route.into_iter().map(Waypoint::Node).collect();
        self.builder(graph).build(&waypoints, line_type)
    }

    /// Verfeinert eine eingetroffene Route und baut die Geometrie.
    pub fn complete_route<G>(
        &self,
        graph: &G,
        request: &PathRequest,
        route: Option<Vec<u64>>,
    ) -> Result<Vec<Vec3>, RouteError>
    where
        G: GraphQuery + ?Sized,
    {
        let route = route.filter(|r| !r.is_empty()).ok_or_else(|| {
            log::error!(
                "Suche lieferte keine Route von {} nach {}",
                request.start,
                request.end
            );
            RouteError::NoRouteFound
        })?;

        log::info!(
            "Route mit {} Nodes, Genauigkeit {:?}, Linienführung {:?}",
            route.len(),
            request.accuracy,
            request.line_type
        );

        let waypoints = RouteRefiner::new(graph).refine(
            request.start,
            request.end,
            &route,
            request.accuracy,
        )?;
        self.builder(graph).build(&waypoints, request.line_type)
    }

    fn builder<'g, G: GraphQuery + ?Sized>(&self, graph: &'g G) -> PathGeometryBuilder<'g, G> {
        PathGeometryBuilder::new(graph).with_samples_per_segment(self.options.samples_per_segment())
    }

    /// Nearest-Node für Start; das Ende wird nur aufgelöst, wenn der Start gefunden wurde.
    fn resolve_endpoints<G: GraphQuery + ?Sized>(
        &self,
        graph: &G,
        request: &PathRequest,
    ) -> Result<(u64, u64), RouteError> {
        let start_id = graph.nearest_node(request.start).ok_or_else(|| {
            log::error!("Kein Node in der Nähe des Starts {}", request.start);
            RouteError::NoNodeNearPoint {
                point: request.start,
            }
        })?;
        log::info!("Nächster Node zum Start {} ist {}", request.start, start_id);

        let end_id = graph.nearest_node(request.end).ok_or_else(|| {
            log::error!("Kein Node in der Nähe des Ziels {}", request.end);
            RouteError::NoNodeNearPoint { point: request.end }
        })?;
        log::info!("Nächster Node zum Ziel {} ist {}", request.end, end_id);

        Ok((start_id, end_id))
    }
}

/// Laufende Abfrage, deren Suche noch nicht (sicher) abgeschlossen ist.
pub struct PendingPath<'g, G: GraphQuery + ?Sized> {
    finder: PathFinder,
    graph: &'g G,
    request: PathRequest,
    ticket: RouteTicket,
}

impl<'g, G: GraphQuery + ?Sized> PendingPath<'g, G> {
    /// Prüft ohne zu blockieren, ob die Suche fertig ist.
    pub fn is_ready(&mut self) -> bool {
        self.ticket.is_ready()
    }

    /// Wartet auf die Suche und liefert die fertige Punktfolge.
    pub fn complete(self) -> Result<Vec<Vec3>, RouteError> {
        let route = self.ticket.wait();
        self.finder.complete_route(self.graph, &self.request, route)
    }
}
