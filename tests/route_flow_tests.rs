//! Integrationstests für den kompletten Ablauf:
//! - Graph aus JSON laden
//! - Grobe Route über eine externe (threaded) Suche
//! - Verfeinerung und Geometrie über `PathFinder`

use glam::Vec3;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{mpsc, Arc};
use std::thread;
use waypoint_route::shared::polyline_length;
use waypoint_route::{
    load_graph_file, parse_graph_json, write_graph_json, PathFinder, PathLineType, PathRequest,
    RouteError, RouteOptions, RouteSearch, RouteTicket, SearchAccuracy, WaypointGraph,
};

fn load_junction() -> WaypointGraph {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("junction_graph.json");
    load_graph_file(&path).expect("Fixture muss ladbar sein")
}

/// BFS über alle befahrbaren Paths (Einbahnen nur vorwärts).
fn bfs_route(graph: &WaypointGraph, start: u64, goal: u64) -> Option<Vec<u64>> {
    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut predecessors: HashMap<u64, u64> = HashMap::new();

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }
        for path in graph.paths_touching(current) {
            let Some(neighbor) = path.other_end(current) else {
                continue;
            };
            if path.allows(current, neighbor) && visited.insert(neighbor) {
                predecessors.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    if !visited.contains(&goal) {
        return None;
    }

    let mut route = vec![goal];
    let mut current = goal;
    while current != start {
        current = *predecessors.get(&current)?;
        route.push(current);
    }
    route.reverse();
    Some(route)
}

/// Suche, die auf einem eigenen Worker-Thread läuft.
struct WorkerSearch {
    graph: Arc<WaypointGraph>,
}

impl RouteSearch for WorkerSearch {
    fn find_route(&self, start_id: u64, end_id: u64) -> Option<Vec<u64>> {
        bfs_route(&self.graph, start_id, end_id)
    }

    fn find_route_deferred(&self, start_id: u64, end_id: u64) -> RouteTicket {
        let (sender, ticket) = RouteTicket::channel();
        let graph = Arc::clone(&self.graph);
        thread::spawn(move || sender.deliver(bfs_route(&graph, start_id, end_id)));
        ticket
    }
}

fn assert_close(actual: Vec3, expected: Vec3) {
    assert!(
        actual.distance(expected) < 1e-4,
        "erwartet {:?}, erhalten {:?}",
        expected,
        actual
    );
}

#[test]
fn test_fixture_loads_with_assigned_ids() {
    let graph = load_junction();
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.path_count(), 4);
    assert_eq!(
        graph.node(5).map(|n| n.position),
        Some(Vec3::new(20.0, -20.0, 0.0))
    );
    assert!(graph.path_between(2, 4).is_some_and(|p| p.one_way));
}

#[test]
fn test_deferred_route_through_junction() {
    let graph = Arc::new(load_junction());
    let search = WorkerSearch {
        graph: Arc::clone(&graph),
    };
    let finder = PathFinder::default();
    let request = PathRequest::new(Vec3::new(2.0, 1.0, 0.0), Vec3::new(21.0, 15.0, 0.0));

    let points = finder
        .find_path_deferred(graph.as_ref(), &search, request)
        .expect("Suche gestartet")
        .complete()
        .expect("Pfad erwartet");

    assert_eq!(points.len(), 5);
    assert_eq!(points[0], request.start);
    assert_close(points[1], Vec3::new(2.0, 0.0, 0.0));
    assert_close(points[2], Vec3::new(20.0, 0.0, 0.0));
    assert_close(points[3], Vec3::new(20.0, 15.0, 0.0));
    assert_eq!(points[4], request.end);
}

#[test]
fn test_one_way_blocks_reverse_route() {
    let graph = load_junction();
    let finder = PathFinder::default();
    let search = |start: u64, end: u64| bfs_route(&graph, start, end);
    let request = PathRequest::new(Vec3::new(21.0, 19.0, 0.0), Vec3::new(1.0, 1.0, 0.0));

    assert_eq!(
        finder.find_path(&graph, &search, &request),
        Err(RouteError::NoRouteFound)
    );
}

#[test]
fn test_callback_curve_keeps_exact_endpoints() {
    let graph = Arc::new(load_junction());
    let search = WorkerSearch {
        graph: Arc::clone(&graph),
    };
    let finder = PathFinder::new(RouteOptions {
        line_type: PathLineType::CatmullRomCurve,
        ..RouteOptions::default()
    });
    let request = finder.request(Vec3::new(-3.0, 2.0, 0.0), Vec3::new(41.0, -1.0, 0.0));
    let (tx, rx) = mpsc::channel();

    finder
        .find_path_with_callback(Arc::clone(&graph), &search, request, move |result| {
            tx.send(result).expect("Empfänger lebt");
        })
        .join()
        .expect("Worker darf nicht paniken");

    let points = rx
        .recv()
        .expect("Callback wurde aufgerufen")
        .expect("Pfad erwartet");
    assert_eq!(points.first(), Some(&request.start));
    assert_eq!(points.last(), Some(&request.end));
    assert!(points.iter().all(|p| p.is_finite()));
    assert!(polyline_length(&points) >= request.start.distance(request.end));
}

#[test]
fn test_modes_change_only_the_endpoints() {
    let graph = load_junction();
    let search = |start: u64, end: u64| bfs_route(&graph, start, end);
    let finder = PathFinder::default();
    let base = PathRequest::new(Vec3::new(-4.0, 0.0, 0.0), Vec3::new(20.0, -25.0, 0.0));

    let fast = finder
        .find_path(&graph, &search, &base.with_accuracy(SearchAccuracy::Fast))
        .expect("Pfad erwartet");
    let accurate = finder
        .find_path(
            &graph,
            &search,
            &base.with_accuracy(SearchAccuracy::Accurate),
        )
        .expect("Pfad erwartet");

    // Fast: Start, 1, 2, 5, Ende
    assert_eq!(fast.len(), 5);
    assert_eq!(fast[1], Vec3::ZERO);
    // Accurate: beide Enden liegen außerhalb ihrer Verbindung → je ein Zusatzpunkt
    assert_eq!(accurate.len(), 7);
    assert_eq!(accurate.first(), fast.first());
    assert_eq!(accurate.last(), fast.last());
}

#[test]
fn test_json_roundtrip_yields_same_route() {
    let graph = load_junction();
    let json = write_graph_json(&graph).expect("Serialisierung");
    let reparsed = parse_graph_json(&json).expect("gültiges JSON");
    let finder = PathFinder::default();
    let request = PathRequest::new(Vec3::new(5.0, 3.0, 0.0), Vec3::new(38.0, 2.0, 0.0));

    let search_original = |a: u64, b: u64| bfs_route(&graph, a, b);
    let search_restored = |a: u64, b: u64| bfs_route(&reparsed, a, b);

    let original = finder.find_path(&graph, &search_original, &request);
    let restored = finder.find_path(&reparsed, &search_restored, &request);
    assert!(original.is_ok());
    assert_eq!(original, restored);
}
