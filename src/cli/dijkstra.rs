//! Kürzeste-Wege-Suche (Dijkstra) über einem `WaypointGraph`.
//!
//! Kantengewicht ist `Path::cost`; Paths ohne Kosten (0) zählen mit ihrer
//! euklidischen Länge. Einbahn-Paths werden nur in Richtung `node_a → node_b`
//! befahren.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use waypoint_route::{RouteSearch, WaypointGraph};

/// Dijkstra-Suche, die den Graphen nur liest.
pub struct DijkstraSearch<'g> {
    graph: &'g WaypointGraph,
}

impl<'g> DijkstraSearch<'g> {
    /// Erstellt eine Suche über dem übergebenen Graphen.
    pub fn new(graph: &'g WaypointGraph) -> Self {
        Self { graph }
    }

    /// Kantengewicht für `from → to`.
    fn edge_cost(&self, from: u64, to: u64, cost: f32) -> Option<f32> {
        if cost > 0.0 {
            return Some(cost);
        }
        let a = self.graph.node(from)?.position;
        let b = self.graph.node(to)?.position;
        Some(a.distance(b))
    }
}

impl RouteSearch for DijkstraSearch<'_> {
    fn find_route(&self, start_id: u64, end_id: u64) -> Option<Vec<u64>> {
        self.graph.node(start_id)?;
        self.graph.node(end_id)?;
        if start_id == end_id {
            return Some(vec![start_id]);
        }

        let mut dist: HashMap<u64, f32> = HashMap::new();
        let mut predecessors: HashMap<u64, u64> = HashMap::new();
        let mut heap = BinaryHeap::new();

        dist.insert(start_id, 0.0);
        heap.push(QueueEntry {
            cost: 0.0,
            node_id: start_id,
        });

        while let Some(QueueEntry { cost, node_id }) = heap.pop() {
            if node_id == end_id {
                break;
            }
            if dist.get(&node_id).is_some_and(|&best| cost > best) {
                continue;
            }

            for path in self.graph.paths_touching(node_id) {
                let Some(neighbor) = path.other_end(node_id) else {
                    continue;
                };
                if !path.allows(node_id, neighbor) {
                    continue;
                }
                let Some(step) = self.edge_cost(node_id, neighbor, path.cost) else {
                    continue;
                };

                let next = cost + step;
                if dist.get(&neighbor).map_or(true, |&best| next < best) {
                    dist.insert(neighbor, next);
                    predecessors.insert(neighbor, node_id);
                    heap.push(QueueEntry {
                        cost: next,
                        node_id: neighbor,
                    });
                }
            }
        }

        if !predecessors.contains_key(&end_id) {
            log::debug!("Node {} von Node {} aus nicht erreichbar", end_id, start_id);
            return None;
        }

        let mut route = vec![end_id];
        let mut current = end_id;
        while current != start_id {
            let &previous = predecessors.get(&current)?;
            route.push(previous);
            current = previous;
        }

        route.reverse();
        Some(route)
    }
}

/// Min-Heap-Eintrag (BinaryHeap ist ein Max-Heap, daher umgekehrte Ordnung).
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    cost: f32,
    node_id: u64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use waypoint_route::{Node, Path};

    /// Quadrat 1-2-3-4 mit Diagonale 1-3.
    fn square(diagonal: Path) -> WaypointGraph {
        WaypointGraph::from_parts(
            vec![
                Node::with_id(1, Vec3::new(0.0, 0.0, 0.0)),
                Node::with_id(2, Vec3::new(10.0, 0.0, 0.0)),
                Node::with_id(3, Vec3::new(10.0, 10.0, 0.0)),
                Node::with_id(4, Vec3::new(0.0, 10.0, 0.0)),
            ],
            vec![
                Path::new(1, 2),
                Path::new(2, 3),
                Path::new(3, 4),
                Path::new(4, 1),
                diagonal,
            ],
        )
        .expect("gültiger Graph")
    }

    #[test]
    fn test_prefers_shorter_diagonal() {
        let graph = square(Path::new(1, 3));
        let search = DijkstraSearch::new(&graph);
        assert_eq!(search.find_route(1, 3), Some(vec![1, 3]));
    }

    #[test]
    fn test_expensive_diagonal_is_avoided() {
        let graph = square(Path::new(1, 3).with_cost(100.0));
        let search = DijkstraSearch::new(&graph);
        let route = search.find_route(1, 3).expect("Route erwartet");
        assert_eq!(route.len(), 3);
        assert_eq!(route.first(), Some(&1));
        assert_eq!(route.last(), Some(&3));
    }

    #[test]
    fn test_one_way_is_only_used_forward() {
        let graph = square(Path::new(3, 1).one_way());
        let search = DijkstraSearch::new(&graph);
        assert_eq!(search.find_route(3, 1), Some(vec![3, 1]));
        assert_eq!(search.find_route(1, 3).map(|r| r.len()), Some(3));
    }

    #[test]
    fn test_unreachable_and_unknown_nodes() {
        let graph = WaypointGraph::from_parts(
            vec![
                Node::with_id(1, Vec3::ZERO),
                Node::with_id(2, Vec3::X),
                Node::with_id(3, Vec3::Y),
            ],
            vec![Path::new(1, 2).one_way()],
        )
        .expect("gültiger Graph");
        let search = DijkstraSearch::new(&graph);

        assert_eq!(search.find_route(2, 1), None);
        assert_eq!(search.find_route(1, 3), None);
        assert_eq!(search.find_route(1, 9), None);
        assert_eq!(search.find_route(2, 2), Some(vec![2]));
    }
}
