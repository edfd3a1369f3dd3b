use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use std::hint::black_box;
use waypoint_route::shared::sample_catmull_rom;
use waypoint_route::{Node, Path, PathFinder, PathLineType, PathRequest, WaypointGraph};

const GRID_WIDTH: usize = 1000;

/// Gitter mit `node_count` Nodes; jede Zeile ist eine durchgehende Kette.
fn build_synthetic_graph(node_count: usize) -> WaypointGraph {
    let nodes: Vec<Node> = (0..node_count)
        .map(|index| {
            let id = (index as u64) + 1;
            let column = (index % GRID_WIDTH) as f32;
            let row = (index / GRID_WIDTH) as f32;
            Node::with_id(id, Vec3::new(column * 5.0, row * 5.0, column * 0.01))
        })
        .collect();

    let paths: Vec<Path> = (1..node_count)
        .filter(|index| index % GRID_WIDTH != 0)
        .map(|index| Path::new(index as u64, index as u64 + 1))
        .collect();

    WaypointGraph::from_parts(nodes, paths).expect("synthetischer Graph muss gültig sein")
}

fn build_query_points(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let x = (i % GRID_WIDTH) as f32 * 5.0 + 1.37;
            let y = ((i * 7) % 100) as f32 * 5.0 + 0.63;
            Vec3::new(x, y, 0.0)
        })
        .collect()
}

fn bench_nearest_node(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_node");

    for &node_count in &[10_000usize, 100_000usize] {
        let graph = build_synthetic_graph(node_count);
        let queries = build_query_points(1024);

        group.bench_with_input(
            BenchmarkId::new("kdtree", node_count),
            &queries,
            |b, queries| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for query in queries {
                        if graph.nearest_node(black_box(*query)).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_find_path(c: &mut Criterion) {
    let graph = build_synthetic_graph(100_000);
    let finder = PathFinder::default();
    // Entlang der ersten Zeile: Route ist die Kette zwischen beiden Nodes
    let search = |start: u64, end: u64| -> Option<Vec<u64>> {
        let (lo, hi) = (start.min(end), start.max(end));
        let mut route: Vec<u64> = (lo..=hi).collect();
        if start > end {
            route.reverse();
        }
        Some(route)
    };

    let mut group = c.benchmark_group("find_path");
    for line_type in [PathLineType::Straight, PathLineType::CatmullRomCurve] {
        let request = PathRequest::new(Vec3::new(-3.0, 1.0, 0.0), Vec3::new(2_000.0, -1.0, 0.0))
            .with_line_type(line_type);
        group.bench_function(format!("{:?}", line_type), |b| {
            b.iter(|| {
                let points = finder
                    .find_path(&graph, &search, black_box(&request))
                    .expect("Pfad erwartet");
                black_box(points.len())
            })
        });
    }
    group.finish();
}

fn bench_catmull_rom_sampling(c: &mut Criterion) {
    let points: Vec<Vec3> = (0..500)
        .map(|i| {
            let t = i as f32 * 0.1;
            Vec3::new(t.cos() * 50.0, t.sin() * 50.0, t)
        })
        .collect();

    c.bench_function("sample_catmull_rom_500", |b| {
        b.iter(|| black_box(sample_catmull_rom(black_box(&points), 20).len()))
    });
}

criterion_group!(
    benches,
    bench_nearest_node,
    bench_find_path,
    bench_catmull_rom_sampling
);
criterion_main!(benches);
