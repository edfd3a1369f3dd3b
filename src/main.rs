//! Waypoint Route CLI.
//!
//! Lädt einen Wegpunkt-Graphen aus JSON, sucht per Dijkstra eine grobe Route
//! und gibt die verfeinerte Punktfolge als JSON auf stdout aus.

mod cli;

use anyhow::Context;
use clap::Parser;
use waypoint_route::{load_graph_file, shared::polyline_length, PathFinder, RouteOptions};

use cli::{Args, DijkstraSearch};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Waypoint Route v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let mut options = RouteOptions::load_from_file(&args.options_path());
    args.apply_to(&mut options);

    let graph = load_graph_file(&args.graph)?;
    let search = DijkstraSearch::new(&graph);
    let finder = PathFinder::new(options);
    let request = finder.request(args.from, args.to);

    let points = finder
        .find_path(&graph, &search, &request)
        .with_context(|| format!("keine Route von {} nach {}", args.from, args.to))?;

    log::info!(
        "Route mit {} Punkten, Länge {:.2}",
        points.len(),
        polyline_length(&points)
    );

    let output: Vec<[f32; 3]> = points.iter().map(|p| p.to_array()).collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
