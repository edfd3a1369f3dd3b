//! JSON-Ein-/Ausgabe für Graph-Schnappschüsse.

use anyhow::Context;

use crate::core::{GraphSnapshot, WaypointGraph};

/// Parst einen Graphen aus JSON (`{ "nodes": [...], "paths": [...] }`).
pub fn parse_graph_json(content: &str) -> anyhow::Result<WaypointGraph> {
    let snapshot: GraphSnapshot =
        serde_json::from_str(content).context("Graph-JSON konnte nicht gelesen werden")?;
    let graph = WaypointGraph::from_snapshot(snapshot)?;
    log::info!(
        "Graph geladen: {} Nodes, {} Paths",
        graph.node_count(),
        graph.path_count()
    );
    Ok(graph)
}

/// Serialisiert einen Graphen als formatiertes JSON.
pub fn write_graph_json(graph: &WaypointGraph) -> anyhow::Result<String> {
    let content = serde_json::to_string_pretty(&graph.to_snapshot())?;
    Ok(content)
}

/// Lädt einen Graphen aus einer JSON-Datei.
pub fn load_graph_file(path: &std::path::Path) -> anyhow::Result<WaypointGraph> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Graph-Datei nicht lesbar: {}", path.display()))?;
    parse_graph_json(&content).with_context(|| format!("in Datei {}", path.display()))
}
