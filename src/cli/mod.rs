//! Bausteine der Kommandozeilen-Binary.

pub mod args;
pub mod dijkstra;

pub use args::Args;
pub use dijkstra::DijkstraSearch;
