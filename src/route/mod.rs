//! Routen-Verfeinerung und Pfad-Geometrie.
//!
//! - `RouteRefiner`: korrigiert Start/Ende einer groben Node-Route
//! - `PathGeometryBuilder`: erzeugt Gerade oder Catmull-Rom-Kurve
//! - `PathFinder`: verbindet Nearest-Node, externe Suche, Verfeinerung und Geometrie

mod builder;
mod finder;
mod query;
mod refiner;
mod search;
mod waypoint;


pub use builder::PathGeometryBuilder;
pub use finder::{PathFinder, PathRequest, PendingPath};
pub use query::GraphQuery;
pub use refiner::RouteRefiner;
pub use search::{RouteSearch, RouteSender, RouteTicket};
pub use waypoint::{resolve_waypoints, Waypoint};
