//! Waypoint Route Library.
//! Verfeinert grobe Node-Routen eines Wegpunkt-Graphen und erzeugt daraus
//! Punktfolgen (Gerade oder Catmull-Rom) für beliebige Bewegungs-Controller.

pub mod core;
pub mod io;
pub mod route;
pub mod shared;

pub use core::{GraphSnapshot, Node, Path, SpatialIndex, SpatialMatch, WaypointGraph};
pub use io::{load_graph_file, parse_graph_json, write_graph_json};
pub use route::{
    GraphQuery, PathFinder, PathGeometryBuilder, PathRequest, PendingPath, RouteRefiner,
    RouteSearch, RouteSender, RouteTicket, Waypoint,
};
pub use shared::{PathLineType, RouteError, RouteOptions, SearchAccuracy};
