//! Geteilte, layer-neutrale Bausteine.
//!
//! Enthält Geometrie-Primitive, Optionen und Fehlertypen, die von `core`
//! und `route` gemeinsam genutzt werden.

mod error;
pub mod options;
pub mod segment_geometry;
pub mod spline_geometry;

pub use error::RouteError;
pub use options::{PathLineType, RouteOptions, SearchAccuracy, CATMULL_ROM_SAMPLES_PER_SEGMENT};
pub use segment_geometry::{closest_point_on_segment, SegmentProjection};
pub use spline_geometry::{
    catmull_rom_point, padded_control_points, polyline_length, sample_catmull_rom,
};
