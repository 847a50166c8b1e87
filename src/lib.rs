//! # geo-cell-area
//!
//! Outer and hole boundaries of clusters of geographic lattice cells.
//!
//! Given the centers of hexagonal or rectangular cells laid out on a regular
//! lattice, this library finds the biggest connected cluster and traces its
//! outline: one outer ring plus one ring per enclosed empty region. The result
//! is an [`Area`] that exports to GeoJSON.
//!
//! ## Examples
//!
//! ### Single cluster
//!
//! ```rust
//! use geo_cell_area::{Area, CellParams, CellShape, CenterPoint, GeoPoint};
//!
//! let params = CellParams::new(CellShape::Hex, true, 0.02, 0.02)?;
//! let origin = CenterPoint::new(GeoPoint::new(52.5, 13.4), params);
//!
//! // A center and its six neighbours
//! let mut centers = vec![origin];
//! centers.extend(params.edge_offsets().iter().map(|&(di, dj)| origin.move_by_diff(di, dj)));
//!
//! let area = Area::from_cell_centers(centers)?;
//! assert_eq!(area.points().len(), 19);
//! assert!(area.holes().is_empty());
//!
//! let geometry = area.to_geojson();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Many clusters in parallel
//!
//! Clusters are independent, so [`build_areas_concurrent`] runs one pipeline
//! per cluster on Rayon's thread pool and returns results in input order:
//!
//! ```rust,ignore
//! use geo_cell_area::build_areas_concurrent;
//!
//! let clusters: Vec<Vec<CenterPoint>> = load_clusters();
//! for area in build_areas_concurrent(&clusters) {
//!     println!("{} holes", area?.holes().len());
//! }
//! ```
//!
//! ## Coordinates
//!
//! | Form | Order | Range |
//! |------|-------|-------|
//! | [`GeoPoint`] | `(lat, lng)` degrees | lat in [-90, 90], lng in (-180, 180] |
//! | [`PlainGeoPoint`] | `{lat, lng}` record | same as `GeoPoint` |
//! | GeoJSON position | `[lng, lat]` | same as `GeoPoint` |
//! | [`MercPoint`] | `(x, y)` | unit square, north at `y = 0` |
//!
//! Rings are closed (first point repeated last) and oriented like RFC 7946
//! polygons: outer rings counter-clockwise, holes clockwise.

mod area;
mod cell;
mod center_point;
mod centers_matrix;
mod contour;
mod corrector;
mod error;
mod geo_point;
mod inner_centers_matrix;
mod line;
mod merc_point;
mod outer_centers_matrix;
mod point;

pub use area::{build_area, build_areas_concurrent, Area, AreaRings, DEFAULT_PRECISION};
pub use cell::Cell;
pub use center_point::{CellParams, CellShape, CenterPoint, MAX_CELL_VERTICES};
pub use centers_matrix::{CentersMatrix, MatrixIndex, Slot};
pub use contour::ContourMatrix;
pub use corrector::MercatorCorrector;
pub use error::{AreaError, GeometryError};
pub use geo_point::{GeoPoint, PlainGeoPoint, GEO_EPSILON, MAX_MERCATOR_LAT};
pub use inner_centers_matrix::InnerCentersMatrix;
pub use line::{Line, MercLine};
pub use merc_point::MercPoint;
pub use outer_centers_matrix::OuterCentersMatrix;
pub use point::{PlanarPoint, Point, FORMAT_PRECISION, PLANAR_EPSILON};
