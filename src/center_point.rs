//! Cell centers and the lattice parameters they were generated with
//!
//! Rows grow southward and columns eastward. Hex lattices use axial
//! coordinates so that both orientations share one fixed neighbour table:
//!
//! - horizontal (pointy-top, rows run east-west): the centre of `(i, j)`
//!   is shifted east by `i / 2` column steps
//! - vertical (flat-top, columns run north-south): the centre of `(i, j)`
//!   is shifted south by `j / 2` row steps

use arrayvec::ArrayVec;

use crate::cell::Cell;
use crate::error::GeometryError;
use crate::geo_point::{lng_diff, GeoPoint};

/// Maximum number of vertices of a cell ring
pub const MAX_CELL_VERTICES: usize = 6;

/// How far a center may sit from a lattice node, in lattice steps
const LATTICE_TOLERANCE: f64 = 1e-6;

/// Rect neighbours across edges top, right, bottom, left
const RECT_EDGE_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Rect cells touching by edge or corner
const RECT_TOUCH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Pointy-top neighbours across edges upper-right, right, lower-right,
/// lower-left, left, upper-left
const HEX_HORIZONTAL_EDGE_OFFSETS: [(isize, isize); 6] =
    [(-1, 1), (0, 1), (1, 0), (1, -1), (0, -1), (-1, 0)];

/// Flat-top neighbours across edges top, upper-right, lower-right,
/// bottom, lower-left, upper-left
const HEX_VERTICAL_EDGE_OFFSETS: [(isize, isize); 6] =
    [(-1, 0), (-1, 1), (0, 1), (1, 0), (1, -1), (0, -1)];

/// Shape of the lattice cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellShape {
    Hex,
    Rect,
}

/// Lattice parameters shared by every center of one grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellParams {
    shape: CellShape,
    is_horizontal: bool,
    /// Cell width in degrees of longitude
    width: f64,
    /// Cell height in degrees of latitude
    height: f64,
}

impl CellParams {
    pub fn new(shape: CellShape, is_horizontal: bool, width: f64, height: f64) -> Result<Self, GeometryError> {
        let valid = |size: f64| size.is_finite() && size > 0.0;
        if !valid(width) || !valid(height) {
            return Err(GeometryError::InvalidCellSize { width, height });
        }

        Ok(Self {
            shape,
            is_horizontal,
            width,
            height,
        })
    }

    pub fn shape(&self) -> CellShape {
        self.shape
    }

    pub fn is_horizontal(&self) -> bool {
        self.is_horizontal
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Latitude distance between neighbouring rows
    pub fn row_step(&self) -> f64 {
        match self.shape {
            CellShape::Hex if self.is_horizontal => self.height * 0.75,
            _ => self.height,
        }
    }

    /// Longitude distance between neighbouring columns
    pub fn col_step(&self) -> f64 {
        match self.shape {
            CellShape::Hex if !self.is_horizontal => self.width * 0.75,
            _ => self.width,
        }
    }

    /// Matrix offset of the neighbour across each ring edge.
    ///
    /// Entry `k` faces edge `k` of the ring built by [`CenterPoint::to_cell`].
    pub fn edge_offsets(&self) -> &'static [(isize, isize)] {
        match self.shape {
            CellShape::Rect => &RECT_EDGE_OFFSETS,
            CellShape::Hex if self.is_horizontal => &HEX_HORIZONTAL_EDGE_OFFSETS,
            CellShape::Hex => &HEX_VERTICAL_EDGE_OFFSETS,
        }
    }

    /// Matrix offsets of every cell sharing at least one vertex
    pub fn touch_offsets(&self) -> &'static [(isize, isize)] {
        match self.shape {
            CellShape::Rect => &RECT_TOUCH_OFFSETS,
            CellShape::Hex => self.edge_offsets(),
        }
    }

    /// Vertex offsets `(dlat, dlng)` from the center, clockwise
    fn vertex_offsets(&self) -> ArrayVec<(f64, f64), MAX_CELL_VERTICES> {
        let h = self.height;
        let w = self.width;

        match self.shape {
            CellShape::Rect => [
                (h / 2.0, -w / 2.0),
                (h / 2.0, w / 2.0),
                (-h / 2.0, w / 2.0),
                (-h / 2.0, -w / 2.0),
            ]
            .into_iter()
            .collect(),
            CellShape::Hex if self.is_horizontal => [
                (h / 2.0, 0.0),
                (h / 4.0, w / 2.0),
                (-h / 4.0, w / 2.0),
                (-h / 2.0, 0.0),
                (-h / 4.0, -w / 2.0),
                (h / 4.0, -w / 2.0),
            ]
            .into_iter()
            .collect(),
            CellShape::Hex => [
                (h / 2.0, -w / 4.0),
                (h / 2.0, w / 4.0),
                (0.0, w / 2.0),
                (-h / 2.0, w / 4.0),
                (-h / 2.0, -w / 4.0),
                (0.0, -w / 2.0),
            ]
            .into_iter()
            .collect(),
        }
    }
}

/// A lattice cell center together with the parameters it was generated with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterPoint {
    point: GeoPoint,
    params: CellParams,
}

impl CenterPoint {
    pub fn new(point: GeoPoint, params: CellParams) -> Self {
        Self { point, params }
    }

    pub fn point(&self) -> GeoPoint {
        self.point
    }

    pub fn lat(&self) -> f64 {
        self.point.lat
    }

    pub fn lng(&self) -> f64 {
        self.point.lng
    }

    pub fn params(&self) -> &CellParams {
        &self.params
    }

    pub fn is_northern_to(&self, other: &CenterPoint) -> bool {
        self.point.is_northern_to(&other.point)
    }

    pub fn is_eastern_to(&self, other: &CenterPoint) -> bool {
        self.point.is_eastern_to(&other.point)
    }

    /// The center `di` rows south and `dj` columns east of this one
    pub fn move_by_diff(&self, di: isize, dj: isize) -> CenterPoint {
        let row_step = self.params.row_step();
        let col_step = self.params.col_step();
        let (di, dj) = (di as f64, dj as f64);

        let (dlat, dlng) = match self.params.shape {
            CellShape::Rect => (-di * row_step, dj * col_step),
            CellShape::Hex if self.params.is_horizontal => (-di * row_step, (dj + di / 2.0) * col_step),
            CellShape::Hex => (-(di + dj / 2.0) * row_step, dj * col_step),
        };

        let point = GeoPoint::create_formatted(self.point.lat + dlat, self.point.lng + dlng);

        Self::new(point, self.params)
    }

    /// Lattice steps `(di, dj)` leading from this center to `other`.
    ///
    /// `None` when `other` does not sit on a lattice node.
    pub fn lattice_diff(&self, other: &CenterPoint) -> Option<(isize, isize)> {
        let rows = (self.point.lat - other.point.lat) / self.params.row_step();
        let cols = lng_diff(self.point.lng, other.point.lng) / self.params.col_step();

        let (di, dj) = match self.params.shape {
            CellShape::Rect => (rows, cols),
            CellShape::Hex if self.params.is_horizontal => (rows, cols - rows / 2.0),
            CellShape::Hex => (rows - cols / 2.0, cols),
        };

        let snap = |steps: f64| {
            let rounded = steps.round();
            ((steps - rounded).abs() < LATTICE_TOLERANCE).then_some(rounded as isize)
        };

        Some((snap(di)?, snap(dj)?))
    }

    /// The closed ring of vertices surrounding this center, clockwise
    pub fn to_cell(&self) -> Cell {
        let points = self
            .params
            .vertex_offsets()
            .into_iter()
            .map(|(dlat, dlng)| GeoPoint::create_formatted(self.point.lat + dlat, self.point.lng + dlng))
            .collect();

        Cell::new(*self, points)
    }
}
