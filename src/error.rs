//! Error types for line algebra and area building

use thiserror::Error;

/// Precondition violations in the point and line algebra.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Both `a` and `b` coefficients of a line are zero
    #[error("line {a}x + {b}y = {c} has no direction (a and b are both zero)")]
    DegenerateLine { a: f64, b: f64, c: f64 },

    /// A line was requested through two coincident points
    #[error("cannot build a line through coincident points ({x}, {y})")]
    CoincidentPoints { x: f64, y: f64 },

    /// Cell width or height is not a positive finite number
    #[error("invalid cell size {width}x{height} (must be positive and finite)")]
    InvalidCellSize { width: f64, height: f64 },
}

/// Failures while indexing centers or tracing area boundaries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AreaError {
    /// Centers were generated with different lattice parameters
    #[error("centers carry different lattice parameters")]
    MixedCellParams,

    /// A center does not sit on the lattice spanned by the first center
    #[error("center ({lat}, {lng}) does not lie on the lattice")]
    NotOnLattice { lat: f64, lng: f64 },

    /// Two centers snapped onto the same matrix cell
    #[error("more than one center maps to matrix cell ({row}, {col})")]
    DuplicateCenter { row: usize, col: usize },

    /// The matrix holds no filled cell to trace around
    #[error("matrix has no filled cells")]
    EmptyMatrix,

    /// The boundary walk could not continue from a matrix cell
    #[error("boundary walk broke at matrix cell ({row}, {col})")]
    BrokenContour { row: usize, col: usize },

    /// The boundary walk did not return to its start
    #[error("boundary walk did not close after {steps} steps")]
    UnclosedContour { steps: usize },

    /// A GeoJSON value is not a usable point
    #[error("invalid GeoJSON point: {0}")]
    InvalidGeoJson(String),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
