//! Boundary walk shared by outer and hole tracing
//!
//! A boundary edge is a ring edge of a filled cell whose neighbour across
//! that edge is a traced empty cell. The walk follows filled cells' rings
//! (clockwise, so the filled side stays on the right). At the end of every
//! edge it turns around the end vertex through the traced empty cells that
//! share it, and continues along the first filled cell it meets. It never
//! crosses a filled cell, so a vertex where two empty regions meet corner
//! to corner is passed once by each region's ring. The walk stops when it
//! is back on its first edge.

use crate::cell::Cell;
use crate::centers_matrix::{CentersMatrix, MatrixIndex};
use crate::error::AreaError;
use crate::geo_point::GeoPoint;

/// A matrix view with one empty region whose border can be traced
pub trait ContourMatrix {
    /// The matrix the walk runs over
    fn matrix(&self) -> &CentersMatrix;

    /// Whether an empty position belongs to the traced region
    fn is_traced_empty(&self, index: MatrixIndex) -> bool;

    /// The empty position the walk starts from
    fn start_indexes(&self) -> MatrixIndex;

    /// Filled positions sharing at least a vertex with `index`
    fn touched_centers(&self, index: MatrixIndex) -> Vec<MatrixIndex> {
        let matrix = self.matrix();
        matrix
            .touch_neighbors(index)
            .filter(|&at| matrix.is_filled(at))
            .collect()
    }

    /// The closed ring around the traced region
    fn to_poly(&self) -> Result<Vec<GeoPoint>, AreaError> {
        ContourWalk::new(self).trace()
    }
}

/// First traced empty position, in row-major order, with a filled edge neighbour
pub(crate) fn find_start<F>(matrix: &CentersMatrix, is_traced_empty: F) -> Option<MatrixIndex>
where
    F: Fn(MatrixIndex) -> bool,
{
    matrix.indexes().find(|&index| {
        matrix.is_empty_slot(index)
            && is_traced_empty(index)
            && matrix.edge_neighbors(index).any(|at| matrix.is_filled(at))
    })
}

/// Edge `side` of the filled cell at `center`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoundaryEdge {
    center: MatrixIndex,
    side: usize,
}

fn broken((row, col): MatrixIndex) -> AreaError {
    AreaError::BrokenContour { row, col }
}

struct ContourWalk<'a, M: ContourMatrix + ?Sized> {
    contour: &'a M,
    matrix: &'a CentersMatrix,
    offsets: &'static [(isize, isize)],
}

impl<'a, M: ContourMatrix + ?Sized> ContourWalk<'a, M> {
    fn new(contour: &'a M) -> Self {
        let matrix = contour.matrix();
        Self {
            contour,
            matrix,
            offsets: matrix.params().edge_offsets(),
        }
    }

    fn cell(&self, index: MatrixIndex) -> Result<Cell, AreaError> {
        self.matrix
            .center(index)
            .map(|center| center.to_cell())
            .ok_or_else(|| broken(index))
    }

    /// Position across an edge; `None` when it falls outside the matrix
    fn across(&self, edge: BoundaryEdge) -> Option<MatrixIndex> {
        self.matrix.offset(edge.center, self.offsets[edge.side])
    }

    /// The edge of the first touched center that faces the start position.
    ///
    /// Touched centers are ordered southernmost row first, then westernmost.
    fn seed(&self) -> Result<BoundaryEdge, AreaError> {
        let start = self.contour.start_indexes();

        let mut touched = self.contour.touched_centers(start);
        touched.sort_by(|(row_a, col_a), (row_b, col_b)| row_b.cmp(row_a).then(col_a.cmp(col_b)));

        touched
            .into_iter()
            .find_map(|center| {
                (0..self.offsets.len())
                    .map(|side| BoundaryEdge { center, side })
                    .find(|&edge| self.across(edge) == Some(start))
            })
            .ok_or_else(|| broken(start))
    }

    /// The boundary edge that continues the ring after `edge`.
    ///
    /// Turns around the end vertex of `edge`, starting from the empty cell
    /// it faces, through traced empties until a filled cell comes up. The
    /// continuation is that cell's edge leaving the vertex.
    fn next_edge(&self, edge: BoundaryEdge) -> Result<BoundaryEdge, AreaError> {
        let sides = self.offsets.len();
        let (_, vertex) = self.cell(edge.center)?.edge(edge.side);

        let mut empty = self.across(edge).ok_or_else(|| broken(edge.center))?;

        for _ in 0..sides {
            if !self.contour.is_traced_empty(empty) {
                return Err(broken(empty));
            }

            // Edge of the empty cell that ends at the vertex
            let at = self
                .matrix
                .equivalent_cell(empty)
                .position_of(&vertex)
                .ok_or_else(|| broken(empty))?;
            let side = (at + sides - 1) % sides;
            let next = self
                .matrix
                .offset(empty, self.offsets[side])
                .ok_or_else(|| broken(empty))?;

            if self.matrix.is_filled(next) {
                let side = self.cell(next)?.position_of(&vertex).ok_or_else(|| broken(next))?;
                return Ok(BoundaryEdge { center: next, side });
            }

            empty = next;
        }

        Err(broken(edge.center))
    }

    fn trace(&self) -> Result<Vec<GeoPoint>, AreaError> {
        let seed = self.seed()?;
        let (first_point, _) = self.cell(seed.center)?.edge(seed.side);

        let limit = self.matrix.filled_count() * self.offsets.len() + 1;

        let mut points = vec![first_point];
        let mut edge = seed;

        for step in 0..limit {
            let next = self.next_edge(edge)?;

            if next == seed {
                // Close the ring on the exact first vertex
                points.push(first_point);

                tracing::trace!(steps = step + 1, points = points.len(), "Closed contour");
                return Ok(points);
            }

            let (point, _) = self.cell(next.center)?.edge(next.side);
            points.push(point);

            edge = next;
        }

        Err(AreaError::UnclosedContour { steps: limit })
    }
}
