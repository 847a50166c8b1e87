use std::collections::HashSet;

use crate::center_point::CenterPoint;
use crate::centers_matrix::{CentersMatrix, MatrixIndex};
use crate::contour::{find_start, ContourMatrix};
use crate::error::AreaError;

/// A filtered matrix padded with one ring of empty positions, traced from outside
#[derive(Debug, Clone)]
pub struct OuterCentersMatrix {
    matrix: CentersMatrix,
    outer_empties: HashSet<MatrixIndex>,
    start: MatrixIndex,
}

impl OuterCentersMatrix {
    pub fn from_centers_matrix(filtered: &CentersMatrix) -> Result<Self, AreaError> {
        let matrix = filtered.padded();
        let outer_empties: HashSet<MatrixIndex> = matrix.outer_empties().into_iter().collect();

        let start = find_start(&matrix, |index| outer_empties.contains(&index)).ok_or(AreaError::EmptyMatrix)?;

        tracing::debug!(
            rows = matrix.rows(),
            cols = matrix.cols(),
            outer_empties = outer_empties.len(),
            ?start,
            "Prepared outer contour"
        );

        Ok(Self {
            matrix,
            outer_empties,
            start,
        })
    }

    /// Center of the padding's `(0, 0)` position
    pub fn top_left(&self) -> &CenterPoint {
        self.matrix.top_left()
    }

    pub fn outer_empties(&self) -> &HashSet<MatrixIndex> {
        &self.outer_empties
    }
}

impl ContourMatrix for OuterCentersMatrix {
    fn matrix(&self) -> &CentersMatrix {
        &self.matrix
    }

    fn is_traced_empty(&self, index: MatrixIndex) -> bool {
        self.outer_empties.contains(&index)
    }

    fn start_indexes(&self) -> MatrixIndex {
        self.start
    }
}
