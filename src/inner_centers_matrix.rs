use std::collections::HashSet;

use crate::centers_matrix::{CentersMatrix, MatrixIndex};
use crate::contour::{find_start, ContourMatrix};
use crate::error::AreaError;

/// One enclosed empty region of a filtered matrix, traced from inside
#[derive(Debug, Clone)]
pub struct InnerCentersMatrix<'a> {
    matrix: &'a CentersMatrix,
    empties: HashSet<MatrixIndex>,
    start: MatrixIndex,
}

impl<'a> InnerCentersMatrix<'a> {
    /// Scope a trace to `empties`, one of `filtered.inner_empties()`
    pub fn from_centers_matrix(filtered: &'a CentersMatrix, empties: &[MatrixIndex]) -> Result<Self, AreaError> {
        let empties: HashSet<MatrixIndex> = empties.iter().copied().collect();

        let start = find_start(filtered, |index| empties.contains(&index)).ok_or(AreaError::EmptyMatrix)?;

        Ok(Self {
            matrix: filtered,
            empties,
            start,
        })
    }

    pub fn empties(&self) -> &HashSet<MatrixIndex> {
        &self.empties
    }
}

impl ContourMatrix for InnerCentersMatrix<'_> {
    fn matrix(&self) -> &CentersMatrix {
        self.matrix
    }

    fn is_traced_empty(&self, index: MatrixIndex) -> bool {
        self.empties.contains(&index)
    }

    fn start_indexes(&self) -> MatrixIndex {
        self.start
    }
}
