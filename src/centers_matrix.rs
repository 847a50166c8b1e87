//! Scattered cell centers snapped onto a row/column matrix
//!
//! Centers are stored sparsely by position. Every position inside the
//! matrix bounds is either [`Slot::Filled`] with a center or [`Slot::Empty`].
//! Positions outside the bounds are a third state and are reported as `None`
//! by [`CentersMatrix::get`].

use std::collections::{HashMap, HashSet, VecDeque};

use crate::cell::Cell;
use crate::center_point::{CellParams, CenterPoint};
use crate::error::AreaError;

/// `(row, column)` position inside a matrix
pub type MatrixIndex = (usize, usize);

/// Content of one matrix position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
    Filled(CenterPoint),
    Empty,
}

impl Slot {
    pub fn is_filled(&self) -> bool {
        matches!(self, Slot::Filled(_))
    }

    pub fn center(&self) -> Option<&CenterPoint> {
        match self {
            Slot::Filled(center) => Some(center),
            Slot::Empty => None,
        }
    }
}

/// Breadth-first fill from `start` over positions accepted by `accept`
fn flood<N, I>(
    start: MatrixIndex,
    visited: &mut HashSet<MatrixIndex>,
    neighbors: N,
    accept: impl Fn(MatrixIndex) -> bool,
) -> Vec<MatrixIndex>
where
    N: Fn(MatrixIndex) -> I,
    I: Iterator<Item = MatrixIndex>,
{
    let mut region = vec![start];
    let mut queue = VecDeque::from([start]);
    visited.insert(start);

    while let Some(index) = queue.pop_front() {
        for next in neighbors(index) {
            if accept(next) && visited.insert(next) {
                region.push(next);
                queue.push_back(next);
            }
        }
    }

    region
}

/// Centers indexed by lattice position
#[derive(Debug, Clone, PartialEq)]
pub struct CentersMatrix {
    /// Center of the `(0, 0)` position, filled or not
    top_left: CenterPoint,
    rows: usize,
    cols: usize,
    filled: HashMap<MatrixIndex, CenterPoint>,
}

impl CentersMatrix {
    /// Snap centers onto the lattice spanned by the first one.
    ///
    /// Fails when the centers disagree on lattice parameters, when one of
    /// them is off the lattice, or when two land on the same position.
    pub fn from_centers(centers: &[CenterPoint]) -> Result<Self, AreaError> {
        let anchor = centers.first().ok_or(AreaError::EmptyMatrix)?;

        let mut diffs = Vec::with_capacity(centers.len());
        for center in centers {
            if center.params() != anchor.params() {
                return Err(AreaError::MixedCellParams);
            }

            let diff = anchor.lattice_diff(center).ok_or(AreaError::NotOnLattice {
                lat: center.lat(),
                lng: center.lng(),
            })?;
            diffs.push(diff);
        }

        let min_i = diffs.iter().map(|&(i, _)| i).min().unwrap_or(0);
        let min_j = diffs.iter().map(|&(_, j)| j).min().unwrap_or(0);
        let max_i = diffs.iter().map(|&(i, _)| i).max().unwrap_or(0);
        let max_j = diffs.iter().map(|&(_, j)| j).max().unwrap_or(0);

        let mut filled = HashMap::with_capacity(centers.len());
        for (center, (di, dj)) in centers.iter().zip(diffs) {
            let index = ((di - min_i) as usize, (dj - min_j) as usize);
            if filled.insert(index, *center).is_some() {
                return Err(AreaError::DuplicateCenter {
                    row: index.0,
                    col: index.1,
                });
            }
        }

        let rows = (max_i - min_i + 1) as usize;
        let cols = (max_j - min_j + 1) as usize;

        tracing::debug!(centers = centers.len(), rows, cols, "Indexed centers into matrix");

        Ok(Self {
            top_left: anchor.move_by_diff(min_i, min_j),
            rows,
            cols,
            filled,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn params(&self) -> &CellParams {
        self.top_left.params()
    }

    /// Center of the `(0, 0)` position
    pub fn top_left(&self) -> &CenterPoint {
        &self.top_left
    }

    /// Filled positions and their centers
    pub fn filled(&self) -> &HashMap<MatrixIndex, CenterPoint> {
        &self.filled
    }

    /// Slot at a signed position; `None` outside the matrix
    pub fn get(&self, row: isize, col: isize) -> Option<Slot> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }

        Some(match self.filled.get(&(row as usize, col as usize)) {
            Some(center) => Slot::Filled(*center),
            None => Slot::Empty,
        })
    }

    pub fn is_filled(&self, index: MatrixIndex) -> bool {
        self.filled.contains_key(&index)
    }

    pub fn is_empty_slot(&self, index: MatrixIndex) -> bool {
        !self.filled.contains_key(&index)
    }

    /// Center stored at a position
    pub fn center(&self, index: MatrixIndex) -> Option<&CenterPoint> {
        self.filled.get(&index)
    }

    /// Position shifted by a lattice offset, if it stays inside the matrix
    pub fn offset(&self, (row, col): MatrixIndex, (di, dj): (isize, isize)) -> Option<MatrixIndex> {
        let row = row as isize + di;
        let col = col as isize + dj;
        self.get(row, col).map(|_| (row as usize, col as usize))
    }

    /// The center a position has, or would have if it were filled
    pub fn equivalent_center(&self, (row, col): MatrixIndex) -> CenterPoint {
        match self.center((row, col)) {
            Some(center) => *center,
            None => self.top_left.move_by_diff(row as isize, col as isize),
        }
    }

    /// The cell a position has, or would have if it were filled
    pub fn equivalent_cell(&self, index: MatrixIndex) -> Cell {
        self.equivalent_center(index).to_cell()
    }

    /// Positions sharing an edge with `index`
    pub fn edge_neighbors(&self, index: MatrixIndex) -> impl Iterator<Item = MatrixIndex> + '_ {
        self.params()
            .edge_offsets()
            .iter()
            .filter_map(move |&offset| self.offset(index, offset))
    }

    /// Positions sharing at least a vertex with `index`
    pub fn touch_neighbors(&self, index: MatrixIndex) -> impl Iterator<Item = MatrixIndex> + '_ {
        self.params()
            .touch_offsets()
            .iter()
            .filter_map(move |&offset| self.offset(index, offset))
    }

    /// Every position in row-major order, filled or not
    pub fn indexes(&self) -> impl Iterator<Item = MatrixIndex> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// Filled positions in row-major order
    pub fn filled_indexes(&self) -> Vec<MatrixIndex> {
        let mut indexes: Vec<MatrixIndex> = self.filled.keys().copied().collect();
        indexes.sort_unstable();
        indexes
    }

    pub fn filled_count(&self) -> usize {
        self.filled.len()
    }

    /// Connected components of filled positions, in order of discovery
    pub fn filled_sets(&self) -> Vec<Vec<MatrixIndex>> {
        let mut visited = HashSet::new();
        let mut sets = Vec::new();

        for index in self.filled_indexes() {
            if !visited.contains(&index) {
                let set = flood(
                    index,
                    &mut visited,
                    |at| self.edge_neighbors(at),
                    |at| self.is_filled(at),
                );
                sets.push(set);
            }
        }

        sets
    }

    /// The largest connected set of filled positions; the first found wins ties
    pub fn biggest_set(&self) -> Vec<MatrixIndex> {
        let mut biggest: Vec<MatrixIndex> = Vec::new();

        for set in self.filled_sets() {
            if set.len() > biggest.len() {
                biggest = set;
            }
        }

        biggest
    }

    /// A matrix holding only the given positions, cropped to their bounds
    pub fn filter_by_set(&self, set: &[MatrixIndex]) -> Result<Self, AreaError> {
        let min_row = set.iter().map(|&(row, _)| row).min().ok_or(AreaError::EmptyMatrix)?;
        let min_col = set.iter().map(|&(_, col)| col).min().ok_or(AreaError::EmptyMatrix)?;
        let max_row = set.iter().map(|&(row, _)| row).max().ok_or(AreaError::EmptyMatrix)?;
        let max_col = set.iter().map(|&(_, col)| col).max().ok_or(AreaError::EmptyMatrix)?;

        let filled = set
            .iter()
            .filter_map(|&(row, col)| {
                self.center((row, col))
                    .map(|center| ((row - min_row, col - min_col), *center))
            })
            .collect();

        Ok(Self {
            top_left: self.equivalent_center((min_row, min_col)),
            rows: max_row - min_row + 1,
            cols: max_col - min_col + 1,
            filled,
        })
    }

    /// The same matrix surrounded by one ring of empty positions
    pub fn padded(&self) -> Self {
        let filled = self
            .filled
            .iter()
            .map(|(&(row, col), center)| ((row + 1, col + 1), *center))
            .collect();

        Self {
            top_left: self.top_left.move_by_diff(-1, -1),
            rows: self.rows + 2,
            cols: self.cols + 2,
            filled,
        }
    }

    pub fn is_on_border(&self, (row, col): MatrixIndex) -> bool {
        row == 0 || col == 0 || row + 1 == self.rows || col + 1 == self.cols
    }

    /// Edge-connected sets of empty positions.
    ///
    /// Walks every position inside the bounds, so call it on a filtered matrix.
    pub fn empty_sets(&self) -> Vec<Vec<MatrixIndex>> {
        let mut visited = HashSet::new();
        let mut sets = Vec::new();

        for index in self.indexes() {
            if self.is_empty_slot(index) && !visited.contains(&index) {
                let set = flood(
                    index,
                    &mut visited,
                    |at| self.edge_neighbors(at),
                    |at| self.is_empty_slot(at),
                );
                sets.push(set);
            }
        }

        sets
    }

    /// Empty sets enclosed by filled positions (not touching the border)
    pub fn inner_empties(&self) -> Vec<Vec<MatrixIndex>> {
        self.empty_sets()
            .into_iter()
            .filter(|set| !set.iter().any(|&index| self.is_on_border(index)))
            .collect()
    }

    /// Empty sets reaching the border
    pub fn outer_empties(&self) -> Vec<MatrixIndex> {
        self.empty_sets()
            .into_iter()
            .filter(|set| set.iter().any(|&index| self.is_on_border(index)))
            .flatten()
            .collect()
    }
}
