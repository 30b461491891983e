//! Ready-made heuristics.
//!
//! Grid heuristics assume four-directional unit moves; under that model
//! [`manhattan_distance`] is admissible and consistent and
//! [`euclidean_distance`] is admissible but less informed.

/// A cell coordinate on a two-dimensional grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub row: i32,
    pub column: i32,
}

impl GridPoint {
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// The four orthogonal neighbours, unfiltered: down, up, right, left.
    pub fn neighbors(self) -> [GridPoint; 4] {
        [
            Self::new(self.row + 1, self.column),
            Self::new(self.row - 1, self.column),
            Self::new(self.row, self.column + 1),
            Self::new(self.row, self.column - 1),
        ]
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((row, column): (i32, i32)) -> Self {
        Self { row, column }
    }
}

/// The heuristic that always returns 0. A* with it behaves like
/// uniform-cost search.
pub fn zero<T>(_state: &T) -> f64 {
    0.0
}

/// Returns a heuristic measuring the taxicab distance to `goal`.
///
/// # Examples
///
/// ```
/// use u_search::heuristic::{manhattan_distance, GridPoint};
///
/// let h = manhattan_distance(GridPoint::new(2, 2));
/// assert_eq!(h(&GridPoint::new(0, 0)), 4.0);
/// ```
pub fn manhattan_distance(goal: GridPoint) -> impl Fn(&GridPoint) -> f64 {
    move |p| {
        let rows = (p.row - goal.row).abs();
        let columns = (p.column - goal.column).abs();
        f64::from(rows + columns)
    }
}

/// Returns a heuristic measuring the straight-line distance to `goal`.
pub fn euclidean_distance(goal: GridPoint) -> impl Fn(&GridPoint) -> f64 {
    move |p| {
        let dr = f64::from(p.row - goal.row);
        let dc = f64::from(p.column - goal.column);
        dr.hypot(dc)
    }
}
