use std::ops::{Index, RangeInclusive};

use crate::tabulator::value::Value;

/// A tabulated grid of expression values over three inclusive axis ranges.
///
/// A cell holds `Some(value)` when evaluation succeeded at that point and
/// `None` when it failed; a failed cell never aborts its neighbors. Cells
/// are stored in x-major, then y, then z order.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x_range: RangeInclusive<i32>,
    y_range: RangeInclusive<i32>,
    z_range: RangeInclusive<i32>,
    cells:   Vec<Vec<Vec<Option<Value>>>>,
}

impl Grid {
    pub(crate) fn new(x_range: RangeInclusive<i32>,
                      y_range: RangeInclusive<i32>,
                      z_range: RangeInclusive<i32>,
                      cells: Vec<Vec<Vec<Option<Value>>>>)
                      -> Self {
        Self { x_range,
               y_range,
               z_range,
               cells }
    }

    /// Gets the coordinates of the first cell, `(x1, y1, z1)`.
    #[must_use]
    pub const fn origin(&self) -> (i32, i32, i32) {
        (*self.x_range.start(), *self.y_range.start(), *self.z_range.start())
    }

    /// Gets the number of cells along each axis.
    ///
    /// An inverted range (start above end) produces an empty axis, which
    /// empties the whole grid.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize, usize) {
        let x = self.cells.len();
        let y = self.cells.first().map_or(0, Vec::len);
        let z = self.cells
                    .first()
                    .and_then(|plane| plane.first())
                    .map_or(0, Vec::len);
        (x, y, z)
    }

    /// Looks up the cell computed at the point `(x, y, z)`.
    ///
    /// # Returns
    /// `None` when the point lies outside the tabulated ranges. Inside them,
    /// the cell itself: `Some(value)` for a computed value, `None` for a
    /// point where evaluation failed.
    #[must_use]
    pub fn value(&self, x: i32, y: i32, z: i32) -> Option<&Option<Value>> {
        let i = axis_offset(&self.x_range, x)?;
        let j = axis_offset(&self.y_range, y)?;
        let k = axis_offset(&self.z_range, z)?;
        self.cells.get(i)?.get(j)?.get(k)
    }

    /// Iterates over every cell in storage order, yielding the coordinates
    /// alongside the cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, i32, &Option<Value>)> {
        self.x_range.clone().zip(&self.cells).flat_map(move |(x, plane)| {
            self.y_range.clone().zip(plane).flat_map(move |(y, row)| {
                self.z_range.clone().zip(row).map(move |(z, cell)| (x, y, z, cell))
            })
        })
    }
}

impl Index<(usize, usize, usize)> for Grid {
    type Output = Option<Value>;

    /// Accesses a cell by zero-based offsets along the x, y and z axes.
    ///
    /// # Panics
    /// Panics when an offset is outside [`Grid::dimensions`].
    fn index(&self, (i, j, k): (usize, usize, usize)) -> &Option<Value> {
        &self.cells[i][j][k]
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (x, y, z, cell) in self.cells() {
            match cell {
                Some(value) => writeln!(f, "f({x}, {y}, {z}) = {value}")?,
                None => writeln!(f, "f({x}, {y}, {z}) = no value")?,
            }
        }
        Ok(())
    }
}

fn axis_offset(range: &RangeInclusive<i32>, coordinate: i32) -> Option<usize> {
    if !range.contains(&coordinate) {
        return None;
    }
    usize::try_from(i64::from(coordinate) - i64::from(*range.start())).ok()
}
