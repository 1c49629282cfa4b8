use std::ops::RangeInclusive;

use crate::{
    error::TabulateError,
    eval::{Evaluator, evaluate},
    parser::{OperatorSet, Parser},
    tabulator::{grid::Grid, value::Value},
};

/// Tabulates an expression over three inclusive ranges in the domain `E`.
///
/// The expression is parsed exactly once; a parse failure is the only
/// expression-related error that aborts the whole tabulation. Each cell is
/// then evaluated independently, and a cell whose evaluation fails is stored
/// as `None` while the rest of the grid is still computed.
///
/// # Parameters
/// - `expression`: The expression text.
/// - `operators`: The operator vocabulary to parse it with.
/// - `x`, `y`, `z`: Inclusive coordinate ranges, outermost axis first.
///
/// # Errors
/// [`TabulateError::Parse`] when the expression does not parse.
pub fn tabulate_with<E>(expression: &str,
                        operators: &'static OperatorSet,
                        x: RangeInclusive<i32>,
                        y: RangeInclusive<i32>,
                        z: RangeInclusive<i32>)
                        -> Result<Grid, TabulateError>
    where E: Evaluator,
          E::Value: Into<Value>
{
    let tree = Parser::<E>::new(expression, operators).parse()?;
    let mut cells = Vec::with_capacity(axis_len(&x));
    for i in x.clone() {
        let mut plane = Vec::with_capacity(axis_len(&y));
        for j in y.clone() {
            let mut row = Vec::with_capacity(axis_len(&z));
            for k in z.clone() {
                row.push(evaluate::<E>(&tree, i, j, k).ok().map(Into::into));
            }
            plane.push(row);
        }
        cells.push(plane);
    }
    Ok(Grid::new(x, y, z, cells))
}

// Inverted ranges get capacity 0; a range spanning the whole of i32 needs
// the widening to not overflow.
fn axis_len(range: &RangeInclusive<i32>) -> usize {
    let len = i64::from(*range.end()) - i64::from(*range.start()) + 1;
    usize::try_from(len).unwrap_or(0)
}
