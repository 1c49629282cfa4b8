//! # trigrid
//!
//! trigrid parses arithmetic expressions over the variables `x`, `y` and `z`
//! and tabulates them across a three-dimensional grid of points, under a
//! choice of numeric domains with genuinely different overflow, division and
//! modulo behavior.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::ops::RangeInclusive;

use crate::{
    ast::Expr,
    error::{ParseError, TabulateError},
    eval::{
        BigIntEvaluator, CheckedIntEvaluator, DoubleEvaluator, LongEvaluator, ShortEvaluator,
        WrappingIntEvaluator,
    },
    parser::{GENERIC_OPERATORS, INTEGER_OPERATORS, Parser},
    tabulator::{Grid, tabulate_with},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the expression tree together with the operator and
/// variable enums it is built from. Trees are generic over the value type of
/// the numeric domain that parsed them.
///
/// # Responsibilities
/// - Defines the `Expr` tree and the operator vocabulary types.
/// - Fixes operator priorities and display symbols in one place.
/// - Renders trees back to fully parenthesized text.
pub mod ast;
/// A double-ended queue over a growable ring buffer.
///
/// A compact deque used the way a work list usually is: push at either end,
/// pop at either end, scan when something has to be found or removed from
/// the middle.
///
/// # Responsibilities
/// - Maintains the circular-buffer invariants behind a safe interface.
/// - Grows transparently while keeping operations at the ends constant-time.
/// - Supports ordered iteration and linear removal by value.
pub mod deque;
/// Provides unified error types for parsing, evaluation and tabulation.
///
/// This module defines every error the crate can report. Parse errors carry
/// exact one-based character positions; evaluation errors describe the
/// failing values instead, because by then positions no longer exist.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches positions or offending values for context.
/// - Integrates with the standard error-handling traits.
pub mod error;
/// Evaluates expression trees in interchangeable numeric domains.
///
/// This module defines the evaluator trait and six implementations of it:
/// checked and wrapping 32-bit integers, wrapping 64-bit integers,
/// truncating 16-bit integers, IEEE doubles and arbitrary-precision
/// integers.
///
/// # Responsibilities
/// - Walks a tree bottom-up and applies the domain's arithmetic.
/// - Decides per domain what overflows, what wraps and what fails.
/// - Converts literals and grid coordinates into domain values.
pub mod eval;
/// Parses expression text into trees.
///
/// This module implements a recursive-descent parser that tokenizes as it
/// goes: characters come straight off a cursor, with one character of
/// lookahead and a one-slot operator pushback. Errors point at exact
/// one-based character positions.
///
/// # Responsibilities
/// - Provides the character cursor and the operator vocabularies.
/// - Builds left-associative trees through a priority floor.
/// - Reads constants through the active numeric domain so overflow is a
///   parse-time error.
pub mod parser;
/// Binary searches with explicit invariants.
///
/// Two searches over `i32` slices: the first index at which a non-increasing
/// slice drops to a threshold, and the peak of a strictly unimodal slice.
/// Each comes in an iterative and a recursive form.
///
/// # Responsibilities
/// - States and maintains the window invariant of each search.
/// - Keeps both forms answer-identical so either can be used.
pub mod search;
/// Tabulates expressions over three-dimensional grids.
///
/// This module evaluates a parsed expression at every point of an inclusive
/// coordinate box and collects the results in a grid, one optional value per
/// cell.
///
/// # Responsibilities
/// - Runs the per-cell evaluation loop, isolating cell failures.
/// - Defines the grid container and the tagged cell value type.
/// - Renders grids as plain text, one cell per line.
pub mod tabulator;

/// Parses an expression of the checked 32-bit integer grammar.
///
/// The vocabulary is the binary operators `+`, `-`, `*`, `/`, `set` and
/// `clear`, the unary operators `-`, `count`, `pow10` and `log10`, decimal
/// constants and the variables `x`, `y` and `z`. The tree it returns
/// evaluates in the checked `i32` domain.
///
/// # Errors
/// Any [`ParseError`], with the exact one-based position of the offense.
///
/// # Examples
/// ```
/// let tree = trigrid::parse("2+3*x").unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * x))");
///
/// let error = trigrid::parse("2+").unwrap_err();
/// assert_eq!(error.position(), 3);
/// ```
pub fn parse(expression: &str) -> Result<Expr<i32>, ParseError> {
    Parser::<CheckedIntEvaluator>::new(expression, &INTEGER_OPERATORS).parse()
}

/// Tabulates an expression over three inclusive coordinate ranges.
///
/// The `mode` selects the numeric domain and with it the arithmetic rules:
///
/// - `"i"`: checked 32-bit integers; overflow fails the cell.
/// - `"u"`: wrapping 32-bit integers.
/// - `"l"`: wrapping 64-bit integers.
/// - `"s"`: truncating 16-bit integers.
/// - `"d"`: IEEE doubles; division by zero yields infinities, not failures.
/// - `"bi"`: arbitrary-precision integers with a true modulus.
///
/// All modes share one grammar: `+`, `-`, `*`, `/` and `mod`, the unary
/// operators `-`, `abs` and `square`, constants and the variables `x`, `y`
/// and `z`. The expression is parsed once; each cell is evaluated
/// independently and a failing cell is recorded as having no value.
///
/// # Errors
/// - [`TabulateError::UnsupportedMode`] when `mode` is not listed above.
/// - [`TabulateError::Parse`] when the expression does not parse.
///
/// # Examples
/// ```
/// let grid = trigrid::tabulate("i", "10/x", -1..=1, 0..=0, 0..=0).unwrap();
/// assert_eq!(grid.to_string(),
///            "f(-1, 0, 0) = -10\nf(0, 0, 0) = no value\nf(1, 0, 0) = 10\n");
/// ```
pub fn tabulate(mode: &str,
                expression: &str,
                x: RangeInclusive<i32>,
                y: RangeInclusive<i32>,
                z: RangeInclusive<i32>)
                -> Result<Grid, TabulateError> {
    match mode {
        "i" => tabulate_with::<CheckedIntEvaluator>(expression, &GENERIC_OPERATORS, x, y, z),
        "u" => tabulate_with::<WrappingIntEvaluator>(expression, &GENERIC_OPERATORS, x, y, z),
        "l" => tabulate_with::<LongEvaluator>(expression, &GENERIC_OPERATORS, x, y, z),
        "s" => tabulate_with::<ShortEvaluator>(expression, &GENERIC_OPERATORS, x, y, z),
        "d" => tabulate_with::<DoubleEvaluator>(expression, &GENERIC_OPERATORS, x, y, z),
        "bi" => tabulate_with::<BigIntEvaluator>(expression, &GENERIC_OPERATORS, x, y, z),
        _ => Err(TabulateError::UnsupportedMode { mode: mode.to_owned(), }),
    }
}
