/// Character-level input handling.
///
/// Provides the cursor the parser reads raw characters through, with
/// single-character lookahead and one-based position reporting.
pub mod cursor;

/// Operator vocabularies.
///
/// Defines the operator tables for the two grammars: symbol operators,
/// binary-word operators and unary-word operators.
pub mod operators;

/// Core parsing logic.
///
/// Contains the parser itself: the binary-operator chain with its priority
/// floor, operator reading with single-operator pushback, and identifier
/// scanning.
pub mod core;

/// Primary expressions.
///
/// Parses the atoms of the grammar: parenthesized groups, numeric literals,
/// variables and unary operations.
pub mod primary;

pub use self::core::{ParseResult, Parser};
pub use cursor::Cursor;
pub use operators::{GENERIC_OPERATORS, INTEGER_OPERATORS, OperatorSet};
