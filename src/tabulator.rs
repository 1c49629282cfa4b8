/// Core tabulation logic.
///
/// Parses an expression once and evaluates it over every point of a
/// three-dimensional inclusive grid, in any numeric domain.
pub mod core;

/// The tabulated grid.
///
/// Holds the per-cell results, with coordinate-based and offset-based
/// access, iteration and plain-text rendering.
pub mod grid;

/// Tagged cell values.
///
/// One value type able to carry the result of any numeric domain, so grids
/// of different modes share a shape.
pub mod value;

pub use self::core::tabulate_with;
pub use grid::Grid;
pub use value::Value;
