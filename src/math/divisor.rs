//! Near-square factorization of a tile count into grid rows and columns

use crate::io::error::{Result, invalid_input};
use crate::spatial::grid::GridShape;

/// Factor `count` into the most square `(rows, columns)` pair
///
/// Scans candidate divisors downward from `ceil(sqrt(count))`. The first
/// divisor found becomes the row count and its cofactor the column count.
/// Counts with no divisor in `[2, ceil(sqrt(count))]` degrade to a single row,
/// which covers one and every prime above two. Two itself yields `(2, 1)`
/// because `ceil(sqrt(2))` is its own divisor.
///
/// # Errors
///
/// Returns [`crate::QuiltError::InvalidInput`] when `count` is zero or negative.
pub fn solve(count: i64) -> Result<GridShape> {
    if count <= 0 {
        return Err(invalid_input(
            "divisor solver",
            &format!("tile count must be a natural number, got {count}"),
        ));
    }
    let n = count.unsigned_abs();
    solve_natural(n)
}

/// Factor an item count coming straight from a collection length
///
/// # Errors
///
/// Returns [`crate::QuiltError::InvalidInput`] when `count` is zero.
pub fn solve_len(count: usize) -> Result<GridShape> {
    if count == 0 {
        return Err(invalid_input(
            "divisor solver",
            &"tile count must be a natural number, got 0",
        ));
    }
    solve_natural(count as u64)
}

/// Validate a floating point count before solving
///
/// Counts that carry a fractional part are rejected rather than truncated.
///
/// # Errors
///
/// Returns [`crate::QuiltError::InvalidInput`] when `count` is not a finite
/// positive integer value.
pub fn solve_f64(count: f64) -> Result<GridShape> {
    if !count.is_finite() || count <= 0.0 || count.trunc() < count || count > i64::MAX as f64 {
        return Err(invalid_input(
            "divisor solver",
            &format!("tile count must be a natural number, got {count}"),
        ));
    }
    solve(count as i64)
}

fn solve_natural(n: u64) -> Result<GridShape> {
    // ceil(sqrt(n)) without floating point rounding
    let upper = (n - 1).isqrt() + 1;
    let rows = (2..=upper).rev().find(|i| n % i == 0).unwrap_or(1);
    GridShape::new(to_u32(rows)?, to_u32(n / rows)?)
}

fn to_u32(value: u64) -> Result<u32> {
    u32::try_from(value).map_err(|error| {
        invalid_input(
            "divisor solver",
            &format!("grid dimension {value} is unsupported: {error}"),
        )
    })
}
