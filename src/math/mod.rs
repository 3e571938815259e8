//! Mathematical utilities for grid layout

/// Near-square divisor search for grid shapes
pub mod divisor;
