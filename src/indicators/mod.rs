//! Pure, stateless indicator functions over chronological price slices.
//!
//! Every function is total: under-length or degenerate input yields the
//! documented fallback value instead of an error, so scoring stays
//! well-defined while history accumulates.

pub mod momentum;
pub mod trend;
pub mod volatility;
