//! Genomic coordinates used for lookups.
//!
//! - [`Region`]: a named, 1-based inclusive window such as `chr1:100-200`.
//! - [`FeatureIndex`]: an interval index over the top-level features of one
//!   chromosome.

mod interval_map;
mod region;

pub use interval_map::FeatureIndex;
pub use region::Region;
