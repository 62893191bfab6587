//! Core data structures of the crate.
//!
//! - [`Feature`]: one annotated region with its nested sub-features, typed by
//!   the closed [`FeatureType`] enumeration and oriented by [`Strand`].
//! - [`annotation`]: record extraction and the two ways of building the
//!   feature hierarchy.
//! - [`Chromosome`] and [`Reference`]: the assembled, queryable annotation
//!   of a genome.
//! - [`coords`]: [`Region`] and the interval index used for range queries.
//! - [`typedef`]: coordinate type aliases.

pub mod annotation;
pub mod coords;
mod enums;
pub mod feature;
pub mod genome;
pub mod typedef;

#[cfg(test)]
mod tests;

pub use coords::{
    FeatureIndex,
    Region,
};
pub use enums::{
    FeatureType,
    Strand,
};
pub use feature::{
    sort_features,
    Feature,
    NestedFeature,
};
pub use genome::{
    Chromosome,
    Reference,
};
