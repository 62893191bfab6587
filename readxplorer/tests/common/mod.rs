#![allow(dead_code)]

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{
    Rng,
    SeedableRng,
};
use readxplorer::prelude::*;

pub const FEATURE_TYPES: [FeatureType; 9] = [
    FeatureType::Gene,
    FeatureType::MRna,
    FeatureType::TRna,
    FeatureType::NcRna,
    FeatureType::Exon,
    FeatureType::Cds,
    FeatureType::Cds,
    FeatureType::RepeatUnit,
    FeatureType::Undefined,
];

pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

/// Random flat features with unique identifiers `f0`, `f1`, ...
pub struct DemoFeatureBuilder {
    seed:       u64,
    n_features: usize,
    max_start:  u32,
    max_length: u32,
}

impl Default for DemoFeatureBuilder {
    fn default() -> Self {
        Self {
            seed:       42,
            n_features: 500,
            max_start:  50_000,
            max_length: 5_000,
        }
    }
}

impl DemoFeatureBuilder {
    pub fn with_seed(
        mut self,
        seed: u64,
    ) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_n_features(
        mut self,
        n_features: usize,
    ) -> Self {
        self.n_features = n_features;
        self
    }

    pub fn build(&self) -> Vec<Feature> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.n_features)
            .map(|idx| {
                let feature_type =
                    FEATURE_TYPES[rng.gen_range(0..FEATURE_TYPES.len())];
                let start = rng.gen_range(1..=self.max_start);
                let stop = start + rng.gen_range(0..self.max_length);
                let strand = Strand::from(rng.gen_bool(0.5));
                Feature::new(feature_type, start, stop, strand)
                    .with_identifier(Some(format!("f{}", idx)))
            })
            .collect()
    }

    /// Same features, half of them pointing at a random other feature as
    /// parent. Cycles and self references are allowed.
    pub fn build_with_parents(&self) -> Vec<Feature> {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(1));
        self.build()
            .into_iter()
            .enumerate()
            .map(|(idx, feature)| {
                if idx > 0 && rng.gen_bool(0.5) {
                    let parent = rng.gen_range(0..self.n_features);
                    feature.with_parent_ids(vec![format!("f{}", parent)])
                }
                else {
                    feature
                }
            })
            .collect()
    }
}

/// Identifiers of every feature in the forest, sorted.
pub fn all_ids(features: &[Feature]) -> Vec<String> {
    let mut ids = features
        .iter()
        .flat_map(|feature| feature.iter())
        .filter_map(|feature| feature.identifier().map(str::to_string))
        .collect::<Vec<_>>();
    ids.sort();
    ids
}
