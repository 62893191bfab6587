use arcstr::ArcStr;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

use crate::data_structs::coords::{
    FeatureIndex,
    Region,
};
use crate::data_structs::enums::FeatureType;
use crate::data_structs::feature::Feature;
use crate::data_structs::typedef::{
    LengthType,
    PosType,
};

/// A reference sequence together with its top-level features.
///
/// The feature list is final once the chromosome is created; an interval
/// index over it is built up front for range queries.
#[derive(Debug, Clone, Serialize)]
pub struct Chromosome {
    name:     ArcStr,
    length:   LengthType,
    features: Vec<Feature>,
    #[serde(skip)]
    index:    FeatureIndex,
}

impl Chromosome {
    pub fn new(
        name: impl Into<ArcStr>,
        length: LengthType,
        features: Vec<Feature>,
    ) -> Self {
        let index = FeatureIndex::new(&features);
        Self {
            name: name.into(),
            length,
            features,
            index,
        }
    }

    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    pub fn length(&self) -> LengthType {
        self.length
    }

    /// Top-level features.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Number of features at all nesting levels.
    pub fn feature_count(&self) -> usize {
        self.features.iter().map(Feature::count).sum()
    }

    /// Depth-first traversal over every feature on this chromosome.
    pub fn iter_all(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().flat_map(|feature| feature.iter())
    }

    /// Top-level features overlapping the inclusive window
    /// `[start, stop]`.
    pub fn features_in(
        &self,
        start: PosType,
        stop: PosType,
    ) -> Vec<&Feature> {
        self.index
            .find(start, stop)
            .into_iter()
            .map(|idx| &self.features[idx])
            .collect_vec()
    }
}

/// Annotated reference genome: chromosomes in file (or FASTA index) order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    name:        Option<String>,
    chromosomes: Vec<Chromosome>,
}

impl Reference {
    pub fn new(
        name: Option<String>,
        chromosomes: Vec<Chromosome>,
    ) -> Self {
        Self { name, chromosomes }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    pub fn chromosome(
        &self,
        name: &str,
    ) -> Option<&Chromosome> {
        self.chromosomes
            .iter()
            .find(|chr| chr.name().as_str() == name)
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn feature_count(&self) -> usize {
        self.chromosomes
            .iter()
            .map(Chromosome::feature_count)
            .sum()
    }

    /// Top-level features overlapping `region`. Empty when the region's
    /// sequence is not part of the reference.
    pub fn features_in(
        &self,
        region: &Region,
    ) -> Vec<&Feature> {
        self.chromosome(region.seqname())
            .map(|chr| chr.features_in(region.start(), region.end()))
            .unwrap_or_default()
    }

    /// Feature counts per type over all nesting levels, in order of first
    /// appearance.
    pub fn type_counts(&self) -> IndexMap<FeatureType, usize> {
        let mut counts = IndexMap::new();
        for feature in self
            .chromosomes
            .iter()
            .flat_map(|chr| chr.iter_all())
        {
            *counts.entry(feature.feature_type()).or_insert(0) += 1;
        }
        counts
    }
}
