use std::cmp::Ordering;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::enums::{
    FeatureType,
    Strand,
};
use crate::data_structs::typedef::PosType;
use crate::with_field_fn;

/// One annotated region on a chromosome.
///
/// Coordinates are 1-based and inclusive. After hierarchy construction a
/// feature owns its children in `sub_features`; in containment mode every
/// child lies within `[start, stop]` on the same strand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    feature_type: FeatureType,
    start:        PosType,
    stop:         PosType,
    strand:       Strand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    locus_tag:    Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    product:      Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ec_number:    Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gene_name:    Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier:   Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    parent_ids:   Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    sub_features: Vec<Feature>,
}

impl Feature {
    /// Creates a feature without any descriptive attributes.
    ///
    /// Coordinates are taken as given; see [`Feature::normalized`].
    pub fn new(
        feature_type: FeatureType,
        start: PosType,
        stop: PosType,
        strand: Strand,
    ) -> Self {
        Self {
            feature_type,
            start,
            stop,
            strand,
            ..Default::default()
        }
    }

    with_field_fn!(locus_tag, Option<String>);

    with_field_fn!(product, Option<String>);

    with_field_fn!(ec_number, Option<String>);

    with_field_fn!(gene_name, Option<String>);

    with_field_fn!(identifier, Option<String>);

    with_field_fn!(parent_ids, Vec<String>);

    with_field_fn!(sub_features, Vec<Feature>);

    /// Swaps `start` and `stop` if they are reversed.
    pub fn normalized(mut self) -> Self {
        if self.start > self.stop {
            std::mem::swap(&mut self.start, &mut self.stop);
        }
        self
    }

    pub fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    pub fn start(&self) -> PosType {
        self.start
    }

    pub fn stop(&self) -> PosType {
        self.stop
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn locus_tag(&self) -> Option<&str> {
        self.locus_tag.as_deref()
    }

    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    pub fn ec_number(&self) -> Option<&str> {
        self.ec_number.as_deref()
    }

    pub fn gene_name(&self) -> Option<&str> {
        self.gene_name.as_deref()
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn parent_ids(&self) -> &[String] {
        &self.parent_ids
    }

    pub fn sub_features(&self) -> &[Feature] {
        &self.sub_features
    }

    /// Number of bases covered, zero for reversed coordinates.
    pub fn length(&self) -> PosType {
        if self.start > self.stop {
            0
        }
        else {
            self.stop - self.start + 1
        }
    }

    /// Checks if `other` lies fully within this feature on the same strand.
    pub fn contains(
        &self,
        other: &Feature,
    ) -> bool {
        self.strand == other.strand
            && self.start <= other.start
            && self.stop >= other.stop
    }

    /// Checks if this feature overlaps the inclusive window `[start, stop]`.
    pub fn overlaps(
        &self,
        start: PosType,
        stop: PosType,
    ) -> bool {
        self.start <= stop && self.stop >= start
    }

    /// Total number of features in this subtree, the feature itself
    /// included.
    pub fn count(&self) -> usize {
        1 + self
            .sub_features
            .iter()
            .map(Feature::count)
            .sum::<usize>()
    }

    /// Depth-first, pre-order traversal of this feature and its
    /// descendants.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.iter_nested().map(|n| n.feature)
    }

    /// Same traversal as [`Feature::iter`], also yielding each feature's
    /// direct parent and depth (the feature itself is at depth 0).
    pub fn iter_nested(&self) -> NestedIter<'_> {
        NestedIter {
            stack: vec![NestedFeature {
                feature: self,
                parent:  None,
                depth:   0,
            }],
        }
    }

    /// Dissolves the subtree into a flat list of childless features in
    /// pre-order.
    pub fn into_flat(self) -> Vec<Feature> {
        let mut flat = Vec::with_capacity(self.count());
        let mut stack = vec![self];
        while let Some(mut feature) = stack.pop() {
            let children = std::mem::take(&mut feature.sub_features);
            flat.push(feature);
            stack.extend(children.into_iter().rev());
        }
        flat
    }

    pub(crate) fn push_sub_feature(
        &mut self,
        feature: Feature,
    ) {
        self.sub_features.push(feature);
    }

    /// Ordering used wherever features are sorted: start, stop, strand,
    /// type, identifier.
    pub fn natural_cmp(
        &self,
        other: &Feature,
    ) -> Ordering {
        self.start
            .cmp(&other.start)
            .then(self.stop.cmp(&other.stop))
            .then(self.strand.cmp(&other.strand))
            .then(self.feature_type.cmp(&other.feature_type))
            .then_with(|| self.identifier.cmp(&other.identifier))
    }
}

/// Stable sort by [`Feature::natural_cmp`].
pub fn sort_features(features: &mut [Feature]) {
    features.sort_by(Feature::natural_cmp);
}

/// A feature visited by [`Feature::iter_nested`].
#[derive(Debug, Clone, Copy)]
pub struct NestedFeature<'a> {
    pub feature: &'a Feature,
    pub parent:  Option<&'a Feature>,
    pub depth:   usize,
}

pub struct NestedIter<'a> {
    stack: Vec<NestedFeature<'a>>,
}

impl<'a> Iterator for NestedIter<'a> {
    type Item = NestedFeature<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        self.stack.extend(
            current
                .feature
                .sub_features
                .iter()
                .rev()
                .map(|child| {
                    NestedFeature {
                        feature: child,
                        parent:  Some(current.feature),
                        depth:   current.depth + 1,
                    }
                }),
        );
        Some(current)
    }
}
