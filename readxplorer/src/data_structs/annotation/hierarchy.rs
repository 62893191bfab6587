use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::enums::FeatureType;
use crate::data_structs::feature::{
    sort_features,
    Feature,
};

/// Features of one chromosome grouped by type, in order of first
/// appearance.
pub type FeatureBuckets = IndexMap<FeatureType, Vec<Feature>>;

/// How children are matched to their containing parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NestingStrategy {
    /// Every child is checked against all parents that start at or before
    /// it. A child stays unmatched only if no parent contains it.
    #[default]
    FullScan,
    /// Linear two-pointer scan that resumes from just before the last
    /// matched parent. Fast on sorted, mostly disjoint annotations, but can
    /// miss a containing parent that lies before the cursor.
    TwoPointer,
}

/// Groups features by type. Buckets keep the order in which their type
/// first appears, and features keep their input order inside a bucket.
pub fn bucket_by_type<I>(features: I) -> FeatureBuckets
where
    I: IntoIterator<Item = Feature>, {
    let mut buckets = FeatureBuckets::new();
    for feature in features {
        buckets
            .entry(feature.feature_type())
            .or_default()
            .push(feature);
    }
    buckets
}

/// Rebuilds the gene → RNA → exon → CDS hierarchy of one chromosome.
///
/// Genes form the top level. All RNA kinds are merged into one level, exons
/// (when present) take the CDS features, and every level is nested into the
/// next by strand-aware interval containment. Anything that finds no parent
/// stays a peer of its level. Buckets of other types are appended as they
/// are, in bucket order.
///
/// The returned list holds every input feature exactly once, either at the
/// top level or below exactly one parent.
pub fn build_hierarchy(
    mut buckets: FeatureBuckets,
    strategy: NestingStrategy,
) -> Vec<Feature> {
    let genes = buckets
        .shift_remove(&FeatureType::Gene)
        .unwrap_or_default();
    let rnas = FeatureType::RNA_TYPES
        .iter()
        .filter_map(|rna_type| buckets.shift_remove(rna_type))
        .concat();
    let cds = buckets
        .shift_remove(&FeatureType::Cds)
        .unwrap_or_default();

    debug!(
        "Building hierarchy from {} genes, {} RNAs, {} CDS and {} other buckets",
        genes.len(),
        rnas.len(),
        cds.len(),
        buckets.len()
    );

    let exon_level = match buckets.shift_remove(&FeatureType::Exon) {
        Some(exons) => nest(cds, exons, strategy),
        None => cds,
    };
    let rna_level = nest(exon_level, rnas, strategy);
    let mut top_level = nest(rna_level, genes, strategy);

    top_level.extend(buckets.into_values().flatten());
    top_level
}

/// Attaches each child to the first parent, in sorted order, that contains
/// it on the same strand.
///
/// Returns the parents together with the unmatched children, sorted by
/// [`Feature::natural_cmp`].
pub fn nest(
    mut children: Vec<Feature>,
    mut parents: Vec<Feature>,
    strategy: NestingStrategy,
) -> Vec<Feature> {
    sort_features(&mut children);
    sort_features(&mut parents);

    let mut unmatched = Vec::new();
    match strategy {
        NestingStrategy::FullScan => {
            for child in children {
                let found = parents
                    .iter()
                    .take_while(|parent| parent.start() <= child.start())
                    .position(|parent| parent.contains(&child));
                match found {
                    Some(idx) => parents[idx].push_sub_feature(child),
                    None => unmatched.push(child),
                }
            }
        },
        NestingStrategy::TwoPointer => {
            let mut cursor = 0;
            for child in children {
                let mut found = None;
                for (idx, parent) in parents.iter().enumerate().skip(cursor) {
                    if parent.contains(&child) {
                        found = Some(idx);
                        break;
                    }
                    else if parent.start() > child.stop() {
                        break;
                    }
                }
                match found {
                    Some(idx) => {
                        parents[idx].push_sub_feature(child);
                        // Step back one so the preceding parent is checked
                        // again for the next child.
                        cursor = idx.saturating_sub(1);
                    },
                    None => unmatched.push(child),
                }
            }
        },
    }

    if !unmatched.is_empty() {
        debug!("{} features found no containing parent", unmatched.len());
    }
    parents.extend(unmatched);
    sort_features(&mut parents);
    parents
}
