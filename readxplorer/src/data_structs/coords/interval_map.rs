use itertools::Itertools;
use rust_lapper::{
    Interval,
    Lapper,
};

use crate::data_structs::feature::Feature;
use crate::data_structs::typedef::PosType;

/// Interval index over a list of features, storing positions into that
/// list.
///
/// Lapper works on half-open intervals, so each inclusive feature span
/// `[start, stop]` is stored as `[start, stop + 1)`. Bounds are widened to
/// `u64` so a span ending at `PosType::MAX` keeps its last position.
#[derive(Debug, Clone)]
pub struct FeatureIndex {
    inner: Lapper<u64, usize>,
}

impl Default for FeatureIndex {
    fn default() -> Self {
        Self {
            inner: Lapper::new(vec![]),
        }
    }
}

impl FeatureIndex {
    pub fn new(features: &[Feature]) -> Self {
        let intervals = features
            .iter()
            .enumerate()
            .map(|(idx, feature)| {
                let (start, stop) = if feature.start() <= feature.stop() {
                    (feature.start(), feature.stop())
                }
                else {
                    (feature.stop(), feature.start())
                };
                Interval {
                    start: u64::from(start),
                    stop:  u64::from(stop) + 1,
                    val:   idx,
                }
            })
            .collect_vec();
        Self {
            inner: Lapper::new(intervals),
        }
    }

    /// Positions of the indexed features overlapping the inclusive window
    /// `[start, stop]`, in ascending order.
    pub fn find(
        &self,
        start: PosType,
        stop: PosType,
    ) -> Vec<usize> {
        self.inner
            .find(u64::from(start), u64::from(stop) + 1)
            .map(|iv| iv.val)
            .sorted_unstable()
            .collect_vec()
    }
}
