//! Turning annotation records into a feature hierarchy.
//!
//! - `record`: extraction of flat [`Feature`](crate::data_structs::Feature)s
//!   from GFF3, GTF and BED records.
//! - `hierarchy`: gene → RNA → exon → CDS nesting by interval containment.
//! - `linker`: nesting by `Parent` identifiers.

mod hierarchy;
mod linker;
mod record;

pub use hierarchy::{
    bucket_by_type,
    build_hierarchy,
    nest,
    FeatureBuckets,
    NestingStrategy,
};
pub use linker::link_by_parent_ids;
pub use record::{
    feature_from_gff,
    AnnotationFormat,
};
