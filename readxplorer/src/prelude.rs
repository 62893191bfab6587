pub use crate::data_structs::annotation::{
    bucket_by_type,
    build_hierarchy,
    feature_from_gff,
    link_by_parent_ids,
    nest,
    AnnotationFormat,
    FeatureBuckets,
    NestingStrategy,
};
pub use crate::data_structs::typedef::{
    LengthType,
    PosType,
};
pub use crate::data_structs::{
    Chromosome,
    Feature,
    FeatureType,
    Reference,
    Region,
    Strand,
};
pub use crate::io::export::write_feature_table;
pub use crate::io::reader::{
    AnnotationReaderBuilder,
    HierarchyMode,
};
