//! # readxplorer
//!
//! `readxplorer` is the annotation core of the ReadXplorer genome browser.
//! It reads genome annotations (GFF3, GTF, BED), turns every record into a
//! flat [`Feature`](data_structs::Feature), and rebuilds the biological
//! hierarchy gene → RNA → exon → CDS so that viewers can draw a gene with
//! its transcripts and coding regions as one unit.
//!
//! If you do not want to use readxplorer as a crate, check out the
//! `readxplorer` command line tool in the `readxplorer-ci` package.
//!
//! ## Key Features
//!
//! * **Feature model**: typed features ([`FeatureType`](data_structs::FeatureType))
//!   with 1-based inclusive coordinates, strand, descriptive attributes and
//!   nested sub-features.
//! * **Hierarchy reconstruction**: strand-aware interval containment
//!   ([`build_hierarchy`](data_structs::annotation::build_hierarchy)), or
//!   `Parent` identifiers
//!   ([`link_by_parent_ids`](data_structs::annotation::link_by_parent_ids)).
//! * **Reference assembly**: per-chromosome feature lists with lengths from a
//!   FASTA index or `##sequence-region` pragmas, built in parallel with
//!   Rayon.
//! * **Queries and export**: interval lookups backed by `rust-lapper`,
//!   per-type counts, a tab-separated feature table and JSON via `serde`.
//!
//! Number of threads to be used can be configured with the
//! `READXPLORER_NUM_THREADS` environment variable.
//!
//! ## Structure
//!
//! * [`data_structs`]: the feature model, hierarchy builders, chromosomes and
//!   references, coordinates.
//! * [`io`]: reading annotation files and FASTA indexes, exporting tables.
//! * [`utils`]: thread pool and builder macros.
//!
//! ## Usage
//!
//! ### Building a hierarchy from features
//!
//! ```
//! use readxplorer::prelude::*;
//!
//! let features = vec![
//!     Feature::new(FeatureType::Gene, 100, 500, Strand::Forward),
//!     Feature::new(FeatureType::MRna, 100, 500, Strand::Forward),
//!     Feature::new(FeatureType::Cds, 120, 480, Strand::Forward),
//! ];
//! let top_level = build_hierarchy(
//!     bucket_by_type(features),
//!     NestingStrategy::default(),
//! );
//!
//! assert_eq!(top_level.len(), 1);
//! assert_eq!(top_level[0].count(), 3);
//! ```
//!
//! ### Reading an annotation file
//!
//! ```no_run
//! use readxplorer::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let reference = AnnotationReaderBuilder::default()
//!         .with_hierarchy(HierarchyMode::Containment)
//!         .read_path("path/to/annotation.gff3")?;
//!
//!     let region: Region = "chr1:1000-5000".parse()?;
//!     for feature in reference.features_in(&region) {
//!         println!(
//!             "{} {}-{} ({} sub-features)",
//!             feature.feature_type(),
//!             feature.start(),
//!             feature.stop(),
//!             feature.sub_features().len()
//!         );
//!     }
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod io;
pub mod prelude;
pub mod utils;
