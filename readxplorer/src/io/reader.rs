use std::fs::File;
use std::io::Read;
use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    anyhow,
    Context,
};
use arcstr::ArcStr;
use bio::io::{
    bed,
    gff,
};
use indexmap::IndexMap;
use log::{
    debug,
    info,
    warn,
};
use rayon::prelude::*;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::annotation::{
    bucket_by_type,
    build_hierarchy,
    feature_from_gff,
    link_by_parent_ids,
    AnnotationFormat,
    NestingStrategy,
};
use crate::data_structs::feature::Feature;
use crate::data_structs::genome::{
    Chromosome,
    Reference,
};
use crate::data_structs::typedef::LengthType;
use crate::io::read_chrom_lengths;
use crate::utils::THREAD_POOL;
use crate::with_field_fn;

const SEQUENCE_REGION_PRAGMA: &[u8] = b"##sequence-region";
const FASTA_PRAGMA: &[u8] = b"##FASTA";

/// Source of the parent-child relations between features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HierarchyMode {
    /// Nest by strand-aware interval containment.
    #[default]
    Containment,
    /// Follow `Parent` identifiers (GFF3) or transcript/gene ids (GTF).
    ParentIds,
}

/// Builds a [`Reference`] from one annotation file.
///
/// ```no_run
/// use readxplorer::prelude::*;
///
/// fn main() -> anyhow::Result<()> {
///     let reference = AnnotationReaderBuilder::default()
///         .with_fai_path(Some("genome.fa.fai".into()))
///         .read_path("annotation.gff3")?;
///     for chr in reference.chromosomes() {
///         println!("{}: {} features", chr.name(), chr.feature_count());
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnnotationReaderBuilder {
    format:    Option<AnnotationFormat>,
    fai_path:  Option<PathBuf>,
    hierarchy: HierarchyMode,
    nesting:   NestingStrategy,
    name:      Option<String>,
}

impl AnnotationReaderBuilder {
    with_field_fn!(format, Option<AnnotationFormat>);

    with_field_fn!(fai_path, Option<PathBuf>);

    with_field_fn!(hierarchy, HierarchyMode);

    with_field_fn!(nesting, NestingStrategy);

    with_field_fn!(name, Option<String>);

    /// Reads the file at `path`. The format is detected from the extension
    /// unless set explicitly, and the reference is named after the file
    /// stem unless a name was given.
    pub fn read_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> anyhow::Result<Reference> {
        let path = path.as_ref();
        let format = match self.format {
            Some(format) => format,
            None => {
                AnnotationFormat::from_path(path).ok_or(anyhow!(
                    "Cannot detect the annotation format of {}",
                    path.display()
                ))?
            },
        };
        let name = self.name.clone().or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
        });
        let file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let reference = self
            .clone()
            .with_format(Some(format))
            .with_name(name)
            .read(file)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        info!(
            "Read {} features on {} sequences from {}",
            reference.feature_count(),
            reference.len(),
            path.display()
        );
        Ok(reference)
    }

    /// Reads annotation records from `reader`. The format must be set.
    pub fn read<R: Read>(
        &self,
        mut reader: R,
    ) -> anyhow::Result<Reference> {
        let format = self.format.ok_or(anyhow!(
            "Annotation format must be set when reading from a stream"
        ))?;
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        let (pragma_lengths, body) = match format {
            AnnotationFormat::Bed => (IndexMap::new(), content.as_slice()),
            _ => scan_pragmas(&content),
        };
        let grouped = match format {
            AnnotationFormat::Bed => read_bed_features(body)?,
            _ => read_gff_features(body, format)?,
        };
        let fai_lengths = self
            .fai_path
            .as_ref()
            .map(read_chrom_lengths)
            .transpose()?;

        let layout = chromosome_layout(grouped, pragma_lengths, fai_lengths);
        let hierarchy = self.hierarchy;
        let nesting = self.nesting;
        let chromosomes = THREAD_POOL.install(|| {
            layout
                .into_par_iter()
                .map(|(name, length, features)| {
                    let length = length.unwrap_or_else(|| max_stop(&features));
                    let n_features = features.len();
                    let top_level = match hierarchy {
                        HierarchyMode::Containment => {
                            build_hierarchy(bucket_by_type(features), nesting)
                        },
                        HierarchyMode::ParentIds => link_by_parent_ids(features),
                    };
                    debug!(
                        "{}: {} features, {} at top level",
                        name,
                        n_features,
                        top_level.len()
                    );
                    Chromosome::new(name, length, top_level)
                })
                .collect::<Vec<_>>()
        });

        Ok(Reference::new(self.name.clone(), chromosomes))
    }
}

type SeqFeatures = IndexMap<ArcStr, Vec<Feature>>;

fn read_gff_features(
    body: &[u8],
    format: AnnotationFormat,
) -> anyhow::Result<SeqFeatures> {
    let gff_type = format
        .gff_type()
        .ok_or(anyhow!("{} is not a GFF flavour", format))?;
    let mut grouped = SeqFeatures::new();
    let mut reader = gff::Reader::new(body, gff_type);
    for (idx, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("Malformed {} record #{}", format, idx + 1))?;
        let feature = feature_from_gff(&record, format)?;
        grouped
            .entry(ArcStr::from(record.seqname()))
            .or_default()
            .push(feature);
    }
    Ok(grouped)
}

fn read_bed_features(body: &[u8]) -> anyhow::Result<SeqFeatures> {
    let body = strip_bed_headers(body);
    let mut grouped = SeqFeatures::new();
    let mut reader = bed::Reader::new(body.as_slice());
    for (idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Malformed BED record #{}", idx + 1))?;
        let feature = Feature::try_from(&record)?;
        grouped
            .entry(ArcStr::from(record.chrom()))
            .or_default()
            .push(feature);
    }
    Ok(grouped)
}

/// Drops `track` and `browser` header lines, comments and blank lines.
fn strip_bed_headers(body: &[u8]) -> Vec<u8> {
    let mut records = Vec::with_capacity(body.len());
    let mut n_skipped = 0usize;
    for line in body.split_inclusive(|byte| *byte == b'\n') {
        let keyword = line
            .split(|byte| byte.is_ascii_whitespace())
            .next()
            .unwrap_or_default();
        if matches!(keyword, b"" | b"track" | b"browser") || keyword.starts_with(b"#") {
            n_skipped += 1;
            continue;
        }
        records.extend_from_slice(line);
    }
    if n_skipped > 0 {
        debug!("Skipped {} BED header or comment lines", n_skipped);
    }
    records
}

/// Collects `##sequence-region` lengths and cuts the input at `##FASTA`.
fn scan_pragmas(content: &[u8]) -> (IndexMap<String, LengthType>, &[u8]) {
    let mut lengths = IndexMap::new();
    let mut offset = 0;
    for line in content.split(|byte| *byte == b'\n') {
        if line.starts_with(FASTA_PRAGMA) {
            return (lengths, &content[..offset]);
        }
        if line.starts_with(SEQUENCE_REGION_PRAGMA) {
            let text = String::from_utf8_lossy(line);
            let fields = text.split_whitespace().collect::<Vec<_>>();
            match fields.as_slice() {
                [_, seqid, _, end] => {
                    match end.parse::<LengthType>() {
                        Ok(end) => {
                            lengths.insert(seqid.to_string(), end);
                        },
                        Err(_) => warn!("Ignoring malformed pragma '{}'", text.trim()),
                    }
                },
                _ => warn!("Ignoring malformed pragma '{}'", text.trim()),
            }
        }
        offset += line.len() + 1;
    }
    (lengths, content)
}

/// Orders sequences and pairs them with a known length, if any.
///
/// With a FASTA index, its order and lengths win and indexed sequences
/// without features are kept. Otherwise sequences follow the
/// `##sequence-region` pragmas, then the order of first appearance.
fn chromosome_layout(
    mut grouped: SeqFeatures,
    pragma_lengths: IndexMap<String, LengthType>,
    fai_lengths: Option<Vec<(String, LengthType)>>,
) -> Vec<(ArcStr, Option<LengthType>, Vec<Feature>)> {
    let mut layout = Vec::with_capacity(grouped.len());
    match fai_lengths {
        Some(fai_lengths) => {
            for (name, length) in fai_lengths {
                let features = grouped
                    .shift_remove(name.as_str())
                    .unwrap_or_default();
                layout.push((ArcStr::from(name), Some(length), features));
            }
            for (name, features) in grouped {
                warn!(
                    "Sequence {} has {} features but is missing from the FASTA index",
                    name,
                    features.len()
                );
                layout.push((name, None, features));
            }
        },
        None => {
            for (name, length) in pragma_lengths {
                let features = grouped
                    .shift_remove(name.as_str())
                    .unwrap_or_default();
                layout.push((ArcStr::from(name), Some(length), features));
            }
            for (name, features) in grouped {
                layout.push((name, None, features));
            }
        },
    }
    layout
}

fn max_stop(features: &[Feature]) -> LengthType {
    features
        .iter()
        .map(|f| LengthType::from(f.start().max(f.stop())))
        .max()
        .unwrap_or(0)
}
