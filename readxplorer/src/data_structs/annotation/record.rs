use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use anyhow::{
    anyhow,
    bail,
};
use bio::io::{
    bed,
    gff,
};
use percent_encoding::percent_decode_str;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::enums::{
    FeatureType,
    Strand,
};
use crate::data_structs::feature::Feature;
use crate::data_structs::typedef::PosType;

/// Annotation file formats features can be extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationFormat {
    Gff3,
    Gtf,
    Bed,
}

impl AnnotationFormat {
    /// Guesses the format from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let extension = path
            .as_ref()
            .extension()?
            .to_str()?
            .to_lowercase();
        match extension.as_str() {
            "gff" | "gff3" => Some(AnnotationFormat::Gff3),
            "gtf" | "gff2" => Some(AnnotationFormat::Gtf),
            "bed" => Some(AnnotationFormat::Bed),
            _ => None,
        }
    }

    pub(crate) fn gff_type(&self) -> Option<gff::GffType> {
        match self {
            AnnotationFormat::Gff3 => Some(gff::GffType::GFF3),
            AnnotationFormat::Gtf => Some(gff::GffType::GTF2),
            AnnotationFormat::Bed => None,
        }
    }
}

impl FromStr for AnnotationFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gff" | "gff3" => Ok(AnnotationFormat::Gff3),
            "gtf" | "gff2" => Ok(AnnotationFormat::Gtf),
            "bed" => Ok(AnnotationFormat::Bed),
            other => Err(anyhow!("Unknown annotation format '{}'", other)),
        }
    }
}

impl Display for AnnotationFormat {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(match self {
            AnnotationFormat::Gff3 => "gff3",
            AnnotationFormat::Gtf => "gtf",
            AnnotationFormat::Bed => "bed",
        })
    }
}

fn to_pos(
    value: u64,
    seqname: &str,
) -> anyhow::Result<PosType> {
    PosType::try_from(value).map_err(|_| {
        anyhow!(
            "Position {} on {} exceeds the supported coordinate range",
            value,
            seqname
        )
    })
}

fn clean_value(value: &str) -> &str {
    value.trim().trim_matches('"').trim()
}

/// Read-only access to the attribute column of a GFF/GTF record.
struct Attributes<'a> {
    record:   &'a gff::Record,
    /// GFF3 escapes reserved characters (`;`, `=`, `,`, ...) as `%XX`.
    unescape: bool,
}

impl<'a> Attributes<'a> {
    fn decode(
        &self,
        value: &str,
    ) -> String {
        if self.unescape {
            percent_decode_str(value)
                .decode_utf8_lossy()
                .into_owned()
        }
        else {
            value.to_string()
        }
    }

    /// First non-empty value among `keys`, in key order.
    fn first(
        &self,
        keys: &[&str],
    ) -> Option<String> {
        keys.iter()
            .filter_map(|key| self.record.attributes().get(*key))
            .map(|value| clean_value(value))
            .find(|value| !value.is_empty())
            .map(|value| self.decode(value))
    }

    /// All values of `key`, comma separated lists flattened.
    fn all(
        &self,
        key: &str,
    ) -> Vec<String> {
        self.record
            .attributes()
            .get_vec(key)
            .map(|values| {
                values
                    .iter()
                    .flat_map(|value| value.split(','))
                    .map(clean_value)
                    .filter(|value| !value.is_empty())
                    .map(|value| self.decode(value))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Converts one GFF3 or GTF record into a flat [`Feature`].
///
/// Reversed coordinates are swapped. Strands other than `-` are read as
/// forward.
pub fn feature_from_gff(
    record: &gff::Record,
    format: AnnotationFormat,
) -> anyhow::Result<Feature> {
    let seqname = record.seqname();
    let feature_type = record
        .feature_type()
        .parse::<FeatureType>()
        .unwrap_or_default();
    let base = Feature::new(
        feature_type,
        to_pos(*record.start(), seqname)?,
        to_pos(*record.end(), seqname)?,
        Strand::from(record.strand()),
    )
    .normalized();
    let attributes = Attributes {
        record,
        unescape: format == AnnotationFormat::Gff3,
    };

    let feature = match format {
        AnnotationFormat::Gff3 => {
            base.with_identifier(attributes.first(&["ID", "Name", "locus_tag"]))
                .with_locus_tag(attributes.first(&["locus_tag", "old_locus_tag"]))
                .with_product(attributes.first(&["product", "Note"]))
                .with_ec_number(attributes.first(&["EC_number", "ec_number"]))
                .with_gene_name(attributes.first(&["gene", "Name", "gene_name"]))
                .with_parent_ids(attributes.all("Parent"))
        },
        AnnotationFormat::Gtf => {
            let (identifier, parent_ids) = match feature_type {
                FeatureType::Gene => (attributes.first(&["gene_id"]), vec![]),
                FeatureType::Source => (None, vec![]),
                t if t.is_rna() => {
                    (
                        attributes.first(&["transcript_id"]),
                        attributes.all("gene_id"),
                    )
                },
                _ => {
                    (
                        attributes.first(&["exon_id"]),
                        attributes.all("transcript_id"),
                    )
                },
            };
            base.with_identifier(identifier)
                .with_locus_tag(attributes.first(&["locus_tag"]))
                .with_product(attributes.first(&["product"]))
                .with_ec_number(attributes.first(&["EC_number", "ec_number"]))
                .with_gene_name(attributes.first(&["gene_name", "gene_id"]))
                .with_parent_ids(parent_ids)
        },
        AnnotationFormat::Bed => {
            bail!("BED records are not GFF records")
        },
    };
    Ok(feature)
}

/// BED intervals are 0-based half-open; the feature is 1-based inclusive.
impl TryFrom<&bed::Record> for Feature {
    type Error = anyhow::Error;

    fn try_from(value: &bed::Record) -> Result<Self, Self::Error> {
        let seqname = value.chrom();
        let name = value
            .name()
            .map(clean_value)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        let feature = Feature::new(
            FeatureType::Undefined,
            to_pos(value.start() + 1, seqname)?,
            to_pos(value.end(), seqname)?,
            Strand::from(value.strand()),
        )
        .normalized()
        .with_locus_tag(name.clone())
        .with_identifier(name);
        Ok(feature)
    }
}
