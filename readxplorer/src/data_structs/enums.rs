use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord, Default)]
pub enum Strand {
    /// Forward strand.
    #[default]
    Forward,
    /// Reverse strand.
    Reverse,
}

/// Anything that is not `-` is read as forward.
impl FromStr for Strand {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "-" => Ok(Strand::Reverse),
            _ => Ok(Strand::Forward),
        }
    }
}

impl From<bio::bio_types::strand::Strand> for Strand {
    fn from(value: bio::bio_types::strand::Strand) -> Self {
        match value {
            bio::bio_types::strand::Strand::Reverse => Strand::Reverse,
            bio::bio_types::strand::Strand::Forward
            | bio::bio_types::strand::Strand::Unknown => Strand::Forward,
        }
    }
}

impl From<Option<bio::bio_types::strand::Strand>> for Strand {
    fn from(value: Option<bio::bio_types::strand::Strand>) -> Self {
        value.map(Strand::from).unwrap_or_default()
    }
}

impl From<bool> for Strand {
    fn from(value: bool) -> Self {
        match value {
            true => Strand::Forward,
            false => Strand::Reverse,
        }
    }
}

impl From<Strand> for char {
    fn from(value: Strand) -> Self {
        match value {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl Display for Strand {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

impl Serialize for Strand {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Strand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        std::str::FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Kind of an annotated region.
///
/// The set is closed: every annotation record maps onto one of these, with
/// [`FeatureType::Undefined`] catching everything the browser does not
/// model.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord, Default)]
pub enum FeatureType {
    Gene,
    Cds,
    Exon,
    MRna,
    RRna,
    TRna,
    MiscRna,
    NcRna,
    RepeatUnit,
    Source,
    #[default]
    Undefined,
}

impl FeatureType {
    /// RNA kinds merged into one level when the hierarchy is built, in the
    /// order their buckets are concatenated.
    pub const RNA_TYPES: [FeatureType; 5] = [
        FeatureType::MRna,
        FeatureType::RRna,
        FeatureType::TRna,
        FeatureType::MiscRna,
        FeatureType::NcRna,
    ];

    pub fn is_rna(&self) -> bool {
        Self::RNA_TYPES.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Gene => "gene",
            FeatureType::Cds => "CDS",
            FeatureType::Exon => "exon",
            FeatureType::MRna => "mRNA",
            FeatureType::RRna => "rRNA",
            FeatureType::TRna => "tRNA",
            FeatureType::MiscRna => "misc_RNA",
            FeatureType::NcRna => "ncRNA",
            FeatureType::RepeatUnit => "repeat_unit",
            FeatureType::Source => "source",
            FeatureType::Undefined => "undefined",
        }
    }
}

impl FromStr for FeatureType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "gene" | "pseudogene" => FeatureType::Gene,
            "cds" => FeatureType::Cds,
            "exon" => FeatureType::Exon,
            "mrna" | "transcript" => FeatureType::MRna,
            "rrna" => FeatureType::RRna,
            "trna" => FeatureType::TRna,
            "misc_rna" | "misc-rna" => FeatureType::MiscRna,
            "ncrna" | "non_coding_rna" | "lnc_rna" | "lncrna" => {
                FeatureType::NcRna
            },
            "repeat_unit" => FeatureType::RepeatUnit,
            "source" | "region" => FeatureType::Source,
            _ => FeatureType::Undefined,
        })
    }
}

impl Display for FeatureType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FeatureType {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FeatureType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        std::str::FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}
