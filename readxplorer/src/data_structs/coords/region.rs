use std::fmt::Display;
use std::str::FromStr;

use anyhow::{
    anyhow,
    bail,
};
use arcstr::ArcStr;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::{
    LengthType,
    PosType,
};

/// Window on a named sequence, 1-based and inclusive at both ends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    seqname: ArcStr,
    start:   PosType,
    end:     PosType,
}

impl Region {
    pub fn try_new(
        seqname: impl Into<ArcStr>,
        start: PosType,
        end: PosType,
    ) -> anyhow::Result<Self> {
        if start == 0 {
            bail!("Region start must be at least 1 (coordinates are 1-based)")
        }
        if start > end {
            bail!("Region start {} is greater than end {}", start, end)
        }
        Ok(Self {
            seqname: seqname.into(),
            start,
            end,
        })
    }

    pub fn seqname(&self) -> &ArcStr {
        &self.seqname
    }

    pub fn start(&self) -> PosType {
        self.start
    }

    pub fn end(&self) -> PosType {
        self.end
    }

    pub fn length(&self) -> LengthType {
        LengthType::from(self.end - self.start) + 1
    }
}

/// Parses `seqname:start-end`. Thousands separators (`,` or `_`) in the
/// coordinates are ignored. The sequence name may itself contain `:`.
impl FromStr for Region {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (seqname, range) = s
            .trim()
            .rsplit_once(':')
            .ok_or(anyhow!("Missing ':' in region '{}'", s))?;
        if seqname.is_empty() {
            bail!("Missing sequence name in region '{}'", s)
        }
        let (start, end) = range
            .split_once('-')
            .ok_or(anyhow!("Missing '-' in region '{}'", s))?;

        let parse_pos = |value: &str| -> anyhow::Result<PosType> {
            value
                .chars()
                .filter(|c| !matches!(c, ',' | '_'))
                .collect::<String>()
                .parse::<PosType>()
                .map_err(|e| anyhow!("Invalid position '{}' in region '{}': {}", value, s, e))
        };

        Region::try_new(seqname, parse_pos(start)?, parse_pos(end)?)
    }
}

impl Display for Region {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.seqname, self.start, self.end)
    }
}
