//! Reading annotation files into a [`Reference`](crate::data_structs::Reference)
//! and writing it back out as a feature table.

pub mod export;
pub mod reader;

use std::fs::File;
use std::io::{
    BufReader,
    Read,
};
use std::path::Path;

use anyhow::Context;
use noodles_fasta::io::Indexer;

use crate::data_structs::typedef::LengthType;

/// Sequence names and lengths from a FASTA index (`.fai`), in index order.
pub fn read_chrs_from_fai<R: Read>(
    reader: R
) -> anyhow::Result<Vec<(String, LengthType)>> {
    let records: Vec<noodles_fasta::fai::Record> =
        noodles_fasta::fai::io::Reader::new(BufReader::new(reader))
            .read_index()?
            .into();
    Ok(records
        .into_iter()
        .map(|r| (String::from_utf8_lossy(r.name()).to_string(), r.length()))
        .collect())
}

/// Sequence names and lengths by indexing a FASTA file on the fly.
pub fn read_chrs_from_fa<R: Read>(
    reader: R
) -> anyhow::Result<Vec<(String, LengthType)>> {
    let mut indexer = Indexer::new(BufReader::new(reader));
    let mut records = Vec::new();

    while let Some(record) = indexer.index_record()? {
        records.push(record);
    }

    Ok(records
        .into_iter()
        .map(|r| (String::from_utf8_lossy(r.name()).to_string(), r.length()))
        .collect())
}

/// Sequence names and lengths from either a `.fai` index or a FASTA file,
/// told apart by the extension.
pub fn read_chrom_lengths<P: AsRef<Path>>(
    path: P
) -> anyhow::Result<Vec<(String, LengthType)>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let is_index = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("fai"))
        .unwrap_or(false);
    if is_index {
        read_chrs_from_fai(file)
    }
    else {
        read_chrs_from_fa(file)
    }
    .with_context(|| format!("Failed to read sequence lengths from {}", path.display()))
}
