use std::io::Write;

use serde::Serialize;

use crate::data_structs::genome::Reference;
use crate::data_structs::typedef::PosType;
use crate::data_structs::{
    FeatureType,
    Strand,
};

/// One line of the feature table.
#[derive(Debug, Serialize)]
struct FeatureRow<'a> {
    chromosome:   &'a str,
    #[serde(rename = "type")]
    feature_type: FeatureType,
    start:        PosType,
    stop:         PosType,
    strand:       Strand,
    identifier:   &'a str,
    locus_tag:    &'a str,
    gene_name:    &'a str,
    product:      &'a str,
    ec_number:    &'a str,
    parent:       &'a str,
    depth:        usize,
}

/// Writes every feature of `reference` as a tab-separated table, one row
/// per feature in depth-first order. Missing values are left empty; `parent`
/// holds the identifier of the enclosing feature.
pub fn write_feature_table<W: Write>(
    reference: &Reference,
    writer: W,
) -> anyhow::Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_writer(writer);

    let mut n_rows = 0;
    for chr in reference.chromosomes() {
        for nested in chr
            .features()
            .iter()
            .flat_map(|feature| feature.iter_nested())
        {
            let feature = nested.feature;
            writer.serialize(FeatureRow {
                chromosome:   chr.name().as_str(),
                feature_type: feature.feature_type(),
                start:        feature.start(),
                stop:         feature.stop(),
                strand:       feature.strand(),
                identifier:   feature.identifier().unwrap_or_default(),
                locus_tag:    feature.locus_tag().unwrap_or_default(),
                gene_name:    feature.gene_name().unwrap_or_default(),
                product:      feature.product().unwrap_or_default(),
                ec_number:    feature.ec_number().unwrap_or_default(),
                parent:       nested
                    .parent
                    .and_then(|parent| parent.identifier())
                    .unwrap_or_default(),
                depth:        nested.depth,
            })?;
            n_rows += 1;
        }
    }
    writer.flush()?;
    Ok(n_rows)
}
