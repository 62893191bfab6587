use std::io::stdout;
use std::path::PathBuf;

use clap::Args;
use console::style;
use log::warn;
use readxplorer::prelude::*;
use serde::Serialize;

use crate::utils::{
    validate_input,
    AnnotationArgs,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct QueryArgs {
    #[arg(required = true, help = "Path to the annotation file.")]
    file: PathBuf,

    #[arg(
        short,
        long,
        num_args = 1..,
        required = true,
        help = "Regions to look up (chr:start-end)."
    )]
    region: Vec<Region>,

    #[clap(flatten)]
    annotation: AnnotationArgs,
}

#[derive(Debug, Serialize)]
struct HitRow<'a> {
    region:       String,
    #[serde(rename = "type")]
    feature_type: FeatureType,
    start:        PosType,
    stop:         PosType,
    strand:       Strand,
    identifier:   &'a str,
    gene_name:    &'a str,
    product:      &'a str,
    sub_features: usize,
}

impl QueryArgs {
    pub fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        validate_input(&self.file)?;
        let reference = self.annotation.read(&self.file)?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_writer(stdout().lock());
        for region in self.region.iter() {
            if reference.chromosome(region.seqname()).is_none() {
                warn!(
                    "Sequence {} is not annotated in {}",
                    style(region.seqname()).red(),
                    self.file.display()
                );
                continue;
            }
            for feature in reference.features_in(region) {
                writer.serialize(HitRow {
                    region:       region.to_string(),
                    feature_type: feature.feature_type(),
                    start:        feature.start(),
                    stop:         feature.stop(),
                    strand:       feature.strand(),
                    identifier:   feature.identifier().unwrap_or_default(),
                    gene_name:    feature.gene_name().unwrap_or_default(),
                    product:      feature.product().unwrap_or_default(),
                    sub_features: feature.count() - 1,
                })?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
