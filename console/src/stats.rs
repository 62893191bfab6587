use std::io::stdout;
use std::path::PathBuf;

use clap::Args;
use itertools::Itertools;
use log::info;
use rayon::prelude::*;
use readxplorer::prelude::*;
use serde::Serialize;

use crate::utils::{
    collect_inputs,
    AnnotationArgs,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct StatsArgs {
    #[arg(
        value_parser,
        num_args = 1..,
        required = true,
        help = "Paths to annotation files. Wildcards are expanded."
    )]
    files: Vec<String>,

    #[arg(
        long,
        default_value_t = false,
        help = "Report feature counts per type instead of per chromosome."
    )]
    by_type: bool,

    #[clap(flatten)]
    annotation: AnnotationArgs,
}

#[derive(Debug, Serialize)]
struct ChromosomeRow<'a> {
    file:       &'a str,
    chromosome: &'a str,
    length:     LengthType,
    top_level:  usize,
    features:   usize,
}

#[derive(Debug, Serialize)]
struct TypeRow<'a> {
    file:         &'a str,
    chromosome:   &'a str,
    #[serde(rename = "type")]
    feature_type: FeatureType,
    count:        usize,
}

impl StatsArgs {
    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let paths = collect_inputs(&self.files)?;
        let progress_bar = utils.progress_bar(paths.len())?;

        let references = paths
            .par_iter()
            .map(|path| {
                let reference = self.annotation.read(path);
                progress_bar.inc(1);
                reference.map(|reference| (path.clone(), reference))
            })
            .collect::<anyhow::Result<Vec<(PathBuf, Reference)>>>()?;
        progress_bar.finish_and_clear();

        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_writer(stdout().lock());
        for (path, reference) in references.iter() {
            let file = path.to_string_lossy();
            for chr in reference.chromosomes() {
                if self.by_type {
                    let counts = chr
                        .iter_all()
                        .map(|feature| feature.feature_type())
                        .counts();
                    for (feature_type, count) in counts.into_iter().sorted() {
                        writer.serialize(TypeRow {
                            file: &file,
                            chromosome: chr.name().as_str(),
                            feature_type,
                            count,
                        })?;
                    }
                }
                else {
                    writer.serialize(ChromosomeRow {
                        file:       &file,
                        chromosome: chr.name().as_str(),
                        length:     chr.length(),
                        top_level:  chr.features().len(),
                        features:   chr.feature_count(),
                    })?;
                }
            }
            info!(
                "{}: {} chromosomes, {} features",
                file,
                reference.len(),
                reference.feature_count()
            );
        }
        writer.flush()?;
        Ok(())
    }
}
