use std::io::{
    stdout,
    BufWriter,
    Write,
};

use clap::Args;
use console::style;
use log::info;
use readxplorer::prelude::*;

use crate::utils::{
    collect_inputs,
    AnnotationArgs,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct TreeArgs {
    #[arg(
        value_parser,
        num_args = 1..,
        required = true,
        help = "Paths to annotation files. Wildcards are expanded."
    )]
    files: Vec<String>,

    #[arg(long, help = "Only show features overlapping this region (chr:start-end).")]
    region: Option<Region>,

    #[arg(long, default_value_t = false, help = "Print the hierarchy as JSON.")]
    json: bool,

    #[clap(flatten)]
    annotation: AnnotationArgs,
}

impl TreeArgs {
    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let paths = collect_inputs(&self.files)?;
        let progress_bar = utils.progress_bar(paths.len())?;
        let mut out = BufWriter::new(stdout().lock());

        for path in paths.iter() {
            let reference = self.annotation.read(path)?;
            progress_bar.inc(1);

            if self.json {
                serde_json::to_writer_pretty(&mut out, &reference)?;
                writeln!(out)?;
                continue;
            }

            writeln!(out, "{}", style(path.display()).bold())?;
            for chr in reference.chromosomes() {
                let features = match &self.region {
                    Some(region) if region.seqname() == chr.name() => {
                        chr.features_in(region.start(), region.end())
                    },
                    Some(_) => continue,
                    None => chr.features().iter().collect(),
                };
                writeln!(
                    out,
                    "{} ({} bp, {} features)",
                    style(chr.name()).cyan(),
                    chr.length(),
                    chr.feature_count()
                )?;
                for feature in features {
                    write_subtree(&mut out, feature)?;
                }
            }
        }
        out.flush()?;
        progress_bar.finish_and_clear();
        info!("Printed {} annotation files", paths.len());
        Ok(())
    }
}

fn write_subtree<W: Write>(
    out: &mut W,
    feature: &Feature,
) -> anyhow::Result<()> {
    for nested in feature.iter_nested() {
        let feature = nested.feature;
        writeln!(
            out,
            "{}{} {}..{} {} {}",
            "  ".repeat(nested.depth + 1),
            style(feature.feature_type()).green(),
            feature.start(),
            feature.stop(),
            feature.strand(),
            feature
                .identifier()
                .or(feature.locus_tag())
                .unwrap_or("-")
        )?;
    }
    Ok(())
}
