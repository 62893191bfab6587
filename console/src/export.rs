use std::fs::File;
use std::io::{
    stdout,
    BufWriter,
};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use log::info;
use readxplorer::prelude::*;

use crate::utils::{
    validate_input,
    AnnotationArgs,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct ExportArgs {
    #[arg(required = true, help = "Path to the annotation file.")]
    file: PathBuf,

    #[arg(
        short,
        long,
        help = "Path of the output table. Written to stdout if not set."
    )]
    output: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = false,
        help = "Write the hierarchy as JSON instead of a table."
    )]
    json: bool,

    #[clap(flatten)]
    annotation: AnnotationArgs,
}

impl ExportArgs {
    pub fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        validate_input(&self.file)?;
        let reference = self.annotation.read(&self.file)?;

        match self.output.as_ref() {
            Some(output) => {
                let sink = File::create(output).with_context(|| {
                    format!("Failed to create {}", output.display())
                })?;
                self.write(&reference, BufWriter::new(sink))?;
                info!("Exported {} features to {}", reference.feature_count(), output.display());
            },
            None => self.write(&reference, BufWriter::new(stdout().lock()))?,
        }
        Ok(())
    }

    fn write<W: std::io::Write>(
        &self,
        reference: &Reference,
        mut sink: W,
    ) -> anyhow::Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut sink, reference)?;
            sink.flush()?;
        }
        else {
            write_feature_table(reference, sink)?;
        }
        Ok(())
    }
}
