use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    anyhow,
    bail,
};
use clap::{
    Args,
    ValueEnum,
};
use console::style;
use glob::glob;
use indicatif::{
    ProgressBar,
    ProgressStyle,
};
use log::{
    debug,
    LevelFilter,
};
use readxplorer::prelude::*;
use readxplorer::utils::{
    n_threads,
    NUM_THREADS_ENV,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(
        long,
        default_value_t = 1,
        help = "Number of threads to use.",
        help_heading = "UTILS"
    )]
    pub threads:  usize,
    #[arg(
        short,
        long,
        default_value_t = false,
        help = "Verbose output.",
        help_heading = "UTILS"
    )]
    pub verbose:  bool,
    #[arg(
        long,
        default_value_t = false,
        help = "Display progress bar.",
        help_heading = "UTILS"
    )]
    pub progress: bool,
}

impl UtilsArgs {
    pub fn setup(&self) -> anyhow::Result<()> {
        init_logger(self.verbose)?;
        init_rayon_threads(self.threads)?;
        debug!("Using {} threads", n_threads());
        Ok(())
    }

    pub fn progress_bar(
        &self,
        total: usize,
    ) -> anyhow::Result<ProgressBar> {
        if self.progress {
            init_pbar(total)
        }
        else {
            Ok(ProgressBar::hidden())
        }
    }
}

/// `--verbose` lowers the level to debug; `RUST_LOG` overrides both.
pub(crate) fn init_logger(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    }
    else {
        LevelFilter::Info
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .try_init()?;
    Ok(())
}

pub(crate) fn init_rayon_threads(threads: usize) -> anyhow::Result<()> {
    // Read once by the library pool on first use.
    std::env::set_var(NUM_THREADS_ENV, threads.to_string());
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;
    Ok(())
}

pub fn init_pbar(total: usize) -> anyhow::Result<ProgressBar> {
    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}, ETA: {eta}] \
                 [{bar:40.cyan/blue}] {pos:>5.green}/{len:5} {msg}",
            )?
            .progress_chars("#>-"),
    );
    progress_bar.set_message("Processing...");
    Ok(progress_bar)
}

pub(crate) fn expand_wildcards(paths: &[String]) -> Vec<PathBuf> {
    let mut expanded_paths = Vec::new();

    for path in paths {
        if path.contains('*') || path.contains('?') {
            match glob(path) {
                Ok(matches) => {
                    for entry in matches.filter_map(Result::ok) {
                        expanded_paths.push(entry);
                    }
                },
                Err(e) => {
                    eprintln!(
                        "Error processing wildcard '{}': {}",
                        style(path).red(),
                        e
                    )
                },
            }
        }
        else {
            expanded_paths.push(PathBuf::from(path));
        }
    }

    expanded_paths
}

pub(crate) fn validate_input(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        bail!("Path {} does not exist.", style(path.display()).red());
    }
    if !path.is_file() {
        bail!("Path {} is not a file.", style(path.display()).red());
    }
    Ok(())
}

/// Expands `patterns` and checks that every resulting path is a file.
pub(crate) fn collect_inputs(patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let paths = expand_wildcards(patterns);
    if paths.is_empty() {
        return Err(anyhow!(
            "No input files match {}",
            style(patterns.join(" ")).red()
        ));
    }
    for path in paths.iter() {
        validate_input(path)?;
    }
    Ok(paths)
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum CliAnnotationFormat {
    Gff3,
    Gtf,
    Bed,
}

impl From<CliAnnotationFormat> for AnnotationFormat {
    fn from(value: CliAnnotationFormat) -> Self {
        match value {
            CliAnnotationFormat::Gff3 => AnnotationFormat::Gff3,
            CliAnnotationFormat::Gtf => AnnotationFormat::Gtf,
            CliAnnotationFormat::Bed => AnnotationFormat::Bed,
        }
    }
}

/// Options describing how annotation files are read.
#[derive(Args, Debug, Clone)]
pub(crate) struct AnnotationArgs {
    #[arg(
        short,
        long,
        value_enum,
        help = "Annotation format. Detected from the file extension if not set.",
        help_heading = "ANNOTATION"
    )]
    format:      Option<CliAnnotationFormat>,
    #[arg(
        long,
        help = "FASTA index (.fai) or FASTA file with the chromosome lengths.",
        help_heading = "ANNOTATION"
    )]
    fai:         Option<PathBuf>,
    #[arg(
        long,
        default_value_t = false,
        help = "Nest features by their Parent identifiers instead of coordinates.",
        help_heading = "ANNOTATION"
    )]
    by_parent:   bool,
    #[arg(
        long,
        default_value_t = false,
        conflicts_with = "by_parent",
        help = "Use the faster two-pointer scan, which can miss enclosing parents.",
        help_heading = "ANNOTATION"
    )]
    two_pointer: bool,
}

impl AnnotationArgs {
    pub fn reader(&self) -> AnnotationReaderBuilder {
        let hierarchy = if self.by_parent {
            HierarchyMode::ParentIds
        }
        else {
            HierarchyMode::Containment
        };
        let nesting = if self.two_pointer {
            NestingStrategy::TwoPointer
        }
        else {
            NestingStrategy::FullScan
        };
        AnnotationReaderBuilder::default()
            .with_format(self.format.map(AnnotationFormat::from))
            .with_fai_path(self.fai.clone())
            .with_hierarchy(hierarchy)
            .with_nesting(nesting)
    }

    pub fn read(
        &self,
        path: &Path,
    ) -> anyhow::Result<Reference> {
        if let Some(fai) = self.fai.as_ref() {
            validate_input(fai)?;
        }
        self.reader().read_path(path)
    }
}
