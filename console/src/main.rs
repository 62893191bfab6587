mod export;
mod query;
mod stats;
mod tree;
mod utils;

use clap::{
    Parser,
    Subcommand,
};
use export::ExportArgs;
use query::QueryArgs;
use stats::StatsArgs;
use tree::TreeArgs;
use utils::UtilsArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Print the feature hierarchy of annotation files.
    Tree {
        #[clap(flatten)]
        args:  TreeArgs,
        #[clap(flatten)]
        utils: UtilsArgs,
    },

    /// Count features per chromosome or per type.
    Stats {
        #[clap(flatten)]
        args:  StatsArgs,
        #[clap(flatten)]
        utils: UtilsArgs,
    },

    /// Write all features as a tab-separated table.
    Export {
        #[clap(flatten)]
        args:  ExportArgs,
        #[clap(flatten)]
        utils: UtilsArgs,
    },

    /// List top-level features overlapping regions.
    Query {
        #[clap(flatten)]
        args:  QueryArgs,
        #[clap(flatten)]
        utils: UtilsArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    match cli.command {
        MainMenu::Tree { args, utils } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Stats { args, utils } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Export { args, utils } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Query { args, utils } => {
            utils.setup()?;
            args.run(&utils)?;
        },
    }
    Ok(())
}
