use clap::{ArgAction, Parser};
use std::{error::Error, path::PathBuf};
use tristate_cli::{
    cli,
    filter::{self, Selection},
};
use tristate_core::TriState;

/// Filter `<label> <value>` records by a tristate value.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    /// Keep records that are True, False, or None for all records.
    #[arg(
        short,
        long,
        value_name = "TRISTATE",
        default_value_t = TriState::None,
        allow_hyphen_values = true
    )]
    want: TriState,

    /// Also keep records without a value when filtering for True or False.
    #[arg(long)]
    include_unset: bool,

    /// Print only the number of kept records.
    #[arg(short, long)]
    count: bool,

    /// Increase log verbosity (overridden by RUST_LOG).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Records file; reads stdin when omitted.
    #[arg(value_name = "PATH")]
    input: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    let selection = Selection {
        want: args.want,
        include_unset: args.include_unset,
    };
    filter::run(args.input.as_deref(), &selection, args.count)
}
