mod check;
mod inspect;
mod matrix;
mod output;
mod sort;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "vercheck")]
#[command(about = "Sort semantic versions and check them against compatibility requirements")]
#[command(version)]
#[command(after_help = "Requirements are written <sigil><version>, where the sigil is one of:\n  \
    =  equal\n  \
    @  same major.minor.patch, not older\n  \
    ~  same major.minor, not older\n  \
    ^  same major, not older\n  \
    >  not older")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sort versions by precedence
    Sort(sort::SortArgs),

    /// Print a table of versions against compatibility requirements
    Matrix(matrix::MatrixArgs),

    /// Check whether a version satisfies a requirement
    Check(check::CheckArgs),

    /// Show the parsed fields of one or more versions
    Inspect(inspect::InspectArgs),
}

/// RUST_LOG takes precedence over the -v flags
fn init_logger(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<i32> {
    match args.command {
        Commands::Sort(args) => sort::execute(args),
        Commands::Matrix(args) => matrix::execute(args),
        Commands::Check(args) => check::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    if args.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match run(args) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
