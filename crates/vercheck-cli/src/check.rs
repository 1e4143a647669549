//! Check command - test a single version against a requirement.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use log::debug;
use vercheck_semver::{Requirement, Version};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Requirement such as "~1.2.3" (sigils: = @ ~ ^ >)
    pub requirement: String,

    /// Version to check
    pub version: String,

    /// Print nothing, only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: CheckArgs) -> Result<i32> {
    let requirement = Requirement::parse(&args.requirement)
        .with_context(|| format!("Invalid requirement \"{}\"", args.requirement))?;
    let version = Version::parse(&args.version)
        .with_context(|| format!("Invalid version \"{}\"", args.version))?;

    debug!(
        "Checking {} against {} {}",
        version,
        requirement.compatibility(),
        requirement.expected()
    );
    let satisfied = requirement.matches(&version);

    if !args.quiet {
        if satisfied {
            println!(
                "{} {} satisfies {}",
                style("OK").green().bold(),
                style(&args.version).white().bold(),
                style(&args.requirement).cyan()
            );
        } else {
            println!(
                "{} {} does not satisfy {}",
                style("FAIL").red().bold(),
                style(&args.version).white().bold(),
                style(&args.requirement).cyan()
            );
        }
    }

    Ok(if satisfied { 0 } else { 1 })
}
