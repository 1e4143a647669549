//! Inspect command - print the parsed fields of versions.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use vercheck_semver::Version;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Versions to inspect
    #[arg(required = true)]
    pub versions: Vec<String>,
}

pub fn execute(args: InspectArgs) -> Result<i32> {
    let many = args.versions.len() > 1;
    for (i, input) in args.versions.iter().enumerate() {
        let version =
            Version::parse(input).with_context(|| format!("Invalid version \"{}\"", input))?;

        if many {
            if i > 0 {
                println!();
            }
            println!("{}", style(input).cyan().bold());
        }
        print!("{}", version.debug_string());
    }
    Ok(0)
}
