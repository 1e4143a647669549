//! Sort command - order versions by precedence.

use anyhow::Result;
use clap::Args;
use log::info;
use vercheck_semver::Semver;

use crate::output::{warn_invalid, Format};

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Sort from newest to oldest
    #[arg(short, long)]
    pub reverse: bool,

    /// Return a non-zero exit code when any version fails to parse
    #[arg(long)]
    pub strict: bool,

    /// Output format: text or json
    #[arg(short = 'f', long, default_value = "text")]
    pub format: String,
}

pub fn execute(args: SortArgs) -> Result<i32> {
    let format = Format::parse(&args.format)?;
    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();

    let invalid = warn_invalid(&versions);
    let sorted = if args.reverse {
        Semver::rsort(&versions)
    } else {
        Semver::sort(&versions)
    };
    info!("Sorted {} versions, skipped {}", sorted.len(), invalid);

    match format {
        Format::Text => {
            for version in &sorted {
                println!("{}", version);
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&sorted)?),
    }

    Ok(if args.strict && invalid > 0 { 1 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort(versions: &[&str], reverse: bool, strict: bool, format: &str) -> Result<i32> {
        execute(SortArgs {
            versions: versions.iter().map(|v| v.to_string()).collect(),
            reverse,
            strict,
            format: format.to_string(),
        })
    }

    #[test]
    fn test_strict_fails_on_invalid_versions() {
        assert_eq!(sort(&["1.2.3", "2.0.0.rc.1"], false, true, "text").unwrap(), 1);
        assert_eq!(sort(&["1.2.3", "2.0.0.rc.1"], false, false, "text").unwrap(), 0);
    }

    #[test]
    fn test_valid_versions_exit_zero() {
        assert_eq!(sort(&["1.2.3", "1.0"], false, true, "text").unwrap(), 0);
        assert_eq!(sort(&["1.2.3", "1.0"], true, true, "json").unwrap(), 0);
    }

    #[test]
    fn test_unknown_format_is_an_error() {
        assert!(sort(&["1.2.3"], false, false, "yaml").is_err());
    }
}
