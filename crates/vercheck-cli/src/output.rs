//! Shared helpers for command output.

use console::style;
use log::debug;
use vercheck_semver::Version;

/// Print a warning for every version that fails to parse and return how many did
pub fn warn_invalid(versions: &[&str]) -> usize {
    let mut invalid = 0;
    for version in versions {
        if let Err(e) = Version::parse(version) {
            debug!("Rejected {:?}: {:?}", version, e);
            eprintln!(
                "{} Skipping invalid version \"{}\": {}",
                style("Warning:").yellow(),
                version,
                e
            );
            invalid += 1;
        }
    }
    invalid
}

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn parse(format: &str) -> anyhow::Result<Self> {
        match format {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => anyhow::bail!("Unknown output format \"{}\", expected text or json", other),
        }
    }
}
