//! Matrix command - evaluate every version against every requirement.

use anyhow::{Context, Result};
use clap::Args;
use indexmap::{IndexMap, IndexSet};
use log::{debug, info};
use serde::Serialize;
use vercheck_semver::{Requirement, Semver, Version};

use crate::output::{warn_invalid, Format};

const VERSION_COLUMN_WIDTH: usize = 20;
const REQUIREMENT_COLUMN_WIDTH: usize = 15;

/// Requirements used when none are given on the command line
pub const DEFAULT_REQUIREMENTS: [&str; 7] = [
    "=1.2.3",
    "=1.2.3-rc.2",
    ">1.2.3",
    "^1.2.3",
    "~1.2.3",
    "~1.2.3-rc.2",
    "@1.2.3-rc.2",
];

/// Versions used when none are given on the command line
pub const SAMPLE_VERSIONS: [&str; 28] = [
    "2.0.0.rc.1",
    "1.2.3",
    "1.3.4",
    "2",
    "1.2+8",
    "1.2.3-alpha.beta",
    "1.2.3-alpha.1",
    "1.2.3-rc.9",
    "4",
    "1.2.3-rc.10",
    "1.2.3-beta",
    "1.0",
    "1.1.6+8",
    "1.2.3-rc.11",
    "1.2.3-alpha",
    "1.3.0",
    "1.2-alpha",
    "1.2.3-beta+2",
    "1.2.3-rc.11.test",
    "1.2.3-rc.1",
    "1.2",
    "1.2.3-rc.2",
    "1.2.3-rc.test",
    "1.1.6",
    "3.0.0",
    "1.5.0.rc.1",
    "1.2.4",
    "1.2.3-beta",
];

#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Versions to evaluate (defaults to a built-in sample list)
    pub versions: Vec<String>,

    /// Requirement column, e.g. "^1.2.3" (can be used multiple times)
    #[arg(short = 'r', long = "requirement", value_name = "REQ", action = clap::ArgAction::Append)]
    pub requirements: Vec<String>,

    /// Output format: text or json
    #[arg(short = 'f', long, default_value = "text")]
    pub format: String,
}

/// One table row: a version and its verdict for each requirement column
#[derive(Debug, Serialize)]
pub struct MatrixRow {
    pub version: String,
    pub results: IndexMap<String, bool>,
}

pub fn execute(args: MatrixArgs) -> Result<i32> {
    let format = Format::parse(&args.format)?;

    let requirement_inputs = requirement_labels(&args.requirements);
    let requirements = parse_requirements(&requirement_inputs)?;

    let versions: Vec<&str> = if args.versions.is_empty() {
        SAMPLE_VERSIONS.to_vec()
    } else {
        args.versions.iter().map(String::as_str).collect()
    };
    warn_invalid(&versions);
    let sorted = Semver::sort(&versions);
    let sorted: Vec<&str> = sorted.iter().map(String::as_str).collect();

    info!(
        "Evaluating {} versions against {} requirements",
        sorted.len(),
        requirements.len()
    );
    let rows = build_matrix(&sorted, &requirements);

    match format {
        Format::Text => print!("{}", render_table(&requirement_inputs, &rows)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    Ok(0)
}

/// Column labels for the given requirements, or the defaults when none are given.
///
/// Labels are trimmed here and nowhere else. Columns are keyed by label, so repeated
/// requirements collapse into one.
pub fn requirement_labels(requirements: &[String]) -> Vec<&str> {
    let labels: IndexSet<&str> = if requirements.is_empty() {
        DEFAULT_REQUIREMENTS.into_iter().collect()
    } else {
        requirements.iter().map(|r| r.trim()).collect()
    };
    labels.into_iter().collect()
}

/// Parse requirement strings, keeping each input as its column label
pub fn parse_requirements<'a>(inputs: &[&'a str]) -> Result<Vec<(&'a str, Requirement<'a>)>> {
    inputs
        .iter()
        .map(|&input| -> Result<(&'a str, Requirement<'a>)> {
            let requirement = Requirement::parse(input)
                .with_context(|| format!("Invalid requirement \"{}\"", input))?;
            debug!(
                "Column {} checks {} against {}",
                input,
                requirement.compatibility(),
                requirement.expected()
            );
            Ok((input, requirement))
        })
        .collect()
}

/// Evaluate each version against each requirement, skipping versions that fail to parse
pub fn build_matrix(versions: &[&str], requirements: &[(&str, Requirement<'_>)]) -> Vec<MatrixRow> {
    versions
        .iter()
        .filter_map(|&input| {
            let version = Version::parse(input).ok()?;
            let results = requirements
                .iter()
                .map(|(label, requirement)| (label.to_string(), requirement.matches(&version)))
                .collect();
            Some(MatrixRow {
                version: input.to_string(),
                results,
            })
        })
        .collect()
}

/// Render rows as fixed-width columns under a header line
pub fn render_table(labels: &[&str], rows: &[MatrixRow]) -> String {
    let mut out = format!("{:<width$}", "Version", width = VERSION_COLUMN_WIDTH);
    for label in labels {
        out.push_str(&format!("{:<width$}", label, width = REQUIREMENT_COLUMN_WIDTH));
    }
    out.push('\n');

    for row in rows {
        out.push_str(&format!("{:<width$}", row.version, width = VERSION_COLUMN_WIDTH));
        for result in row.results.values() {
            out.push_str(&format!("{:<width$}", result, width = REQUIREMENT_COLUMN_WIDTH));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<MatrixRow> {
        let requirements = parse_requirements(&DEFAULT_REQUIREMENTS).unwrap();
        let sorted = Semver::sort(&SAMPLE_VERSIONS);
        let sorted: Vec<&str> = sorted.iter().map(String::as_str).collect();
        build_matrix(&sorted, &requirements)
    }

    fn verdicts(rows: &[MatrixRow], version: &str) -> Vec<bool> {
        rows.iter()
            .find(|row| row.version == version)
            .map(|row| row.results.values().copied().collect())
            .unwrap()
    }

    #[test]
    fn test_sample_matrix_skips_invalid_versions() {
        let rows = sample_rows();
        assert_eq!(rows.len(), 26);
        assert_eq!(rows.first().unwrap().version, "1.0");
        assert_eq!(rows.last().unwrap().version, "4");
        assert!(rows.iter().all(|row| row.results.len() == DEFAULT_REQUIREMENTS.len()));
    }

    #[test]
    fn test_sample_matrix_verdicts() {
        let rows = sample_rows();
        //                 =1.2.3 =rc.2  >1.2.3 ^1.2.3 ~1.2.3 ~rc.2  @rc.2
        assert_eq!(verdicts(&rows, "1.2.3"), [true, false, true, true, true, true, true]);
        assert_eq!(verdicts(&rows, "1.2.3-rc.2"), [false, true, false, false, false, true, true]);
        assert_eq!(verdicts(&rows, "1.2.3-rc.10"), [false, false, false, false, false, true, true]);
        assert_eq!(verdicts(&rows, "1.2.3-rc.1"), [false, false, false, false, false, false, false]);
        assert_eq!(verdicts(&rows, "1.2.4"), [false, false, true, true, true, true, false]);
        assert_eq!(verdicts(&rows, "1.3.0"), [false, false, true, true, false, false, false]);
        assert_eq!(verdicts(&rows, "2"), [false, false, true, false, false, false, false]);
        assert_eq!(verdicts(&rows, "1.0"), [false; 7]);
    }

    #[test]
    fn test_requirement_labels_are_trimmed_once() {
        let inputs = vec![" ~1.2.3".to_string(), "^1.2.3 ".to_string(), "~1.2.3".to_string()];
        let labels = requirement_labels(&inputs);
        assert_eq!(labels, ["~1.2.3", "^1.2.3"]);

        let requirements = parse_requirements(&labels).unwrap();
        let rows = build_matrix(&["1.2.9"], &requirements);
        let expected = format!(
            "{:<20}{:<15}{:<15}\n{:<20}{:<15}{:<15}\n",
            "Version", "~1.2.3", "^1.2.3", "1.2.9", "true", "true"
        );
        assert_eq!(render_table(&labels, &rows), expected);
    }

    #[test]
    fn test_default_requirement_labels() {
        assert_eq!(requirement_labels(&[]), DEFAULT_REQUIREMENTS);
    }

    #[test]
    fn test_render_table() {
        let requirements = parse_requirements(&["^1.2.3", "~1.2.3"]).unwrap();
        let rows = build_matrix(&["1.2.9", "1.3.0", "garbage"], &requirements);
        let table = render_table(&["^1.2.3", "~1.2.3"], &rows);
        let expected = format!(
            "{:<20}{:<15}{:<15}\n{:<20}{:<15}{:<15}\n{:<20}{:<15}{:<15}\n",
            "Version", "^1.2.3", "~1.2.3", "1.2.9", "true", "true", "1.3.0", "true", "false"
        );
        assert_eq!(table, expected);
    }

    #[test]
    fn test_json_rows_keep_column_order() {
        let requirements = parse_requirements(&["~1.2.3", "^1.2.3", "=1.2.3"]).unwrap();
        let rows = build_matrix(&["1.2.3+build5"], &requirements);
        let json = serde_json::to_string(&rows).unwrap();
        assert_eq!(
            json,
            r#"[{"version":"1.2.3+build5","results":{"~1.2.3":true,"^1.2.3":true,"=1.2.3":true}}]"#
        );
    }

    #[test]
    fn test_invalid_requirement_is_reported() {
        let err = parse_requirements(&["~1.2.3", "1.2.3"]).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "Invalid requirement \"1.2.3\": Requirement is missing a compatibility sigil (one of = @ ~ ^ >)"
        );
    }
}
