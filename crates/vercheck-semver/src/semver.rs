//! Semver facade providing high-level operations on version strings

use std::cmp::Ordering;

use crate::{Requirement, Version};

/// Main facade for working with raw version and requirement strings
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a requirement such as `~1.2.3`.
    ///
    /// Returns false when either string fails to parse.
    pub fn satisfies(version: &str, requirement: &str) -> bool {
        let Ok(version) = Version::parse(version) else {
            return false;
        };
        let Ok(requirement) = Requirement::parse(requirement) else {
            return false;
        };
        requirement.matches(&version)
    }

    /// Return all versions that satisfy the given requirement, in input order
    pub fn satisfied_by(versions: &[&str], requirement: &str) -> Vec<String> {
        let Ok(requirement) = Requirement::parse(requirement) else {
            return Vec::new();
        };

        versions
            .iter()
            .filter(|v| Version::parse(v).is_ok_and(|v| requirement.matches(&v)))
            .map(|v| v.to_string())
            .collect()
    }

    /// Sort versions in ascending order, dropping the ones that fail to parse.
    ///
    /// The sort is stable: versions of equal precedence keep their input order.
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version<'_>, &str)> = versions
            .iter()
            .filter_map(|&v| Some((Version::parse(v).ok()?, v)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp: Ordering = a.cmp(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed.into_iter().map(|(_, v)| v.to_string()).collect()
    }
}
