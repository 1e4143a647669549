//! Requirement strings pairing a compatibility rule with an expected version

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::compatibility::Compatibility;
use crate::version::Version;
use crate::version_parser::{parse_semantic_version, ParseError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequirementError {
    #[error("Requirement is missing a compatibility sigil (one of = @ ~ ^ >)")]
    MissingSigil,
    #[error("Unknown compatibility sigil \"{0}\"")]
    UnknownSigil(char),
    #[error("Invalid expected version: {0}")]
    InvalidVersion(#[from] ParseError),
}

lazy_static! {
    // Anything that can't start a version is taken as the sigil
    static ref REQUIREMENT_RE: Regex =
        Regex::new(r"(?s)^\s*(?P<sigil>[^\s0-9])?\s*(?P<version>.*)$").unwrap();
}

/// A compatibility rule together with the version it is relative to, e.g. `^1.2.3`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement<'a> {
    compatibility: Compatibility,
    expected: Version<'a>,
}

impl<'a> Requirement<'a> {
    pub fn new(compatibility: Compatibility, expected: Version<'a>) -> Self {
        Requirement {
            compatibility,
            expected,
        }
    }

    /// Parse `<sigil><version>`, where the sigil is one of `=`, `@`, `~`, `^` or `>`
    pub fn parse(input: &'a str) -> Result<Self, RequirementError> {
        let caps = REQUIREMENT_RE
            .captures(input)
            .ok_or(RequirementError::MissingSigil)?;

        let sigil = caps
            .name("sigil")
            .and_then(|m| m.as_str().chars().next())
            .ok_or(RequirementError::MissingSigil)?;
        let compatibility =
            Compatibility::from_sigil(sigil).ok_or(RequirementError::UnknownSigil(sigil))?;

        let version = caps.name("version").map_or("", |m| m.as_str());
        let expected = parse_semantic_version(version)?;

        Ok(Requirement::new(compatibility, expected))
    }

    pub fn compatibility(&self) -> Compatibility {
        self.compatibility
    }

    pub fn expected(&self) -> &Version<'a> {
        &self.expected
    }

    /// Check if a candidate version satisfies this requirement
    pub fn matches(&self, candidate: &Version<'_>) -> bool {
        self.compatibility.is_compatible(&self.expected, candidate)
    }
}

impl fmt::Display for Requirement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.compatibility.sigil(), self.expected)
    }
}
