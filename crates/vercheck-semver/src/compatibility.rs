//! Compatibility rules between an expected and a candidate version

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::comparator::compare_semantic_versions;
use crate::version::{Field, Version};

/// How strictly a candidate version must match an expected version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compatibility {
    /// Same precedence as the expected version (=)
    Equal,
    /// Same major.minor.patch and not older (@)
    GreaterPreRelease,
    /// Same major.minor and not older (~)
    GreaterPatch,
    /// Same major and not older (^)
    GreaterMinor,
    /// Not older (>)
    GreaterMajor,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown compatibility \"{0}\"")]
pub struct UnknownCompatibilityError(pub String);

impl Compatibility {
    pub const ALL: [Compatibility; 5] = [
        Compatibility::Equal,
        Compatibility::GreaterPreRelease,
        Compatibility::GreaterPatch,
        Compatibility::GreaterMinor,
        Compatibility::GreaterMajor,
    ];

    /// The single character used in requirement strings such as `~1.2.3`
    pub fn sigil(&self) -> char {
        match self {
            Compatibility::Equal => '=',
            Compatibility::GreaterPreRelease => '@',
            Compatibility::GreaterPatch => '~',
            Compatibility::GreaterMinor => '^',
            Compatibility::GreaterMajor => '>',
        }
    }

    pub fn from_sigil(sigil: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.sigil() == sigil)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Compatibility::Equal => "equal",
            Compatibility::GreaterPreRelease => "greater-pre-release",
            Compatibility::GreaterPatch => "greater-patch",
            Compatibility::GreaterMinor => "greater-minor",
            Compatibility::GreaterMajor => "greater-major",
        }
    }

    /// Fields that must be identical before the ordering is consulted
    pub fn gated_fields(&self) -> &'static [Field] {
        match self {
            Compatibility::Equal | Compatibility::GreaterMajor => &[],
            Compatibility::GreaterPreRelease => &[Field::Major, Field::Minor, Field::Patch],
            Compatibility::GreaterPatch => &[Field::Major, Field::Minor],
            Compatibility::GreaterMinor => &[Field::Major],
        }
    }

    /// Check whether `candidate` satisfies this rule relative to `expected`.
    ///
    /// Apart from `Equal`, every rule means "the gated fields are identical and the
    /// candidate is not older". So `GreaterPatch` against 1.2.3 rejects 1.3.0 but
    /// accepts 1.2.3, 1.2.9 and 1.2.4-rc.1.
    pub fn is_compatible(&self, expected: &Version<'_>, candidate: &Version<'_>) -> bool {
        if let Compatibility::Equal = self {
            return compare_semantic_versions(candidate, expected).is_eq();
        }

        let gated = self
            .gated_fields()
            .iter()
            .all(|&field| candidate.field(field) == expected.field(field));
        gated && compare_semantic_versions(candidate, expected).is_ge()
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Compatibility {
    type Err = UnknownCompatibilityError;

    /// Accepts a sigil (`~`) or a name (`greater-patch`, `greater_patch`, `GREATER_PATCH`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(compatibility) = Self::from_sigil(c) {
                return Ok(compatibility);
            }
        }

        let name = s.to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| UnknownCompatibilityError(s.to_string()))
    }
}

/// Check whether `candidate` satisfies `spec` relative to `expected`
pub fn is_version_compatible(
    spec: Compatibility,
    expected: &Version<'_>,
    candidate: &Version<'_>,
) -> bool {
    spec.is_compatible(expected, candidate)
}
