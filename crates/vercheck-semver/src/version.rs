//! Parsed version values

use std::cmp::Ordering;
use std::fmt;

use crate::comparator::compare_semantic_versions;
use crate::version_parser::{parse_semantic_version, ParseError};

/// One of the three numeric components of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor,
    Patch,
}

impl Field {
    /// All fields, in precedence order
    pub const ALL: [Field; 3] = [Field::Major, Field::Minor, Field::Patch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Major => "major",
            Field::Minor => "minor",
            Field::Patch => "patch",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed semantic version.
///
/// The pre-release and build suffixes are borrowed from the string the version was
/// parsed from, so the source must outlive the `Version`. Use [`Version::into_owned`]
/// when the version needs to outlive its source.
///
/// Equality and ordering follow version precedence: build metadata is ignored and
/// numeric pre-release identifiers compare by value, so `1.0.0-rc.01+a` equals
/// `1.0.0-rc.1+b`.
#[derive(Debug, Clone, Copy)]
pub struct Version<'a> {
    major: u32,
    minor: u32,
    patch: u32,
    pre_release: Option<&'a str>,
    build_info: Option<&'a str>,
}

impl<'a> Version<'a> {
    pub(crate) fn from_parts(
        major: u32,
        minor: u32,
        patch: u32,
        pre_release: Option<&'a str>,
        build_info: Option<&'a str>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release,
            build_info,
        }
    }

    /// Parse a version string, see [`parse_semantic_version`]
    pub fn parse(input: &'a str) -> Result<Self, ParseError> {
        parse_semantic_version(input)
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// Get a numeric component by field
    pub fn field(&self, field: Field) -> u32 {
        match field {
            Field::Major => self.major,
            Field::Minor => self.minor,
            Field::Patch => self.patch,
        }
    }

    /// The pre-release suffix without its leading `-`
    pub fn pre_release(&self) -> Option<&'a str> {
        self.pre_release
    }

    /// The build metadata without its leading `+`
    pub fn build_info(&self) -> Option<&'a str> {
        self.build_info
    }

    /// Check if this is a pre-release version
    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Render every field on its own line, for diagnostics.
    ///
    /// Absent suffixes are omitted:
    ///
    /// ```text
    /// Major: 1
    /// Minor: 2
    /// Patch: 3
    /// Pre-release info: rc.1
    /// Build info: 42
    /// ```
    pub fn debug_string(&self) -> String {
        let mut out = format!(
            "Major: {}\nMinor: {}\nPatch: {}\n",
            self.major, self.minor, self.patch
        );
        if let Some(pre_release) = self.pre_release {
            out.push_str(&format!("Pre-release info: {}\n", pre_release));
        }
        if let Some(build_info) = self.build_info {
            out.push_str(&format!("Build info: {}\n", build_info));
        }
        out
    }

    /// Copy the borrowed suffixes so the version no longer depends on its source
    pub fn into_owned(self) -> OwnedVersion {
        OwnedVersion {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre_release: self.pre_release.map(str::to_string),
            build_info: self.build_info.map(str::to_string),
        }
    }
}

impl PartialEq for Version<'_> {
    fn eq(&self, other: &Self) -> bool {
        compare_semantic_versions(self, other) == Ordering::Equal
    }
}

impl Eq for Version<'_> {}

impl PartialOrd for Version<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_semantic_versions(self, other)
    }
}

impl fmt::Display for Version<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre_release) = self.pre_release {
            write!(f, "-{}", pre_release)?;
        }
        if let Some(build_info) = self.build_info {
            write!(f, "+{}", build_info)?;
        }
        Ok(())
    }
}

/// A [`Version`] that owns its pre-release and build suffixes
#[derive(Debug, Clone)]
pub struct OwnedVersion {
    major: u32,
    minor: u32,
    patch: u32,
    pre_release: Option<String>,
    build_info: Option<String>,
}

impl OwnedVersion {
    /// Borrow this version for comparison
    pub fn as_version(&self) -> Version<'_> {
        Version::from_parts(
            self.major,
            self.minor,
            self.patch,
            self.pre_release.as_deref(),
            self.build_info.as_deref(),
        )
    }
}

impl PartialEq for OwnedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.as_version() == other.as_version()
    }
}

impl Eq for OwnedVersion {}

impl PartialOrd for OwnedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OwnedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_version().cmp(&other.as_version())
    }
}

impl fmt::Display for OwnedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_version().fmt(f)
    }
}
