//! Semantic version parsing, precedence ordering and compatibility checks
//!
//! Versions are parsed from `major.minor.patch[-pre-release][+build]` strings into a
//! [`Version`] that borrows its suffixes from the input. Versions are ordered by their
//! numeric triple and then by their dotted pre-release identifiers, and can be checked
//! against one of the five fixed [`Compatibility`] rules.

mod comparator;
mod compatibility;
mod identifier;
mod requirement;
mod semver;
mod version;
mod version_parser;

pub use comparator::compare_semantic_versions;
pub use compatibility::{is_version_compatible, Compatibility, UnknownCompatibilityError};
pub use identifier::{compare_pre_release, Identifier};
pub use requirement::{Requirement, RequirementError};
pub use semver::Semver;
pub use version::{Field, OwnedVersion, Version};
pub use version_parser::{parse_semantic_version, ParseError};
