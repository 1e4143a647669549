//! Version comparison utilities

use std::cmp::Ordering;

use crate::identifier::compare_pre_release;
use crate::version::{Field, Version};

/// Order two versions by precedence.
///
/// Major, minor and patch are compared numerically in that order. When all three are
/// equal the pre-release identifiers decide. Build metadata is never consulted.
pub fn compare_semantic_versions(a: &Version<'_>, b: &Version<'_>) -> Ordering {
    Field::ALL
        .iter()
        .map(|&field| a.field(field).cmp(&b.field(field)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| compare_pre_release(a.pre_release(), b.pre_release()))
}
