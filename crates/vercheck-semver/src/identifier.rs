//! Pre-release identifier precedence

use std::cmp::Ordering;

/// One dot-separated segment of a pre-release suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    /// Only ASCII digits, with leading zeros stripped
    Numeric(&'a str),
    Alphanumeric(&'a str),
}

impl<'a> Identifier<'a> {
    pub fn classify(segment: &'a str) -> Self {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(segment.trim_start_matches('0'))
        } else {
            Identifier::Alphanumeric(segment)
        }
    }

    /// Split a pre-release suffix into its identifiers
    pub fn split(pre_release: &'a str) -> impl Iterator<Item = Identifier<'a>> + 'a {
        pre_release.split('.').map(Identifier::classify)
    }
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // With leading zeros gone, a longer digit string is a larger number
            (Identifier::Numeric(a), Identifier::Numeric(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Identifier::Numeric(_), Identifier::Alphanumeric(_)) => Ordering::Less,
            (Identifier::Alphanumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::Alphanumeric(a), Identifier::Alphanumeric(b)) => {
                a.as_bytes().cmp(b.as_bytes())
            }
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two optional pre-release suffixes.
///
/// Identifiers are compared pairwise from the left; when one suffix runs out first it
/// sorts lower. A missing pre-release sorts above any present one, since a release
/// outranks its own pre-releases.
pub fn compare_pre_release(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => Identifier::split(a).cmp(Identifier::split(b)),
    }
}
