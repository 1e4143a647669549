//! Version string parsing

use thiserror::Error;

use crate::version::{Field, Version};

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty version string")]
    Empty,
    #[error("Expected a numeric major version at offset {offset}")]
    MissingMajor { offset: usize },
    #[error("Expected a numeric {field} version after \".\" at offset {offset}")]
    MissingComponent { field: Field, offset: usize },
    #[error("The {field} version at offset {offset} does not fit in 32 bits")]
    NumberOutOfRange { field: Field, offset: usize },
    #[error("Empty pre-release after \"-\" at offset {offset}")]
    EmptyPreRelease { offset: usize },
    #[error("Empty build metadata after \"+\" at offset {offset}")]
    EmptyBuildInfo { offset: usize },
    #[error("Unexpected trailing characters at offset {offset}")]
    TrailingCharacters { offset: usize },
}

/// Parse a `major[.minor[.patch]][-pre-release][+build]` version string.
///
/// Leading whitespace is skipped. Missing minor and patch components default to 0, so
/// `"2"` is 2.0.0 and `"1.2"` is 1.2.0. The pre-release runs from the `-` up to the first
/// `+` and the build metadata runs to the end of the input. Anything left over after that
/// is an error.
pub fn parse_semantic_version(input: &str) -> Result<Version<'_>, ParseError> {
    let mut scanner = Scanner::new(input);
    scanner.skip_whitespace();
    if scanner.is_done() {
        return Err(ParseError::Empty);
    }

    let major = scanner.number(Field::Major)?;
    let mut minor = 0;
    let mut patch = 0;
    if scanner.eat(b'.') {
        minor = scanner.number(Field::Minor)?;
        if scanner.eat(b'.') {
            patch = scanner.number(Field::Patch)?;
        }
    }

    let mut pre_release = None;
    if scanner.eat(b'-') {
        let offset = scanner.pos;
        let value = scanner.take_until(b'+');
        if value.is_empty() {
            return Err(ParseError::EmptyPreRelease { offset });
        }
        pre_release = Some(value);
    }

    let mut build_info = None;
    if scanner.eat(b'+') {
        let offset = scanner.pos;
        let value = scanner.take_rest();
        if value.is_empty() {
            return Err(ParseError::EmptyBuildInfo { offset });
        }
        build_info = Some(value);
    }

    if !scanner.is_done() {
        return Err(ParseError::TrailingCharacters {
            offset: scanner.pos,
        });
    }

    Ok(Version::from_parts(major, minor, patch, pre_release, build_info))
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn is_done(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    // Includes vertical tab and form feed
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn number(&mut self, field: Field) -> Result<u32, ParseError> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }

        if start == self.pos {
            return Err(match field {
                Field::Major => ParseError::MissingMajor { offset: start },
                _ => ParseError::MissingComponent {
                    field,
                    offset: start,
                },
            });
        }

        // Only ASCII digits were consumed, so overflow is the only way this fails
        self.input[start..self.pos]
            .parse()
            .map_err(|_| ParseError::NumberOutOfRange {
                field,
                offset: start,
            })
    }

    fn take_until(&mut self, delimiter: u8) -> &'a str {
        let rest = &self.input[self.pos..];
        let len = rest
            .bytes()
            .position(|b| b == delimiter)
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn take_rest(&mut self) -> &'a str {
        let rest = &self.input[self.pos..];
        self.pos = self.input.len();
        rest
    }
}
