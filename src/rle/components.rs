use std::str::FromStr;

use itertools::Itertools;

use crate::{parse_i64, PatternError, PatternResult};

/// Contents of the `x = <w>, y = <h>[, rule = <rule>]` header line.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct RleHeader {
    /// Declared pattern width.
    pub width: i64,
    /// Declared pattern height.
    pub height: i64,
    /// Automaton rule, if declared inline.
    pub rule: Option<String>,
}
impl FromStr for RleHeader {
    type Err = PatternError;

    fn from_str(s: &str) -> PatternResult<Self> {
        let mut ret = Self::default();

        // Parse comma-separated `name = value` parameters.
        for param in s.split(',') {
            match param.split('=').map(str::trim).collect_vec().as_slice() {
                ["x", x] => ret.width = parse_i64(x)?,
                ["y", y] => ret.height = parse_i64(y)?,
                ["rule", rule] => ret.rule = Some((*rule).to_owned()),
                _ => (), // Ignore unknown parameters.
            }
        }

        Ok(ret)
    }
}

/// Run of repeated tags in the encoded cell data.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RleRun {
    /// Repeat count; `1` when the file omits it.
    pub count: i64,
    /// The repeated tag.
    pub tag: RleTag,
}
impl FromStr for RleRun {
    type Err = PatternError;

    /// Parses a single `<count?><tag>` token, e.g. `3o` or `$`.
    fn from_str(s: &str) -> PatternResult<Self> {
        if s.is_empty() || !s.is_ascii() {
            return Err(PatternError::InvalidRun(s.to_owned()));
        }

        // The tag is the final character; everything before it is the count.
        let (digits, tag) = s.split_at(s.len() - 1);
        let tag = tag.parse()?;
        let count = if digits.is_empty() {
            1
        } else {
            digits
                .parse()
                .map_err(|_| PatternError::MalformedCount(digits.to_owned()))?
        };

        Ok(Self { count, tag })
    }
}

/// A single tag character in the encoded cell data.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RleTag {
    /// `o`: a live cell.
    Alive,
    /// `b`: a dead cell.
    Dead,
    /// `$`: end of row.
    EndRow,
}
impl FromStr for RleTag {
    type Err = PatternError;

    fn from_str(s: &str) -> PatternResult<Self> {
        match s.chars().collect_tuple() {
            Some(('o',)) => Ok(Self::Alive),
            Some(('b',)) => Ok(Self::Dead),
            Some(('$',)) => Ok(Self::EndRow),
            _ => Err(PatternError::InvalidRun(s.to_owned())),
        }
    }
}
