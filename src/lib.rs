//! Decoders for plaintext cellular-automaton pattern files.
//!
//! This crate reads the three textual encodings historically used by
//! Conway's-Game-of-Life tooling into a normalized in-memory representation:
//! a sparse set of live cells anchored at a computed origin, plus optional
//! metadata (rule string, comments, bounding dimensions).
//!
//! - [`Life105Pattern`]: the [Life 1.05
//!   format](https://conwaylife.com/wiki/Life_1.05) of `#P`-positioned blocks
//!   of `.`/`*` rows.
//! - [`Life106Pattern`]: the [Life 1.06
//!   format](https://conwaylife.com/wiki/Life_1.06) of one absolute
//!   coordinate pair per line.
//! - [`RlePattern`]: the [run-length encoded
//!   format](http://golly.sourceforge.net/Help/formats.html#rle) used by
//!   Golly and XLife.
//!
//! Each pattern type implements [`FromStr`](std::str::FromStr);
//! [`DecodePattern::from_reader`] consumes an already-open byte stream
//! instead. There is no format auto-detection — pick the decoder matching
//! your file.
//!
//! ```
//! use ca_patterns::RlePattern;
//!
//! let glider: RlePattern = "x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!"
//!     .parse()
//!     .unwrap();
//! assert_eq!(5, glider.cells().len());
//! assert_eq!(Some("B3/S23"), glider.rule.as_deref());
//! ```

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]

use std::io::Read;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

pub mod life105;
pub mod life106;
pub mod pattern;
pub mod rle;

pub use life105::Life105Pattern;
pub use life106::Life106Pattern;
pub use pattern::{Cell, Coordinate, Pattern};
pub use rle::RlePattern;

/// Result type returned by fallible decoding routines.
pub type PatternResult<T> = Result<T, PatternError>;

/// Error encountered while decoding a pattern file.
///
/// Any failure aborts the whole parse; no partial pattern is returned.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum PatternError {
    #[error("no significant lines in input")]
    EmptyInput,
    #[error("missing or invalid header line")]
    MissingOrInvalidHeader,
    #[error("both #N and #R rule lines present")]
    ConflictingRule,
    #[error("no header line declaring width and height")]
    MissingHeaderFields,
    #[error("encoded cell data is not terminated by '!'")]
    UnterminatedData,
    #[error("malformed coordinate: {0:?}")]
    MalformedCoordinate(String),
    #[error("malformed run count: {0:?}")]
    MalformedCount(String),
    #[error("invalid run token: {0:?}")]
    InvalidRun(String),
    #[error("error reading input: {0}")]
    Io(String),
}

/// Trait for pattern types that can be decoded from an open byte stream.
pub trait DecodePattern: FromStr<Err = PatternError> + Sized {
    /// Reads `reader` to completion as UTF-8 text and decodes its contents.
    ///
    /// The reader is consumed and dropped on every exit path, including
    /// failure. Decoding the same bytes always produces the same result.
    fn from_reader(mut reader: impl Read) -> PatternResult<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| PatternError::Io(e.to_string()))?;
        text.parse()
    }
}
impl DecodePattern for Life105Pattern {}
impl DecodePattern for Life106Pattern {}
impl DecodePattern for RlePattern {}

/// Returns the trimmed, non-empty lines of `s`, or `EmptyInput` if none
/// remain.
pub(crate) fn significant_lines(s: &str) -> PatternResult<Vec<&str>> {
    let lines = s
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect_vec();
    if lines.is_empty() {
        return Err(PatternError::EmptyInput);
    }
    Ok(lines)
}

/// Parses a signed integer token already vetted by a grammar regex.
pub(crate) fn parse_i64(token: &str) -> PatternResult<i64> {
    token
        .parse()
        .map_err(|_| PatternError::MalformedCoordinate(token.to_owned()))
}
