//! The [run-length encoded
//! format](http://golly.sourceforge.net/Help/formats.html#rle) used by Golly
//! and XLife.
//!
//! Width and height come solely from the `x = <w>, y = <h>` header line; the
//! pattern declares its own canvas size rather than deriving it from cell
//! extents. Cells sit at the coordinates produced by walking the encoded
//! runs from the pattern's origin, so they are absolute, like Life 1.06 and
//! unlike Life 1.05.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

mod components;

pub use components::{RleHeader, RleRun, RleTag};

use crate::pattern::{Cell, Coordinate, Pattern};
use crate::{parse_i64, significant_lines, PatternError, PatternResult};

lazy_static! {
    /// `x = <w>, y = <h>[, rule = <rule>]` with arbitrary whitespace around
    /// tokens.
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^x\s*=\s*[0-9]+\s*,\s*y\s*=\s*[0-9]+(\s*,\s*rule\s*=\s*.*)?$").unwrap();
    /// `#r <rule>`, consulted only when the header carries no inline rule.
    static ref RULE_REGEX: Regex = Regex::new(r"^#r\s+.*$").unwrap();
    /// `#C`/`#c`, optionally followed by comment text.
    static ref COMMENT_REGEX: Regex = Regex::new(r"^#[Cc](\s+.*)?$").unwrap();
    /// `#O`: when and by whom the file was created.
    static ref CONCEPTION_REGEX: Regex = Regex::new(r"^#O\s+(.*)$").unwrap();
    /// `#P x y` / `#R x y`: the decoding start coordinate.
    static ref ORIGIN_REGEX: Regex =
        Regex::new(r"^#[PR]\s+(-?[0-9]+)\s+(-?[0-9]+)$").unwrap();
    /// A line of encoded cell data, possibly carrying the `!` terminator.
    static ref DATA_LINE_REGEX: Regex = Regex::new(r"^((\d*[ob$])+!?|!)$").unwrap();
    /// An optional run count followed by a single tag.
    static ref RUN_REGEX: Regex = Regex::new(r"\d*[ob$]").unwrap();
}

/// A decoded RLE pattern.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct RlePattern {
    /// Automaton rule, from the header or a `#r` line.
    pub rule: Option<String>,
    /// Width declared by the header.
    pub width: i64,
    /// Height declared by the header.
    pub height: i64,
    /// Trailing text of the `#O` line: when and by whom the file was
    /// created.
    pub conception_details: Option<String>,
    /// Cells, comments, and origin.
    pub pattern: Pattern,
}
impl RlePattern {
    /// Live cells, at the absolute coordinates produced by the run walk.
    pub fn cells(&self) -> &HashSet<Cell> {
        &self.pattern.cells
    }
    /// `#C`/`#c` comments, in source order.
    pub fn comments(&self) -> &[String] {
        &self.pattern.comments
    }
    /// Start coordinate of the run walk. `(0, 0)` unless a `#P`/`#R` line
    /// overrides it.
    pub fn origin(&self) -> Coordinate {
        self.pattern.origin
    }
}
impl FromStr for RlePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> PatternResult<Self> {
        let lines = significant_lines(s)?;

        // The header may appear anywhere among the significant lines; the
        // first match wins.
        let header: RleHeader = lines
            .iter()
            .find(|line| HEADER_REGEX.is_match(line))
            .ok_or(PatternError::MissingHeaderFields)?
            .parse()?;
        let rule = header.rule.or_else(|| {
            lines
                .iter()
                .find(|line| RULE_REGEX.is_match(line))
                .map(|line| line[2..].trim().to_owned())
        });

        let comments = lines
            .iter()
            .filter(|line| COMMENT_REGEX.is_match(line))
            .map(|line| line[2..].trim().to_owned())
            .collect();

        let conception_details = lines
            .iter()
            .find_map(|line| CONCEPTION_REGEX.captures(line))
            .map(|captures| captures[1].trim().to_owned());

        let origin = match lines.iter().find_map(|line| ORIGIN_REGEX.captures(line)) {
            Some(captures) => Coordinate::new(parse_i64(&captures[1])?, parse_i64(&captures[2])?),
            None => Coordinate::ORIGIN,
        };

        let cells = decode_cell_data(&lines, origin)?;

        Ok(Self {
            rule,
            width: header.width,
            height: header.height,
            conception_details,
            pattern: Pattern {
                cells,
                comments,
                origin,
            },
        })
    }
}
impl fmt::Display for RlePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pattern
            .write_grid(f, self.pattern.origin, self.width, self.height)
    }
}

/// Concatenates the encoded cell-data lines and walks the run stream from
/// `origin`, producing the live-cell set.
fn decode_cell_data(lines: &[&str], origin: Coordinate) -> PatternResult<HashSet<Cell>> {
    let data: String = lines
        .iter()
        .filter(|line| DATA_LINE_REGEX.is_match(line))
        .join("");
    if !data.ends_with('!') {
        return Err(PatternError::UnterminatedData);
    }
    // `!` terminates decoding; anything past it is ignored.
    let encoded = &data[..data.find('!').unwrap_or(data.len())];

    let mut cells = HashSet::new();
    let mut cursor = origin;
    for token in RUN_REGEX.find_iter(encoded) {
        let run: RleRun = token.as_str().parse()?;
        match run.tag {
            RleTag::Alive => {
                for i in 0..run.count {
                    cells.insert(Cell::live(cursor.plus_to_x(i)));
                }
                cursor = cursor.plus_to_x(run.count);
            }
            RleTag::Dead => cursor = cursor.plus_to_x(run.count),
            RleTag::EndRow => cursor = Coordinate::new(origin.x, cursor.y + run.count),
        }
    }
    Ok(cells)
}
