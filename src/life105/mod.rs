//! The [Life 1.05 format](https://conwaylife.com/wiki/Life_1.05): blocks of
//! `.`/`*` rows, each block positioned by a `#P x y` header.
//!
//! Decoded cells are re-based so that the bounding box's top-left corner
//! becomes the local `(0, 0)`; the pre-normalization corner is kept as the
//! pattern's origin. This differs from Life 1.06 and RLE, whose coordinates
//! are absolute.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::pattern::{Cell, Coordinate, Pattern};
use crate::{parse_i64, significant_lines, PatternError, PatternResult};

#[cfg(test)]
mod tests;

/// Rule applied when a pattern declares `#N`.
pub const DEFAULT_RULE: &str = "23/3";

lazy_static! {
    /// Required first significant line.
    static ref HEADER_REGEX: Regex = Regex::new(r"^#Life 1\.05$").unwrap();
    /// `#N`: the default rule, with no parameters.
    static ref NORMAL_RULE_REGEX: Regex = Regex::new(r"^#N$").unwrap();
    /// `#R s/b`: an explicit rule, digits 0-8 on each side.
    static ref RULE_REGEX: Regex = Regex::new(r"^#R [0-8]+/[0-8]+$").unwrap();
    /// `#D`, optionally followed by comment text.
    static ref COMMENT_REGEX: Regex = Regex::new(r"^#D( .*)?$").unwrap();
    /// `#P x y`: repositions the decoding cursor for the next cell block.
    static ref CELL_BLOCK_REGEX: Regex =
        Regex::new(r"^#P (-?[0-9]+) (-?[0-9]+)$").unwrap();
    /// A row of dead (`.`) and live (`*`) cells.
    static ref DATA_LINE_REGEX: Regex = Regex::new(r"^[.*]+$").unwrap();
}

/// A decoded Life 1.05 pattern.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Life105Pattern {
    /// Evolution rule, e.g. `23/3`; `None` when the file declares none.
    pub rule: Option<String>,
    /// Bounding-box width.
    pub width: i64,
    /// Bounding-box height.
    pub height: i64,
    /// Cells, comments, and origin.
    pub pattern: Pattern,
}
impl Life105Pattern {
    /// Live cells, re-based to the pattern's local origin.
    pub fn cells(&self) -> &HashSet<Cell> {
        &self.pattern.cells
    }
    /// `#D` comments, in source order.
    pub fn comments(&self) -> &[String] {
        &self.pattern.comments
    }
    /// Top-left corner of the bounding box in the file's coordinate space.
    pub fn origin(&self) -> Coordinate {
        self.pattern.origin
    }
}
impl FromStr for Life105Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> PatternResult<Self> {
        let lines = significant_lines(s)?;
        if !HEADER_REGEX.is_match(lines[0]) {
            return Err(PatternError::MissingOrInvalidHeader);
        }

        let rule = extract_rule(&lines)?;
        let comments = lines
            .iter()
            .filter(|line| COMMENT_REGEX.is_match(line))
            .map(|line| line[2..].trim().to_owned())
            .collect();
        let (width, height, origin, cells) = extract_cells(&lines)?;

        Ok(Self {
            rule,
            width,
            height,
            pattern: Pattern {
                cells,
                comments,
                origin,
            },
        })
    }
}
impl fmt::Display for Life105Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pattern
            .write_grid(f, Coordinate::ORIGIN, self.width, self.height)
    }
}

/// Finds the pattern's rule declaration, if any. `#N` means the default
/// rule; `#R` supplies one verbatim. Declaring both is an error.
fn extract_rule(lines: &[&str]) -> PatternResult<Option<String>> {
    let normal = lines.iter().any(|line| NORMAL_RULE_REGEX.is_match(line));
    let explicit = lines.iter().find(|line| RULE_REGEX.is_match(line));
    match (normal, explicit) {
        (true, Some(_)) => Err(PatternError::ConflictingRule),
        (true, None) => Ok(Some(DEFAULT_RULE.to_owned())),
        (false, Some(line)) => Ok(line.strip_prefix("#R").map(|r| r.trim().to_owned())),
        (false, None) => Ok(None),
    }
}

/// Decodes the `#P` blocks and `.`/`*` rows into a normalized cell set plus
/// bounding box, returning `(width, height, origin, cells)`.
fn extract_cells(lines: &[&str]) -> PatternResult<(i64, i64, Coordinate, HashSet<Cell>)> {
    let mut cursor = Coordinate::ORIGIN;
    let mut min_x: Option<i64> = None;
    let mut min_y: Option<i64> = None;
    let mut max_x: Option<i64> = None;
    let mut max_y: Option<i64> = None;
    let mut raw_cells: HashSet<Cell> = HashSet::new();

    for line in lines {
        if let Some(captures) = CELL_BLOCK_REGEX.captures(line) {
            cursor = Coordinate::new(parse_i64(&captures[1])?, parse_i64(&captures[2])?);
            min_x = Some(min_x.map_or(cursor.x, |m| m.min(cursor.x)));
            min_y = Some(min_y.map_or(cursor.y, |m| m.min(cursor.y)));
        } else if DATA_LINE_REGEX.is_match(line) {
            let row_start_x = cursor.x;
            for (run_length, symbol) in line.chars().dedup_with_count() {
                if symbol == '*' {
                    for i in 0..run_length as i64 {
                        raw_cells.insert(Cell::live(cursor.plus_to_x(i)));
                    }
                }
                cursor = cursor.plus_to_x(run_length as i64);
            }
            max_x = Some(max_x.map_or(cursor.x, |m| m.max(cursor.x)));
            cursor = Coordinate::new(row_start_x, cursor.y + 1);
            max_y = Some(max_y.map_or(cursor.y, |m| m.max(cursor.y)));
        }
        // Lines matching no recognized grammar are silently skipped.
    }

    let min_x = min_x.unwrap_or(0);
    let min_y = min_y.unwrap_or(0);
    let width = max_x.map_or(0, |max| max - min_x);
    let height = max_y.map_or(0, |max| max - min_y);
    let cells = raw_cells
        .into_iter()
        .map(|cell| Cell::live(cell.coordinate.offset(-min_x, -min_y)))
        .collect();
    Ok((width, height, Coordinate::new(min_x, min_y), cells))
}
