//! The [Life 1.06 format](https://conwaylife.com/wiki/Life_1.06): a header
//! line followed by one `x y` coordinate pair per live cell.
//!
//! Life 1.06 coordinates are absolute; decoded cells keep their raw
//! positions and are never re-based against the bounding box (unlike Life
//! 1.05).

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::pattern::{Cell, Coordinate, Pattern};
use crate::{parse_i64, significant_lines, PatternError, PatternResult};


lazy_static! {
    /// Required first significant line.
    static ref HEADER_REGEX: Regex = Regex::new(r"^#Life\s+1\.06$").unwrap();
    /// Two whitespace-separated signed integers: one live cell.
    static ref COORDINATE_REGEX: Regex =
        Regex::new(r"^(-?[0-9]+)\s+(-?[0-9]+)$").unwrap();
}

/// A decoded Life 1.06 pattern.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Life106Pattern {
    /// Bounding-box width.
    pub width: i64,
    /// Bounding-box height.
    pub height: i64,
    /// Cells and origin. The format has no comment or rule syntax.
    pub pattern: Pattern,
}
impl Life106Pattern {
    /// Live cells, at their raw absolute coordinates.
    pub fn cells(&self) -> &HashSet<Cell> {
        &self.pattern.cells
    }
    /// Top-left corner of the bounding box.
    pub fn origin(&self) -> Coordinate {
        self.pattern.origin
    }
}
impl FromStr for Life106Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> PatternResult<Self> {
        let lines = significant_lines(s)?;
        if !HEADER_REGEX.is_match(lines[0]) {
            return Err(PatternError::MissingOrInvalidHeader);
        }

        let mut cells = HashSet::new();
        let mut min_x: Option<i64> = None;
        let mut min_y: Option<i64> = None;
        let mut max_x: Option<i64> = None;
        let mut max_y: Option<i64> = None;

        for captures in lines.iter().filter_map(|line| COORDINATE_REGEX.captures(line)) {
            let coordinate = Coordinate::new(parse_i64(&captures[1])?, parse_i64(&captures[2])?);
            cells.insert(Cell::live(coordinate));
            // Maxes are exclusive upper bounds.
            min_x = Some(min_x.map_or(coordinate.x, |m| m.min(coordinate.x)));
            min_y = Some(min_y.map_or(coordinate.y, |m| m.min(coordinate.y)));
            max_x = Some(max_x.map_or(coordinate.x + 1, |m| m.max(coordinate.x + 1)));
            max_y = Some(max_y.map_or(coordinate.y + 1, |m| m.max(coordinate.y + 1)));
        }

        let min_x = min_x.unwrap_or(0);
        let min_y = min_y.unwrap_or(0);
        Ok(Self {
            width: max_x.unwrap_or(min_x) - min_x,
            height: max_y.unwrap_or(min_y) - min_y,
            pattern: Pattern {
                cells,
                comments: vec![],
                origin: Coordinate::new(min_x, min_y),
            },
        })
    }
}
impl fmt::Display for Life106Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pattern
            .write_grid(f, self.pattern.origin, self.width, self.height)
    }
}
