use proptest::*;

use super::*;
use crate::DecodePattern;

#[test]
fn test_single_row() {
    let pattern: Life105Pattern = "#Life 1.05\n#N\n#P 0 0\n.*.\n".parse().unwrap();
    assert_eq!(Some(DEFAULT_RULE), pattern.rule.as_deref());
    assert_eq!(3, pattern.width);
    assert_eq!(1, pattern.height);
    assert_eq!(Coordinate::ORIGIN, pattern.origin());
    assert_eq!(1, pattern.cells().len());
    assert!(pattern.pattern.contains(1, 0));
}

#[test]
fn test_glider() {
    let pattern: Life105Pattern = "\
#Life 1.05
#N
#P 0 0
.*.
..*
***
"
    .parse()
    .unwrap();
    assert_eq!(3, pattern.width);
    assert_eq!(3, pattern.height);
    assert_eq!(5, pattern.cells().len());
    for &(x, y) in &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
        assert!(pattern.pattern.contains(x, y), "missing cell ({}, {})", x, y);
    }
    assert_eq!(".*.\n..*\n***", pattern.to_string());
}

#[test]
fn test_explicit_rule() {
    let pattern: Life105Pattern = "#Life 1.05\n#R 23/3\n#P 0 0\n*\n".parse().unwrap();
    assert_eq!(Some("23/3"), pattern.rule.as_deref());
}

#[test]
fn test_no_rule() {
    let pattern: Life105Pattern = "#Life 1.05\n#P 0 0\n*\n".parse().unwrap();
    assert_eq!(None, pattern.rule);
}

#[test]
fn test_conflicting_rule() {
    let result = "#Life 1.05\n#N\n#R 23/3\n#P 0 0\n*\n".parse::<Life105Pattern>();
    assert_eq!(Err(PatternError::ConflictingRule), result);
}

#[test]
fn test_comments() {
    let pattern: Life105Pattern = "\
#Life 1.05
#D first comment
#D
#D   second comment
#P 0 0
*
"
    .parse()
    .unwrap();
    assert_eq!(
        pattern.comments(),
        vec!["first comment", "", "second comment"],
    );
}

#[test]
fn test_blocks_normalized_to_local_origin() {
    // Two blocks; the whole pattern is translated so its top-left corner
    // becomes (0, 0), and the pre-normalization corner is kept as origin.
    let pattern: Life105Pattern = "\
#Life 1.05
#P -2 -1
**
#P 1 1
.*
"
    .parse()
    .unwrap();
    assert_eq!(Coordinate::new(-2, -1), pattern.origin());
    assert_eq!(5, pattern.width); // max cursor x 3, min x -2
    assert_eq!(3, pattern.height); // max cursor y 2, min y -1
    assert_eq!(3, pattern.cells().len());
    assert!(pattern.pattern.contains(0, 0));
    assert!(pattern.pattern.contains(1, 0));
    assert!(pattern.pattern.contains(4, 2));
}

#[test]
fn test_no_cell_data() {
    let pattern: Life105Pattern = "#Life 1.05\n#N\n".parse().unwrap();
    assert_eq!(0, pattern.width);
    assert_eq!(0, pattern.height);
    assert!(pattern.cells().is_empty());
    assert_eq!(Coordinate::ORIGIN, pattern.origin());
}

#[test]
fn test_unrecognized_lines_skipped() {
    let pattern: Life105Pattern = "#Life 1.05\n#X whatever\nnot cell data\n#P 0 0\n*\n"
        .parse()
        .unwrap();
    assert_eq!(1, pattern.cells().len());
}

#[test]
fn test_empty_input() {
    assert_eq!(
        Err(PatternError::EmptyInput),
        "\n   \n\t\n".parse::<Life105Pattern>(),
    );
}

#[test]
fn test_missing_header() {
    assert_eq!(
        Err(PatternError::MissingOrInvalidHeader),
        "#Life 1.06\n0 0\n".parse::<Life105Pattern>(),
    );
}

#[test]
fn test_deterministic() {
    let s = "#Life 1.05\n#N\n#D glider\n#P -1 -1\n.*.\n..*\n***\n";
    let first: Life105Pattern = s.parse().unwrap();
    let second: Life105Pattern = Life105Pattern::from_reader(s.as_bytes()).unwrap();
    assert_eq!(first, second);
}

proptest! {
    /// The decoder may reject arbitrary input but must never panic.
    #[test]
    fn test_no_panic(s in ".{0,40}") {
        let _ = s.parse::<Life105Pattern>();
    }
}
