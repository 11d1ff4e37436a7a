//! Tests against a worked 4-entry example.

use crate::{closest_pair, format_table, neighbor_join, ClusterError, DistanceMatrix};

const MATRIX: &str = "\
.  a  b  c  d
a  0  7 11 14
b  7  0  6  9
c 11  6  0  7
d 14  9  7  0
";

fn matrix() -> DistanceMatrix {
    DistanceMatrix::parse(MATRIX).unwrap()
}

#[test]
fn parse() {
    let matrix = matrix();
    assert_eq!(matrix.len(), 4);
    assert_eq!(matrix.labels(), ["a", "b", "c", "d"]);
    assert_eq!(matrix.distances()[0], [0.0, 7.0, 11.0, 14.0]);
    assert_eq!(matrix.distances()[3], [14.0, 9.0, 7.0, 0.0]);
}

#[test]
fn parse_skips_blank_lines() {
    let padded = format!("\n{MATRIX}\n\n");
    assert_eq!(DistanceMatrix::parse(&padded).unwrap(), matrix());
}

#[test]
fn parse_bad_number() {
    let text = ".  a  b\na  0  x\nb  x  0\n";
    assert!(matches!(
        DistanceMatrix::parse(text),
        Err(ClusterError::BadNumber { line: 2, ref value }) if value == "x"
    ));
}

#[test]
fn parse_row_length() {
    let text = ".  a  b\na  0  1\nb  1\n";
    assert!(matches!(
        DistanceMatrix::parse(text),
        Err(ClusterError::RowLength {
            line: 3,
            expected: 2,
            found: 1,
        })
    ));
}

#[test]
fn parse_too_small() {
    assert!(matches!(
        DistanceMatrix::parse(".  a\na  0\n"),
        Err(ClusterError::TooSmall)
    ));
    assert!(matches!(
        DistanceMatrix::parse(""),
        Err(ClusterError::TooSmall)
    ));
}

#[test]
fn parse_row_count() {
    let text = ".  a  b\na  0  1\n";
    assert!(matches!(
        DistanceMatrix::parse(text),
        Err(ClusterError::RowCount {
            expected: 2,
            found: 1,
        })
    ));
}

#[test]
fn row_sums_and_q_scores() {
    let matrix = matrix();
    let row_sums = matrix.row_sums();
    assert_eq!(row_sums, [32.0, 22.0, 24.0, 30.0]);

    let q = matrix.q_matrix(&row_sums);
    assert_eq!(q[0][1], 3.0 * 7.0 - 32.0 - 22.0); // -33
    assert_eq!(q[0][2], -23.0);
    assert_eq!(q[2][3], -33.0);
    assert_eq!(q[1][0], q[0][1]);
    assert_eq!(q[0][0], 0.0);
}

#[test]
fn closest_pair_breaks_ties_row_major() {
    let matrix = matrix();
    let q = matrix.q_matrix(&matrix.row_sums());
    // Q(a, b) and Q(c, d) tie at -33; the row-major first pair wins.
    assert_eq!(closest_pair(&q), (0, 1));
}

#[test]
fn merge_reduces_distances() {
    let mut matrix = matrix();
    let merge = matrix.merge(0, 1);
    assert_eq!(merge.left, "a");
    assert_eq!(merge.right, "b");
    assert_eq!(merge.merged, "ab");

    assert_eq!(matrix.labels(), ["ab", "c", "d"]);
    // d(ab, c) = (11 + 6 - 7) / 2, d(ab, d) = (14 + 9 - 7) / 2.
    assert_eq!(matrix.distances()[0], [0.0, 5.0, 8.0]);
    assert_eq!(matrix.distances()[1], [5.0, 0.0, 7.0]);
    assert_eq!(matrix.distances()[2], [8.0, 7.0, 0.0]);
}

#[test]
fn full_reduction() {
    let mut matrix = matrix();
    let merges = neighbor_join(&mut matrix);
    let merged: Vec<&str> = merges.iter().map(|m| m.merged.as_str()).collect();
    assert_eq!(merged, ["ab", "abc", "abcd"]);
    assert_eq!(matrix.len(), 1);
    assert_eq!(matrix.labels(), ["abcd"]);
}

#[test]
fn table_rendering() {
    let labels = vec!["ab".to_owned(), "c".to_owned()];
    let values = vec![vec![0.0, 5.5], vec![5.5, 0.0]];

    let plain = format_table(&labels, &values, None);
    assert_eq!(plain, "   |  ab    c\nab |   0  5.5\nc  | 5.5    0");

    let annotated = format_table(&labels, &values, Some(&[5.5, 5.5]));
    assert_eq!(
        annotated,
        "   |  ab    c\nab |   0  5.5  (5.5)\nc  | 5.5    0  (5.5)"
    );
}
