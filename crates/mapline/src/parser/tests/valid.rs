use super::*;

#[test]
fn single_record() {
    let outcome = parsed("100 100 200 200 blue");
    assert_eq!(outcome.edges, vec![edge(100, 100, 200, 200, "blue")]);
    assert!(outcome.rejects.is_empty());
}

#[test]
fn multiple_records_in_input_order() {
    let outcome = parsed("0 0 10 10 red\n10 10 20 20 green\n20 20 30 30 blue");
    assert_eq!(
        outcome.edges,
        vec![
            edge(0, 0, 10, 10, "red"),
            edge(10, 10, 20, 20, "green"),
            edge(20, 20, 30, 30, "blue"),
        ]
    );
}

#[test]
fn boundary_coordinates() {
    let outcome = parsed("0 0 4000 4000 black");
    assert_eq!(outcome.edges, vec![edge(0, 0, 4000, 4000, "black")]);
    assert!(outcome.rejects.is_empty());
}

#[test]
fn extra_whitespace_between_fields() {
    let outcome = parsed("  1   2\t3  4   purple  ");
    assert_eq!(outcome.edges, vec![edge(1, 2, 3, 4, "purple")]);
}

#[test]
fn blank_interior_lines_are_skipped() {
    let outcome = parsed("1 1 2 2 red\n\n3 3 4 4 blue");
    assert_eq!(outcome.edges.len(), 2);
    assert!(outcome.rejects.is_empty());
}

#[test]
fn trailing_fields_are_ignored() {
    let outcome = parsed("1 1 2 2 red extra tokens");
    assert_eq!(outcome.edges, vec![edge(1, 1, 2, 2, "red")]);
    assert!(outcome.rejects.is_empty());
}

#[test]
fn duplicate_records_are_not_merged() {
    let outcome = parsed("5 5 6 6 red\n5 5 6 6 red");
    assert_eq!(outcome.edges.len(), 2);
    assert_eq!(outcome.edges[0], outcome.edges[1]);
}

#[test]
fn parse_is_idempotent() {
    let text = "100 100 200 200 blue\n0 0 4000 4000 red";
    let first = parsed(text);
    let second = parsed(text);
    assert_eq!(first, second);
}

#[test]
fn zero_length_segment_is_valid() {
    // A degenerate segment (both endpoints equal) still draws a point.
    let outcome = parsed("7 7 7 7 orange");
    assert_eq!(outcome.edges, vec![edge(7, 7, 7, 7, "orange")]);
}
