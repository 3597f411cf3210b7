//! Validates cell cropping and the common-edge adjacency relation

use mondrigen::geometry::{Color, Line, Orientation, Rect};

#[test]
fn test_common_edge_not_touching() {
    let r1 = Rect::new(10, 10, 100, 100);
    let r2 = Rect::new(101, 101, 200, 200);

    assert!(!r1.has_common_edge_with(&r2));
    assert!(!r2.has_common_edge_with(&r1));
}

#[test]
fn test_common_edge_corner_touch_does_not_count() {
    let r1 = Rect::new(10, 10, 100, 100);
    let r2 = Rect::new(100, 100, 200, 200);

    assert!(!r1.has_common_edge_with(&r2));
    assert!(!r2.has_common_edge_with(&r1));
}

#[test]
fn test_common_edge_shared_vertical_edge() {
    let r1 = Rect::new(10, 10, 100, 100);
    let r2 = Rect::new(100, 50, 200, 200);

    assert!(r1.has_common_edge_with(&r2));
    assert!(r2.has_common_edge_with(&r1));
}

#[test]
fn test_common_edge_vertical_edge_subset() {
    let r1 = Rect::new(10, 10, 100, 100);
    let r2 = Rect::new(100, 5, 200, 200);

    assert!(r1.has_common_edge_with(&r2));
    assert!(r2.has_common_edge_with(&r1));
}

#[test]
fn test_common_edge_shared_horizontal_edge() {
    let r1 = Rect::new(10, 10, 100, 100);
    let r2 = Rect::new(50, 100, 200, 200);

    assert!(r1.has_common_edge_with(&r2));
    assert!(r2.has_common_edge_with(&r1));
}

#[test]
fn test_common_edge_horizontal_edge_subset() {
    let r1 = Rect::new(10, 10, 100, 100);
    let r2 = Rect::new(5, 100, 200, 200);

    assert!(r1.has_common_edge_with(&r2));
    assert!(r2.has_common_edge_with(&r1));
}

#[test]
fn test_crop_emits_nearer_slice_and_keeps_farther() {
    let mut cell = Rect::new(0, 0, 100, 100);
    let line = Line::new(Orientation::Vertical, 30, (0, 100), 2, true);

    let piece = cell.crop(&line);

    assert_eq!(piece, Some(Rect::new(0, 0, 30, 100)));
    assert_eq!(cell, Rect::new(30, 0, 100, 100));
}

#[test]
fn test_crop_nearer_side_can_be_trailing() {
    let mut cell = Rect::new(0, 0, 100, 100);
    let line = Line::new(Orientation::Vertical, 70, (0, 100), 2, true);

    let piece = cell.crop(&line);

    assert_eq!(piece, Some(Rect::new(70, 0, 100, 100)));
    assert_eq!(cell, Rect::new(0, 0, 70, 100));
}

#[test]
fn test_crop_tie_keeps_leading_slice_as_continuing_cell() {
    let mut cell = Rect::new(0, 0, 100, 100);
    let line = Line::new(Orientation::Vertical, 50, (0, 100), 2, true);

    let piece = cell.crop(&line);

    assert_eq!(piece, Some(Rect::new(50, 0, 100, 100)));
    assert_eq!(cell, Rect::new(0, 0, 50, 100));
}

#[test]
fn test_crop_horizontal_line() {
    let mut cell = Rect::new(10, 10, 110, 210);
    let line = Line::new(Orientation::Horizontal, 40, (0, 200), 2, true);

    let piece = cell.crop(&line);

    assert_eq!(piece, Some(Rect::new(10, 10, 110, 40)));
    assert_eq!(cell, Rect::new(10, 40, 110, 210));
}

#[test]
fn test_crop_ignores_line_outside_cell() {
    let mut cell = Rect::new(0, 0, 100, 100);

    let at_edge = Line::new(Orientation::Vertical, 100, (0, 100), 2, true);
    assert_eq!(cell.crop(&at_edge), None);

    let beyond = Line::new(Orientation::Vertical, 150, (0, 100), 2, true);
    assert_eq!(cell.crop(&beyond), None);

    assert_eq!(cell, Rect::new(0, 0, 100, 100));
}

#[test]
fn test_crop_requires_span_overlap() {
    let mut cell = Rect::new(0, 0, 100, 100);

    let disjoint = Line::new(Orientation::Vertical, 50, (200, 300), 2, true);
    assert_eq!(cell.crop(&disjoint), None);

    // Span touching the cell edge at a single point is not an overlap
    let touching = Line::new(Orientation::Vertical, 50, (100, 200), 2, true);
    assert_eq!(cell.crop(&touching), None);

    assert_eq!(cell, Rect::new(0, 0, 100, 100));
}

#[test]
fn test_crop_piece_inherits_color() {
    let mut cell = Rect::new(0, 0, 100, 100);
    cell.color = Color::Red;

    let line = Line::new(Orientation::Vertical, 30, (0, 100), 2, true);
    let piece = cell.crop(&line);

    assert!(piece.is_some_and(|slice| slice.color == Color::Red));
    assert_eq!(cell.color, Color::Red);
}

#[test]
fn test_area_and_emptiness() {
    let cell = Rect::new(10, 20, 110, 70);
    assert_eq!(cell.area(), 5000);
    assert!(!cell.is_empty());

    let degenerate = Rect::new(10, 20, 10, 70);
    assert!(degenerate.is_empty());
    assert_eq!(degenerate.area(), 0);

    let inverted = Rect::new(50, 20, 10, 70);
    assert!(inverted.is_empty());
    assert_eq!(inverted.area(), 0);
}

#[test]
fn test_line_segment_endpoints() {
    let vertical = Line::new(Orientation::Vertical, 40, (10, 90), 2, true);
    assert_eq!(vertical.left(), 40);
    assert_eq!(vertical.right(), 40);
    assert_eq!(vertical.top(), 10);
    assert_eq!(vertical.bottom(), 90);

    let horizontal = Line::new(Orientation::Horizontal, 25, (5, 95), 2, true);
    assert_eq!(horizontal.left(), 5);
    assert_eq!(horizontal.right(), 95);
    assert_eq!(horizontal.top(), 25);
    assert_eq!(horizontal.bottom(), 25);
}

#[test]
fn test_line_span_is_normalized_and_inclusive() {
    let line = Line::new(Orientation::Horizontal, 25, (95, 5), 2, true);
    assert_eq!(line.span, (5, 95));

    assert!(line.spans(5));
    assert!(line.spans(95));
    assert!(line.spans(40));
    assert!(!line.spans(4));
    assert!(!line.spans(96));
}
