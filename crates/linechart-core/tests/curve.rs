// File: crates/linechart-core/tests/curve.rs
// Purpose: Validate the midpoint control-point heuristic and degenerate input.

use skia_safe::Point;

use linechart_core::curve::{fill_path, smooth_segments, stroke_path};

#[test]
fn control_points_sit_at_horizontal_midpoint() {
    let points = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
    let segments = smooth_segments(&points);
    assert_eq!(segments.len(), 1);

    let seg = segments[0];
    assert_eq!(seg.c1, Point::new(5.0, 0.0));
    assert_eq!(seg.c2, Point::new(5.0, 10.0));
    assert_eq!(seg.to, Point::new(10.0, 10.0));
}

#[test]
fn one_segment_per_consecutive_pair() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(4.0, 8.0),
        Point::new(10.0, 2.0),
        Point::new(16.0, 5.0),
    ];
    let segments = smooth_segments(&points);
    assert_eq!(segments.len(), 3);
    for (seg, pair) in segments.iter().zip(points.windows(2)) {
        let mid = (pair[0].x + pair[1].x) / 2.0;
        assert_eq!(seg.c1, Point::new(mid, pair[0].y));
        assert_eq!(seg.c2, Point::new(mid, pair[1].y));
        assert_eq!(seg.to, pair[1]);
    }
}

#[test]
fn degenerate_input_draws_nothing() {
    assert!(smooth_segments(&[]).is_empty());
    assert!(smooth_segments(&[Point::new(1.0, 1.0)]).is_empty());
    assert!(stroke_path(&[]).is_none());
    assert!(stroke_path(&[Point::new(1.0, 1.0)]).is_none());
    assert!(fill_path(&[], 100.0).is_none());
    assert!(fill_path(&[Point::new(1.0, 1.0)], 100.0).is_none());
}

#[test]
fn stroke_path_starts_at_first_point() {
    let points = [Point::new(3.0, 7.0), Point::new(9.0, 1.0)];
    let path = stroke_path(&points).expect("two points make a path");
    assert_eq!(path.count_points(), 4); // move + 3 cubic points
    let bounds = path.bounds();
    assert!((bounds.left - 3.0).abs() < 1e-3);
    assert!((bounds.right - 9.0).abs() < 1e-3);
}

#[test]
fn fill_path_extends_to_baseline() {
    let points = [Point::new(2.0, 5.0), Point::new(8.0, 3.0)];
    let path = fill_path(&points, 50.0).expect("fill path");
    let bounds = path.bounds();
    assert!((bounds.bottom - 50.0).abs() < 1e-3, "closed down to the plot bottom");
    assert!((bounds.left - 2.0).abs() < 1e-3, "closed back to the first x");
}
