//! Assertion utilities for robot testing
//!
//! Positions produced by easing are floating point; these helpers compare
//! them with an explicit tolerance and readable failure messages.

use folio_graphics::Point;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that both coordinates of a point are approximately equal.
pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that a sequence is strictly decreasing.
pub fn assert_strictly_decreasing(values: &[f32], msg: &str) {
    for (index, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] < pair[0],
            "{}: value {} at step {} is not below {}",
            msg,
            pair[1],
            index + 1,
            pair[0]
        );
    }
}
