//! End-to-end behavior of the cursor follower on a headless surface driven
//! by the frame robot.

use folio_effects::{CursorFollower, INTERACTIVE_SELECTORS};
use folio_graphics::Point;
use folio_testing::robot_assertions::{assert_point_approx_eq, assert_strictly_decreasing};
use folio_testing::FrameRobot;

const DESKTOP_WIDTH: f32 = 1920.0;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn attached_follower(robot: &FrameRobot, viewport_width: f32) -> CursorFollower {
    init_logging();
    let follower = CursorFollower::default();
    follower.attach(robot.surface(), viewport_width);
    follower.start(&robot.frame_loop());
    follower
}

#[test]
fn dot_tracks_every_pointer_move_exactly() {
    let robot = FrameRobot::new();
    let follower = attached_follower(&robot, DESKTOP_WIDTH);

    let moves = [(12.0, 640.0), (-3.5, 0.25), (1919.0, 1079.0), (400.0, 300.0)];
    for (x, y) in moves {
        follower.on_pointer_move(x, y);
        let dot = robot.surface().expect_element("custom-cursor");
        assert_eq!(dot.position, Point::new(x, y));
        robot.run_frames(1);
    }

    // Frames never move the dot.
    robot.run_frames(30);
    let dot = robot.surface().expect_element("custom-cursor");
    assert_eq!(dot.position, Point::new(400.0, 300.0));
}

#[test]
fn ring_converges_by_ten_percent_per_frame() {
    let robot = FrameRobot::new();
    let follower = attached_follower(&robot, DESKTOP_WIDTH);
    let target = Point::new(500.0, 300.0);
    follower.on_pointer_move(target.x, target.y);

    for k in 1..=40 {
        assert_eq!(robot.run_frames(1), 1);
        let remaining = 0.9f32.powi(k);
        let expected = Point::new(target.x * (1.0 - remaining), target.y * (1.0 - remaining));
        assert_point_approx_eq(follower.follower(), expected, 1e-2, &format!("frame {k}"));
        let ring = robot.surface().expect_element("cursor-follower");
        assert_eq!(ring.position, follower.follower());
    }
}

#[test]
fn ring_never_overshoots_a_stationary_target() {
    let robot = FrameRobot::new();
    let follower = attached_follower(&robot, DESKTOP_WIDTH);
    let target = Point::new(-250.0, 730.0);
    follower.on_pointer_move(target.x, target.y);

    let mut distances = vec![follower.follower().distance_to(target)];
    // Strict decrease only holds until f32 rounding stalls the step, around
    // frame 140.
    for _ in 0..60 {
        robot.run_frames(1);
        let position = follower.follower();
        assert!(position.x >= target.x && position.x <= 0.0, "x overshot: {position:?}");
        assert!(position.y <= target.y && position.y >= 0.0, "y overshot: {position:?}");
        distances.push(position.distance_to(target));
    }
    assert_strictly_decreasing(&distances, "distance to target");
}

#[test]
fn ring_settles_below_a_pixel_fraction_and_stays_there() {
    let robot = FrameRobot::new();
    let follower = attached_follower(&robot, DESKTOP_WIDTH);
    let target = Point::new(1000.0, 700.0);
    follower.on_pointer_move(target.x, target.y);

    let mut previous = follower.follower().distance_to(target);
    for frame in 1..=2000 {
        robot.run_frames(1);
        let distance = follower.follower().distance_to(target);
        assert!(
            distance <= previous,
            "frame {frame}: distance grew from {previous} to {distance}"
        );
        previous = distance;
    }
    assert!(previous < 1e-3, "ring stalled {previous}px from the pointer");

    let settled = follower.follower();
    robot.run_frames(10);
    assert_eq!(follower.follower(), settled);
}

#[test]
fn small_viewport_hides_cursor_for_the_whole_session() {
    let robot = FrameRobot::new();
    let follower = attached_follower(&robot, 768.0);

    let dot = robot.surface().expect_element("custom-cursor");
    let ring = robot.surface().expect_element("cursor-follower");
    assert!(!dot.visible);
    assert!(!ring.visible);

    follower.on_pointer_move(100.0, 100.0);
    follower.on_hover_enter();
    robot.run_frames(20);

    let dot = robot.surface().expect_element("custom-cursor");
    let ring = robot.surface().expect_element("cursor-follower");
    assert!(!dot.visible && !ring.visible);
    // The update loop still runs behind the hidden elements.
    assert!(ring.moves > 1);
    assert!(follower.follower().x > 0.0);
}

#[test]
fn hover_scales_dot_and_ring_for_every_interactive_target() {
    let robot = FrameRobot::new();
    let follower = attached_follower(&robot, DESKTOP_WIDTH);

    for selector in INTERACTIVE_SELECTORS {
        follower.on_hover_enter();
        let dot = robot.surface().expect_element("custom-cursor");
        let ring = robot.surface().expect_element("cursor-follower");
        assert_eq!(dot.scale, 2.0, "dot scale over {selector}");
        assert_eq!(ring.scale, 1.5, "ring scale over {selector}");

        follower.on_hover_leave();
        let dot = robot.surface().expect_element("custom-cursor");
        let ring = robot.surface().expect_element("cursor-follower");
        assert_eq!(dot.scale, 1.0, "dot reset after {selector}");
        assert_eq!(ring.scale, 1.0, "ring reset after {selector}");
    }
}

#[test]
fn hover_does_not_change_position_updates() {
    let robot = FrameRobot::new();
    let follower = attached_follower(&robot, DESKTOP_WIDTH);
    follower.on_pointer_move(100.0, 0.0);

    follower.on_hover_enter();
    robot.run_frames(1);
    assert_point_approx_eq(follower.follower(), Point::new(10.0, 0.0), 1e-4, "hovered step");
}

#[test]
fn frame_loop_keeps_running_without_retriggering() {
    let robot = FrameRobot::new();
    let follower = attached_follower(&robot, DESKTOP_WIDTH);
    follower.on_pointer_move(50.0, 50.0);

    assert_eq!(robot.run_frames(1_000), 1_000);
    assert!(robot.frame_loop().is_running());
    assert!(robot.scheduler().has_frame_request());
}

#[test]
fn stop_releases_the_frame_task() {
    let robot = FrameRobot::new();
    let follower = attached_follower(&robot, DESKTOP_WIDTH);
    follower.on_pointer_move(100.0, 100.0);
    robot.run_frames(3);
    let frozen = follower.follower();

    follower.stop();
    robot.run_frames(10);
    assert_eq!(follower.follower(), frozen);
    assert_eq!(robot.frame_loop().task_count(), 0);

    follower.start(&robot.frame_loop());
    robot.run_frames(1);
    assert!(follower.follower().x > frozen.x);
}
