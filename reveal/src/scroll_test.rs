#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn throttle_admits_first_call_and_blocks_window() {
    let mut throttle = Throttle::new(16);
    assert!(throttle.admit(0.0));
    assert!(!throttle.admit(8.0));
    assert!(!throttle.admit(15.9));
    assert!(throttle.admit(16.0));
}

#[test]
fn two_scrolls_within_window_request_one_frame() {
    let mut scroll = ScrollCoordinator::new(16);
    assert!(scroll.on_scroll(0.0, 10.0));
    assert!(!scroll.on_scroll(10.0, 20.0));
    assert!(scroll.frame_requested());
}

#[test]
fn frame_gate_holds_until_flush() {
    let mut scroll = ScrollCoordinator::new(16);
    assert!(scroll.on_scroll(0.0, 10.0));
    // Past the throttle window but the frame has not run yet.
    assert!(!scroll.on_scroll(20.0, 40.0));
    assert_eq!(scroll.flush(), 40.0);
    assert!(!scroll.frame_requested());
    assert!(scroll.on_scroll(40.0, 50.0));
}

#[test]
fn throttled_scroll_still_moves_the_pending_frame() {
    let mut scroll = ScrollCoordinator::new(16);
    assert!(scroll.on_scroll(0.0, 0.0));
    assert!(!scroll.on_scroll(10.0, 500.0));
    assert_eq!(scroll.position(), 500.0);
    assert_eq!(scroll.flush(), 500.0);
}

#[test]
fn burst_of_fifty_events_requests_one_frame() {
    let mut scroll = ScrollCoordinator::new(16);
    let requested = (0..50)
        .filter(|i| scroll.on_scroll(f64::from(*i) * 0.3, f64::from(*i)))
        .count();
    assert_eq!(requested, 1);
}

#[test]
fn debounce_cancels_previous_timer() {
    let mut debounce = Debounce::new(250);
    assert_eq!(debounce.rearm(TimerId(1)), vec![Effect::StartTimeout { timer: TimerId(1), delay_ms: 250 }]);
    assert_eq!(
        debounce.rearm(TimerId(2)),
        vec![
            Effect::CancelTimer { timer: TimerId(1) },
            Effect::StartTimeout { timer: TimerId(2), delay_ms: 250 },
        ]
    );
    assert!(!debounce.settle(TimerId(1)));
    assert!(debounce.settle(TimerId(2)));
    assert!(!debounce.settle(TimerId(2)));
}

#[test]
fn navbar_background_fades_in_over_first_hundred_pixels() {
    assert_eq!(navbar_background(0.0, false), "rgba(255, 255, 255, 0)");
    assert_eq!(navbar_background(50.0, false), "rgba(255, 255, 255, 0.45)");
    assert_eq!(navbar_background(400.0, false), "rgba(255, 255, 255, 0.9)");
    assert_eq!(navbar_background(400.0, true), "rgba(15, 23, 42, 0.9)");
}

#[test]
fn indicator_fades_out_over_three_hundred_pixels() {
    assert_eq!(indicator_opacity(0.0), 1.0);
    assert_eq!(indicator_opacity(150.0), 0.5);
    assert_eq!(indicator_opacity(900.0), 0.0);
}
