use super::*;

#[test]
fn capable_device_without_preference_has_no_overrides() {
    let policy = MotionPolicy::detect(Some(8), false);
    assert!(policy.css_overrides().is_empty());
    assert_eq!(policy.stylesheet(), None);
}

#[test]
fn low_core_count_shortens_transitions() {
    let policy = MotionPolicy::detect(Some(2), false);
    assert!(policy.low_end);
    assert_eq!(
        policy.css_overrides(),
        vec![("--transition-normal", "0.15s ease"), ("--transition-slow", "0.25s ease")]
    );
}

#[test]
fn unknown_core_count_is_not_low_end() {
    assert!(!MotionPolicy::detect(None, false).low_end);
    assert!(!MotionPolicy::detect(Some(0), false).low_end);
}

#[test]
fn reduced_motion_zeroes_transitions_last() {
    let policy = MotionPolicy::detect(Some(2), true);
    let overrides = policy.css_overrides();
    assert_eq!(overrides.last(), Some(&("--transition-slow", "0s")));
    assert!(policy.stylesheet().is_some_and(|css| css.contains("0.01ms !important")));
}

#[test]
fn play_state_follows_visibility() {
    assert_eq!(play_state(true), "paused");
    assert_eq!(play_state(false), "running");
}

#[test]
fn intro_steps_start_hidden_before_revealing() {
    let hero: Vec<_> = INTRO_STEPS.iter().filter(|s| s.target == IntroTarget::HeroContent).collect();
    assert_eq!(hero[0].at_ms, 0);
    assert!(hero[0].styles.contains(&("opacity", "0")));
    assert_eq!(hero[1].at_ms, 500);
    assert!(hero[1].styles.contains(&("opacity", "1")));
}
