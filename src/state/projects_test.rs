use super::*;

const CARDS: [Option<&str>; 4] = [Some("web"), Some("video"), None, Some("web")];

#[test]
fn all_shows_everything() {
    let mut filter = ProjectFilter::default();
    let plan = filter.apply("all", &CARDS);
    assert_eq!(plan.show, vec![0, 1, 2, 3]);
    assert!(plan.hide.is_empty());
}

#[test]
fn category_splits_cards() {
    let mut filter = ProjectFilter::default();
    let plan = filter.apply("web", &CARDS);
    assert_eq!(plan.show, vec![0, 3]);
    assert_eq!(plan.hide, vec![1, 2]);
    assert_eq!(filter.active(), "web");
}

#[test]
fn newer_click_supersedes_pending_hide() {
    let mut filter = ProjectFilter::default();
    let first = filter.apply("web", &CARDS);
    let second = filter.apply("video", &CARDS);
    assert!(!filter.is_current(first.generation));
    assert!(filter.is_current(second.generation));
    assert!(second.show.contains(&1));
}
