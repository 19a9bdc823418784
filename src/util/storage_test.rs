#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn reads_are_empty_outside_the_browser() {
    assert_eq!(load(Area::Local, "theme"), None);
    assert_eq!(load_json::<Vec<u32>>(Area::Session, "selectedCourse"), None);
}

#[test]
fn writes_are_callable_outside_the_browser() {
    save(Area::Local, "theme", "dark");
    save_json(Area::Session, "selectedCourse", &vec![1, 2, 3]);
}
