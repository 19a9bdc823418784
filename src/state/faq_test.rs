use super::*;

#[test]
fn clicking_opens_one_item_at_a_time() {
    let mut faq = Accordion::default();
    assert_eq!(faq.click(2), Some(2));
    assert_eq!(faq.click(0), Some(0));
    assert_eq!(faq.open(), Some(0));
}

#[test]
fn clicking_open_item_closes_it() {
    let mut faq = Accordion::default();
    faq.click(1);
    assert_eq!(faq.click(1), None);
    assert_eq!(faq.open(), None);
}

#[test]
fn starts_from_markup_state() {
    let mut faq = Accordion::with_open(Some(3));
    assert_eq!(faq.click(3), None);
}
