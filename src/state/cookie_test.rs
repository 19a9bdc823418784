use super::*;

#[test]
fn banner_shows_until_consent_is_stored() {
    assert!(should_show(None));
    assert!(should_show(Some("")));
    assert!(!should_show(Some(CONSENT_ACCEPTED)));
}
