use super::*;

#[test]
fn child_offsets_scale_with_index() {
    assert_eq!(child_offset_ms(0, 100), 0);
    assert_eq!(child_offset_ms(1, 100), 100);
    assert_eq!(child_offset_ms(7, 100), 700);
    assert_eq!(child_offset_ms(usize::MAX, 100), u32::MAX);
}

#[test]
fn split_glyphs_uses_chars_and_nbsp() {
    let glyphs = split_glyphs("Hi é");
    let texts: Vec<&str> = glyphs.iter().map(|g| g.text.as_str()).collect();
    assert_eq!(texts, vec!["H", "i", "\u{a0}", "é"]);
}

#[test]
fn glyph_transitions_step_by_fifty_ms() {
    let glyphs = split_glyphs("abc");
    assert_eq!(glyph_transition(&glyphs[0]), "all 0.3s ease 0s");
    assert_eq!(glyph_transition(&glyphs[1]), "all 0.3s ease 0.05s");
    assert_eq!(glyph_transition(&glyphs[2]), "all 0.3s ease 0.1s");
}
