use tuidom::text::{align_offset, char_width, display_width, truncate_to_width};
use tuidom::TextAlign;

#[test]
fn test_display_width() {
    assert_eq!(display_width("Page 1"), 6);
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("日本"), 4);
}

#[test]
fn test_glyph_widths() {
    assert_eq!(char_width('✓'), 1);
    assert_eq!(char_width('─'), 1);
    assert_eq!(display_width("[✓]"), 3);
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate_to_width("Done", 10), "Done");
    assert_eq!(truncate_to_width("Done", 4), "Done");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("All pages", 5), "All …");
    assert_eq!(truncate_to_width("日本語", 4), "日…");
    assert_eq!(truncate_to_width("abc", 0), "");
}

#[test]
fn test_align_offset() {
    assert_eq!(align_offset(4, 10, TextAlign::Left), 0);
    assert_eq!(align_offset(4, 10, TextAlign::Center), 3);
    assert_eq!(align_offset(4, 10, TextAlign::Right), 6);
    assert_eq!(align_offset(12, 10, TextAlign::Center), 0);
}
