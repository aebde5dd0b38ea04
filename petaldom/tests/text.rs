use petaldom::text::{char_width, display_width, pad_to_width, truncate_to_width};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_cjk() {
    // CJK characters are 2 cells wide
    assert_eq!(display_width("日本"), 4);
    assert_eq!(display_width("a日b"), 4);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
    assert_eq!(char_width('\u{0301}'), 0);
}

#[test]
fn test_pad_to_width() {
    assert_eq!(pad_to_width("ab", 4), "ab  ");
    assert_eq!(pad_to_width("日", 3), "日 ");
}

#[test]
fn test_pad_to_width_never_shrinks() {
    assert_eq!(pad_to_width("abcdef", 3), "abcdef");
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate_to_width("hello", 5), "hello");
    assert_eq!(truncate_to_width("hello", 10), "hello");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(display_width(&truncate_to_width("hello world", 8)), 8);
}

#[test]
fn test_truncate_wide_chars() {
    // A wide char that would straddle the limit is dropped
    assert_eq!(truncate_to_width("日本語", 4), "日…");
}

#[test]
fn test_truncate_zero() {
    assert_eq!(truncate_to_width("hello", 0), "");
}
