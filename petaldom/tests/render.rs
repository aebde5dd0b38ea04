use petaldom::{render_plain, render_styled, Edges, Element, EmptyTheme, Style, WidgetTheme};

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .child(Element::text("Name"))
        .child(Element::text("Email"));

    assert_eq!(render_plain(&root), "Name\nEmail");
}

#[test]
fn test_row_joins_with_gap() {
    let root = Element::row()
        .gap(1)
        .child(Element::text("[x]"))
        .child(Element::text("Orange"));

    assert_eq!(render_plain(&root), "[x] Orange");
}

#[test]
fn test_row_pads_multiline_children() {
    let root = Element::row()
        .gap(2)
        .child(
            Element::col()
                .child(Element::text("a"))
                .child(Element::text("bbb")),
        )
        .child(Element::text("c"));

    assert_eq!(render_plain(&root), "a    c\nbbb");
}

#[test]
fn test_column_gap_inserts_blank_lines() {
    let root = Element::col()
        .gap(1)
        .child(Element::text("a"))
        .child(Element::text("b"));

    assert_eq!(render_plain(&root), "a\n\nb");
}

#[test]
fn test_empty_children_take_no_space() {
    let root = Element::col()
        .gap(1)
        .child(Element::box_())
        .child(Element::text("a"))
        .child(Element::col());

    assert_eq!(render_plain(&root), "a");
}

#[test]
fn test_padding() {
    let root = Element::text("x").padding(Edges::left(2));
    assert_eq!(render_plain(&root), "  x");

    let root = Element::text("x").padding(Edges::vertical(1));
    assert_eq!(render_plain(&root), "\nx\n");
}

#[test]
fn test_text_with_newlines_spans_lines() {
    let root = Element::row()
        .gap(1)
        .child(Element::text("one\ntwo"))
        .child(Element::text("|"));

    assert_eq!(render_plain(&root), "one |\ntwo");
}

#[test]
fn test_wide_characters_align() {
    let root = Element::row()
        .child(
            Element::col()
                .child(Element::text("日本"))
                .child(Element::text("x")),
        )
        .child(Element::text("|\n|"));

    assert_eq!(render_plain(&root), "日本|\nx   |");
}

#[test]
fn test_styled_plain_tree_has_no_escapes() {
    let root = Element::col().child(Element::text("a"));
    let mut out = Vec::new();
    render_styled(&root, &EmptyTheme, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "a\n");
}

#[test]
fn test_styled_output_contains_escapes() {
    let root = Element::text("Orange").style(Style::new().bold());
    let mut out = Vec::new();
    render_styled(&root, &WidgetTheme::new(), &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("\u{1b}["));
    assert!(out.contains("Orange"));
}

#[test]
fn test_disabled_renders_same_text() {
    let root = Element::text("off").disabled(true);
    assert_eq!(render_plain(&root), "off");
}
