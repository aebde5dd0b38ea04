use petaldom::{collect_clickable, collect_text, find_by_class, find_element, Element};

fn sample() -> Element {
    Element::col()
        .id("root")
        .child(Element::text("Label").id("label").class("form-el-label"))
        .child(
            Element::row()
                .id("buttons")
                .child(Element::text("ok").id("ok").clickable(true))
                .child(
                    Element::text("cancel")
                        .id("cancel")
                        .clickable(true)
                        .disabled(true),
                ),
        )
}

#[test]
fn test_find_element_by_id() {
    let root = sample();
    let found = find_element(&root, "ok").unwrap();
    assert_eq!(found.text_content(), Some("ok"));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_collect_clickable_skips_disabled() {
    assert_eq!(collect_clickable(&sample()), vec!["ok".to_string()]);
}

#[test]
fn test_collect_text_in_document_order() {
    assert_eq!(
        collect_text(&sample()),
        vec!["Label".to_string(), "ok".to_string(), "cancel".to_string()]
    );
    assert!(collect_text(&Element::row()).is_empty());
}

#[test]
fn test_find_by_class() {
    let root = sample();
    let labels = find_by_class(&root, "form-el-label");
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].id, "label");
}

#[test]
fn test_class_ignores_empty_and_duplicates() {
    let el = Element::box_().class("").class("a").class("a");
    assert_eq!(el.classes, vec!["a".to_string()]);
}

#[test]
fn test_data_attributes() {
    let el = Element::text("Apple").data("option-id", "A");
    assert_eq!(el.get_data("option-id").map(String::as_str), Some("A"));
}
