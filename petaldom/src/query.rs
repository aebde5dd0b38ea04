use crate::element::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// All elements carrying `class`, in tree order.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    walk(root, &mut |el| {
        if el.has_class(class) {
            found.push(el);
        }
    });
    found
}

/// IDs of clickable, enabled elements in tree order.
pub fn collect_clickable(root: &Element) -> Vec<String> {
    let mut ids = Vec::new();
    walk(root, &mut |el| {
        if el.clickable && !el.disabled {
            ids.push(el.id.clone());
        }
    });
    ids
}

/// Text of every text element in document order.
pub fn collect_text(root: &Element) -> Vec<String> {
    let mut texts = Vec::new();
    walk(root, &mut |el| {
        if let Some(text) = el.text_content() {
            texts.push(text.to_string());
        }
    });
    texts
}

fn walk<'a>(element: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    visit(element);
    for child in element.child_elements() {
        walk(child, visit);
    }
}
