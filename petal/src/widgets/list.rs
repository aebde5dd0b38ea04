//! List primitive - renders items through a caller supplied item renderer.

use petaldom::Element;

/// Render `items` as a column, one element per item, in order.
///
/// The renderer receives the item's index and the item; anything else it
/// needs (selection state, callbacks) is captured by the closure.
///
/// # Example
///
/// ```ignore
/// let list = render_list("fruits", &fruits, |i, fruit| {
///     Element::text(fruit.name()).id(format!("fruits-{i}"))
/// });
/// ```
pub fn render_list<T>(
    id: impl Into<String>,
    items: &[T],
    mut render_item: impl FnMut(usize, &T) -> Element,
) -> Element {
    let id = id.into();
    log::debug!("render_list id={} items={}", id, items.len());

    Element::col()
        .id(id)
        .class("list")
        .children(items.iter().enumerate().map(|(i, item)| render_item(i, item)))
}
