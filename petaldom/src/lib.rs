pub mod element;
pub mod query;
pub mod render;
pub mod text;
pub mod types;

pub use element::Element;
pub use query::{collect_clickable, collect_text, find_by_class, find_element};
pub use render::{layout_lines, render_plain, render_styled, Line, Span};
pub use types::*;
