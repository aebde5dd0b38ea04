mod color;
mod edges;
mod enums;
mod style;
mod theme;

pub use color::{Color, ColorError, Rgb};
pub use edges::Edges;
pub use enums::{Direction, TextStyle};
pub use style::Style;
pub use theme::{ColorContext, EmptyTheme, Theme, WidgetTheme};
