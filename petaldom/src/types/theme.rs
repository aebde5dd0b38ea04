use std::collections::HashMap;

use super::{Color, ColorError, Rgb};

/// Guards against themes whose variables point at each other.
const MAX_VAR_DEPTH: usize = 8;

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Theme that resolves nothing. Variables render uncolored.
pub struct EmptyTheme;

impl Theme for EmptyTheme {
    fn resolve(&self, _name: &str) -> Option<&Color> {
        None
    }
}

/// Color variables used by the form widgets.
///
/// | variable | used for |
/// |---|---|
/// | `label` | field labels |
/// | `muted` | placeholders, decorative glyphs |
/// | `selected` | background of selected dropdown rows |
/// | `arrow` | dropdown indicator glyph |
/// | `primary` | primary buttons, slider thumb |
/// | `error` | validation messages |
#[derive(Debug, Clone)]
pub struct WidgetTheme {
    colors: HashMap<String, Color>,
}

impl WidgetTheme {
    pub fn new() -> Self {
        let colors = [
            ("label", Color::rgb(0x33, 0x33, 0x33)),
            ("muted", Color::rgb(0x96, 0xa9, 0xbc)),
            ("selected", Color::rgb(0xee, 0xee, 0xee)),
            ("arrow", Color::rgb(0x96, 0xa9, 0xbc)),
            ("primary", Color::oklch(0.62, 0.19, 260.0)),
            ("error", Color::rgb(0xd9, 0x30, 0x25)),
        ]
        .into_iter()
        .map(|(name, color)| (name.to_string(), color))
        .collect();
        Self { colors }
    }

    /// Override or add variables from `(name, "#rrggbb")` pairs.
    pub fn with_hex<'a>(
        mut self,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ColorError> {
        for (name, hex) in pairs {
            self.colors.insert(name.to_string(), Color::hex(hex)?);
        }
        Ok(self)
    }

    pub fn set(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }
}

impl Default for WidgetTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for WidgetTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        self.colors.get(name)
    }
}

/// Context for resolving color variables.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve a color to RGB, following variables through the theme.
    /// Unknown variables resolve to `None`.
    pub fn resolve(&self, color: &Color) -> Option<Rgb> {
        let mut current = color;
        for _ in 0..MAX_VAR_DEPTH {
            match current {
                Color::Var(name) => current = self.theme.resolve(name)?,
                concrete => return concrete.to_rgb(),
            }
        }
        log::warn!("color variable chain too deep, starting at {:?}", color);
        None
    }
}
