use super::{Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Layer `self` over an inherited parent style.
    ///
    /// Colors set on `self` win; text attributes accumulate.
    pub fn inherit(&self, parent: &Style) -> Style {
        Style {
            background: self.background.clone().or_else(|| parent.background.clone()),
            foreground: self.foreground.clone().or_else(|| parent.foreground.clone()),
            text_style: self.text_style.union(parent.text_style),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.background.is_none() && self.foreground.is_none() && self.text_style.is_plain()
    }
}
