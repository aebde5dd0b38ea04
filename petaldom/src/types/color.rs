use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
    /// A theme variable, resolved through a [`ColorContext`](super::ColorContext).
    Var(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color {input:?}: {reason}")]
    InvalidHex { input: String, reason: String },
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Parse a CSS-style hex color (`#96a9bc`, `96a9bc` or `#eee`).
    pub fn hex(input: &str) -> Result<Self, ColorError> {
        let srgb: palette::Srgb<u8> = input.parse().map_err(|e: palette::rgb::FromHexError| {
            ColorError::InvalidHex {
                input: input.to_string(),
                reason: e.to_string(),
            }
        })?;
        let (r, g, b) = srgb.into_components();
        Ok(Self::Rgb { r, g, b })
    }

    /// Concrete RGB value. Variables need a theme and map to `None`.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Rgb { r, g, b } => Some(Rgb::new(*r, *g, *b)),
            Self::Oklch { l, c, h } => Some(oklch_to_rgb(*l, *c, *h)),
            Self::Var(_) => None,
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
