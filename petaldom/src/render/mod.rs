//! Line renderer for element trees.
//!
//! Elements are flattened into lines of styled spans: columns stack their
//! children vertically, rows place them side by side padded to each child's
//! widest line. There is no constraint solving; the output is as wide as the
//! content.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{ColorContext, Direction, Edges, Style, Theme};

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

/// One rendered output line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    fn from_span(text: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Span {
                text: text.into(),
                style,
            }],
        }
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| display_width(&s.text)).sum()
    }

    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    fn push_blank(&mut self, columns: usize) {
        if columns > 0 {
            self.spans.push(Span {
                text: " ".repeat(columns),
                style: Style::default(),
            });
        }
    }

    fn extend_padded(&mut self, other: &Line, width: usize) {
        self.spans.extend(other.spans.iter().cloned());
        self.push_blank(width.saturating_sub(other.width()));
    }
}

/// Flatten an element tree into styled lines.
pub fn layout_lines(root: &Element) -> Vec<Line> {
    layout_with(root, &Style::default())
}

fn layout_with(element: &Element, inherited: &Style) -> Vec<Line> {
    let mut style = element.style.inherit(inherited);
    if element.disabled {
        style.text_style.dim = true;
    }

    let inner = match &element.content {
        Content::None => Vec::new(),
        Content::Text(text) => text
            .split('\n')
            .map(|line| Line::from_span(line, style.clone()))
            .collect(),
        Content::Children(children) => {
            let blocks: Vec<Vec<Line>> = children
                .iter()
                .map(|child| layout_with(child, &style))
                .filter(|lines| !lines.is_empty())
                .collect();
            match element.direction {
                Direction::Column => stack_vertical(blocks, element.gap),
                Direction::Row => stack_horizontal(blocks, element.gap),
            }
        }
    };

    apply_padding(inner, element)
}

fn stack_vertical(blocks: Vec<Vec<Line>>, gap: u16) -> Vec<Line> {
    let mut lines = Vec::new();
    for (i, block) in blocks.into_iter().enumerate() {
        if i > 0 {
            lines.extend((0..gap).map(|_| Line::default()));
        }
        lines.extend(block);
    }
    lines
}

fn stack_horizontal(blocks: Vec<Vec<Line>>, gap: u16) -> Vec<Line> {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = blocks
        .iter()
        .map(|block| block.iter().map(Line::width).max().unwrap_or(0))
        .collect();

    let empty = Line::default();
    (0..height)
        .map(|row| {
            let mut line = Line::default();
            for (i, block) in blocks.iter().enumerate() {
                if i > 0 {
                    line.push_blank(gap as usize);
                }
                line.extend_padded(block.get(row).unwrap_or(&empty), widths[i]);
            }
            line
        })
        .collect()
}

fn apply_padding(lines: Vec<Line>, element: &Element) -> Vec<Line> {
    let pad = element.padding;
    if pad == Edges::default() || lines.is_empty() {
        return lines;
    }

    let width = lines.iter().map(Line::width).max().unwrap_or(0);
    let mut out = Vec::with_capacity(lines.len() + (pad.top + pad.bottom) as usize);
    out.extend((0..pad.top).map(|_| Line::default()));
    for line in lines {
        let mut padded = Line::default();
        padded.push_blank(pad.left as usize);
        padded.extend_padded(&line, width);
        padded.push_blank(pad.right as usize);
        out.push(padded);
    }
    out.extend((0..pad.bottom).map(|_| Line::default()));
    out
}

/// Render the tree as plain text, one line per row, trailing spaces removed.
pub fn render_plain(root: &Element) -> String {
    layout_lines(root)
        .iter()
        .map(|line| line.plain().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the tree with terminal colors and attributes resolved through `theme`.
pub fn render_styled<W: Write>(root: &Element, theme: &dyn Theme, out: &mut W) -> io::Result<()> {
    let colors = ColorContext::new(theme);

    for line in layout_lines(root) {
        for span in &line.spans {
            if span.style.is_plain() {
                queue!(out, Print(&span.text))?;
                continue;
            }

            if let Some(rgb) = span.style.foreground.as_ref().and_then(|c| colors.resolve(c)) {
                queue!(out, SetForegroundColor(CtColor::Rgb { r: rgb.r, g: rgb.g, b: rgb.b }))?;
            }
            if let Some(rgb) = span.style.background.as_ref().and_then(|c| colors.resolve(c)) {
                queue!(out, SetBackgroundColor(CtColor::Rgb { r: rgb.r, g: rgb.g, b: rgb.b }))?;
            }
            let text_style = span.style.text_style;
            if text_style.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if text_style.italic {
                queue!(out, SetAttribute(Attribute::Italic))?;
            }
            if text_style.underline {
                queue!(out, SetAttribute(Attribute::Underlined))?;
            }
            if text_style.dim {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }

            queue!(out, Print(&span.text), SetAttribute(Attribute::Reset), ResetColor)?;
        }
        queue!(out, Print("\n"))?;
    }

    out.flush()
}
