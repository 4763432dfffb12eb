use std::path::PathBuf;

use serde::Serialize;

use crate::style::FontId;

// US Letter, points. One page; overflow is accepted, there is no pagination.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

// Shared geometry so every document kind lines up the same way.
pub const LEFT_MARGIN: f32 = 50.0;
pub const RIGHT_EDGE: f32 = 550.0;
pub const TABLE_RIGHT_EDGE: f32 = 500.0;
pub const NOTE_COLUMNS: [f32; 4] = [200.0, 270.0, 340.0, 410.0];
pub const NOTE_COLUMN_WIDTH: f32 = 60.0;
pub const NOTE_ROW_PITCH: f32 = 25.0;
pub const SUMMARY_ROW_PITCH: f32 = 20.0;
pub const FOOTER_RISE: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TextOptions {
    pub width: Option<f32>,
    pub align: Align,
    pub continued: bool,
}

impl TextOptions {
    pub fn centered(width: f32) -> Self {
        Self {
            width: Some(width),
            align: Align::Center,
            continued: false,
        }
    }

    pub fn right(width: f32) -> Self {
        Self {
            width: Some(width),
            align: Align::Right,
            continued: false,
        }
    }
}

/// Text color. The order list paints customer headings in the accent ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Ink {
    #[default]
    Black,
    Accent,
}

/// One drawing instruction for the external renderer, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Element {
    Font { font: FontId, size: f32, ink: Ink },
    Text { text: String, x: f32, y: f32, opts: TextOptions },
    Line { from: (f32, f32), to: (f32, f32) },
    Image { path: PathBuf, x: f32, y: f32, width: f32 },
}

/// An abstract single-page document: an ordered list of renderer
/// instructions with all geometry already decided by the composer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(&mut self, font: FontId, size: f32, ink: Ink) {
        self.elements.push(Element::Font { font, size, ink });
    }

    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32, opts: TextOptions) {
        self.elements.push(Element::Text {
            text: text.into(),
            x,
            y,
            opts,
        });
    }

    pub fn rule(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.elements.push(Element::Line { from, to });
    }

    pub fn image(&mut self, path: PathBuf, x: f32, y: f32, width: f32) {
        self.elements.push(Element::Image { path, x, y, width });
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
