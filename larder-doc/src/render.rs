use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::layout::{Align, Document, Element, Ink, TextOptions, RIGHT_EDGE};
use crate::style::FontId;

/// The drawing surface the composer's output is replayed onto.
///
/// `set_font` is fail-soft by contract: a surface that cannot honor a font
/// keeps its current one instead of erroring, so a degraded face never
/// aborts a document.
pub trait RenderSurface {
    fn set_font(&mut self, font: &FontId, size: f32, ink: Ink);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, opts: &TextOptions);
    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32));
    fn draw_image(&mut self, path: &Path, x: f32, y: f32, width: f32);
}

/// Replay a composed document onto a surface, in element order.
pub fn emit(document: &Document, surface: &mut dyn RenderSurface) {
    for element in &document.elements {
        match element {
            Element::Font { font, size, ink } => surface.set_font(font, *size, *ink),
            Element::Text { text, x, y, opts } => surface.draw_text(text, *x, *y, opts),
            Element::Line { from, to } => surface.draw_line(*from, *to),
            Element::Image { path, x, y, width } => surface.draw_image(path, *x, *y, *width),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("artifact write failed: {0}")]
    Io(#[from] std::io::Error),
}

// Points-to-character-cell scale for the text grid.
const CELL: f32 = 7.0;
// Vertical gap that maps to one output line: the tightest row pitch the
// composers lay out, so adjacent table rows never gain blank lines.
const LINE_PITCH: f32 = crate::layout::SUMMARY_ROW_PITCH;

/// A deterministic textual rendering backend.
///
/// Positions map onto a character grid (one cell per [`CELL`] points), so
/// all documents share the same column alignment the composer laid out.
#[derive(Debug, Default)]
pub struct PlainTextSurface {
    // y -> fragments (column, text) in draw order
    rows: BTreeMap<i64, Vec<(usize, String)>>,
}

impl PlainTextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn place(&mut self, y: f32, column: usize, text: String) {
        self.rows.entry(y.round() as i64).or_default().push((column, text));
    }

    pub fn into_string(self) -> String {
        let mut out = String::new();
        let mut last_y: Option<i64> = None;
        for (y, mut fragments) in self.rows {
            if let Some(prev) = last_y {
                let gap_lines = ((y - prev) as f32 / LINE_PITCH) as i64;
                for _ in 0..gap_lines.saturating_sub(1) {
                    out.push('\n');
                }
            }
            last_y = Some(y);
            fragments.sort_by_key(|(col, _)| *col);
            let mut line = String::new();
            for (col, text) in fragments {
                while line.chars().count() < col {
                    line.push(' ');
                }
                if line.chars().count() > col && !line.ends_with(' ') {
                    line.push(' ');
                }
                line.push_str(&text);
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.into_string().into_bytes()
    }
}

impl RenderSurface for PlainTextSurface {
    fn set_font(&mut self, _font: &FontId, _size: f32, _ink: Ink) {
        // character cells carry no face or color
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, opts: &TextOptions) {
        let chars = text.chars().count() as f32;
        let column = match opts.align {
            Align::Left => x / CELL,
            Align::Center => {
                let width = opts.width.unwrap_or(0.0);
                (x + width / 2.0) / CELL - chars / 2.0
            }
            Align::Right => {
                let right = x + opts.width.unwrap_or(RIGHT_EDGE - x);
                right / CELL - chars
            }
        };
        self.place(y, column.max(0.0) as usize, text.to_string());
    }

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32)) {
        let (x1, y1) = from;
        let (x2, _) = to;
        let start = (x1 / CELL) as usize;
        let len = ((x2 - x1) / CELL).max(1.0) as usize;
        self.place(y1, start, "-".repeat(len));
    }

    fn draw_image(&mut self, path: &Path, x: f32, y: f32, _width: f32) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.place(y, (x / CELL) as usize, format!("[{name}]"));
    }
}

/// Render a document and write it durably to `path`.
///
/// Resolves only once the bytes are on disk; callers that flip order
/// statuses must await this first, so a failed write never leaves statuses
/// pointing at a note that does not exist.
pub async fn write_artifact(document: &Document, path: &Path) -> Result<PathBuf, RenderError> {
    let mut surface = PlainTextSurface::new();
    emit(document, &mut surface);
    let bytes = surface.into_bytes();

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await?;
    tracing::info!(path = %path.display(), "document artifact written");
    Ok(path.to_path_buf())
}
