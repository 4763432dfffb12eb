use std::path::{Path, PathBuf};

use serde::Serialize;

/// Font files smaller than this are treated as corrupt placeholders.
pub const MIN_FONT_BYTES: u64 = 1000;

pub const BUILTIN_REGULAR: &str = "Helvetica";
pub const BUILTIN_BOLD: &str = "Helvetica-Bold";

/// Identifies a font for the renderer: either one of its built-in faces or
/// a font file to register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FontId {
    Builtin(&'static str),
    File { name: String, path: PathBuf },
}

/// The preferred font files for documents. Either may be absent.
#[derive(Debug, Clone, Default)]
pub struct FontAssets {
    pub regular: Option<PathBuf>,
    pub bold: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Body,
    Bold,
}

/// Per-document font resolution.
///
/// Probes the configured font files once when the document is composed and
/// caches the verdict; composers then consult it at every font-switch point
/// (title, body, bold body) so a partial resource failure degrades just
/// that face instead of aborting composition. An unusable file resolves to
/// the renderer's built-in face.
#[derive(Debug, Clone)]
pub struct StyleResolver {
    regular: FontId,
    bold: FontId,
}

impl StyleResolver {
    pub fn probe(assets: &FontAssets) -> Self {
        Self {
            regular: resolve_face(assets.regular.as_deref(), "Body", BUILTIN_REGULAR),
            bold: resolve_face(assets.bold.as_deref(), "Body-Bold", BUILTIN_BOLD),
        }
    }

    /// Always available fallback faces; used when no assets are configured.
    pub fn builtin() -> Self {
        Self::probe(&FontAssets::default())
    }

    pub fn resolve(&self, style: TextStyle) -> FontId {
        match style {
            TextStyle::Body => self.regular.clone(),
            TextStyle::Bold => self.bold.clone(),
        }
    }
}

fn resolve_face(path: Option<&Path>, name: &str, builtin: &'static str) -> FontId {
    match path {
        Some(p) if usable(p) => FontId::File {
            name: name.to_string(),
            path: p.to_path_buf(),
        },
        Some(p) => {
            tracing::warn!(path = %p.display(), "font file missing or corrupt, using {builtin}");
            FontId::Builtin(builtin)
        }
        None => FontId::Builtin(builtin),
    }
}

fn usable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.len() >= MIN_FONT_BYTES)
        .unwrap_or(false)
}
