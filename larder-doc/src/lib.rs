pub mod compose;
pub mod layout;
pub mod render;
pub mod style;

pub use compose::{compose_delivery_note, compose_order_list, compose_product_summary, DocAssets};
pub use layout::{Align, Document, Element, Ink, TextOptions};
pub use render::{emit, write_artifact, PlainTextSurface, RenderError, RenderSurface};
pub use style::{FontAssets, FontId, StyleResolver, TextStyle};
