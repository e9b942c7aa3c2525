//! Preview cut engine: decides where a rendered entry body splits into a
//! listing preview and the full text, marking the spot with an inert HTML
//! comment.
mod blocks;
mod cut;
mod measure;
mod split;
mod types;

pub use cut::{create_preview, create_preview_with};
pub use split::{split_at_cut, CUT_MARKER};
pub use types::{Preview, PreviewOptions};
