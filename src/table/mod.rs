//! Flat-text input and output around the clustering engine.
//!
//! - [`read`] / [`open`] — header-terminated, whitespace-separated points
//! - [`write`] — points with their cluster ids, then centroids
mod reader;
mod writer;

pub use reader::*;
pub use writer::*;
