//! # Rendering
//!
//! Everything that turns classified lines into output text.
//!
//! - **`banner`**: two-line heading banners
//! - **`links`**: `[label](target)` extraction from prose
//! - **`reflow`**: comment-prefixed wrapping of prose
//! - **`output`**: the line sink shared by all of the above

pub mod banner;
pub mod links;
pub mod output;
pub mod reflow;

pub use banner::Banner;
pub use links::{Linked, extract_links};
pub use output::Output;
pub use reflow::{COMMENT, wrap_comment};
