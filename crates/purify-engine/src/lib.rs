pub mod error;
pub mod options;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use error::PurifyError;
pub use options::{DEFAULT_HEADER, DEFAULT_WIDTH, Markers, PurifyOptions};
pub use parsing::{Purified, Purifier, Stats, purify, purify_document};
