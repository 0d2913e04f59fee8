//! # Document Purification
//!
//! Single forward pass over a literate document, one line at a time.
//!
//! ## Phases
//!
//! 1. **Front matter** (`front_matter`): a leading `---` block is skipped
//!    before anything is classified
//!
//! 2. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (fence, heading, omit marker, blank, text)
//!
//! 3. **State Machine** (`state`, `purifier`): `DocState::step` decides what a
//!    class means in context; the `Purifier` renders the resulting `Action`
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: every line inside is emitted verbatim
//! - A fence only closes on the exact opening backtick run
//! - Omit regions emit nothing, whatever they contain
//! - Output is produced all-or-nothing: a structural error returns no lines

pub mod classify;
pub mod front_matter;
pub mod kinds;
pub mod lines;
pub mod purifier;
pub mod state;

#[cfg(test)]
mod tests;

pub use classify::{LineClass, LineClassifier};
pub use front_matter::skip_front_matter;
pub use lines::{LineRef, numbered_lines};
pub use purifier::{Purified, Purifier, Stats};
pub use state::{Action, DocState};

use crate::{error::PurifyError, options::PurifyOptions};

/// Runs the full pipeline and returns the output lines with run statistics.
pub fn purify_document(input: &str, options: &PurifyOptions) -> Result<Purified, PurifyError> {
    let mut lines = numbered_lines(input).peekable();
    let mut purifier = Purifier::new(options);
    purifier.write_header();

    let front_matter_lines = skip_front_matter(&mut lines, &options.markers.front_matter);
    if front_matter_lines > 0 {
        log::debug!("skipped {front_matter_lines} lines of front matter");
    }

    for lr in lines {
        purifier.push(lr)?;
    }

    let mut purified = purifier.finish()?;
    purified.stats.front_matter_lines = front_matter_lines;
    Ok(purified)
}

/// Runs the full pipeline and returns newline-terminated output text.
pub fn purify(input: &str, options: &PurifyOptions) -> Result<String, PurifyError> {
    purify_document(input, options).map(|p| p.to_text())
}
