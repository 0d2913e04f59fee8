use crate::error::PurifyError;

use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceSig, Heading},
    lines::LineRef,
};

/// Where the single pass currently is.
///
/// Code and Omit are exclusive containers; the challenge overlay is carried
/// through them so it is restored when the container closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocState {
    Prose {
        challenge: bool,
    },
    Code {
        fence: FenceSig,
        /// Line number of the opening fence.
        opened_at: usize,
        challenge: bool,
    },
    Omit {
        /// Line number of the start marker.
        opened_at: usize,
        challenge: bool,
    },
}

/// What the current line should produce, decided by [`DocState::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<'a> {
    /// A fence opened or closed.
    Fence,
    /// A line inside a code block, before escape removal.
    Verbatim(&'a str),
    Heading {
        heading: Heading,
        /// The previous heading opened a challenge region that ends here.
        leaving_challenge: bool,
    },
    Paragraph {
        text: &'a str,
        challenge: bool,
    },
    /// A line swallowed by an omit region.
    Omitted,
    /// Produces nothing (blank prose lines, omit markers).
    Skip,
}

impl DocState {
    pub fn challenge(self) -> bool {
        match self {
            DocState::Prose { challenge }
            | DocState::Code { challenge, .. }
            | DocState::Omit { challenge, .. } => challenge,
        }
    }

    pub fn in_code(self) -> bool {
        matches!(self, DocState::Code { .. })
    }

    pub fn in_omit(self) -> bool {
        matches!(self, DocState::Omit { .. })
    }

    /// The transition table: given a classified line, returns the next state
    /// and the action to perform.
    pub fn step<'a>(
        self,
        class: LineClass<'a>,
        line: &LineRef<'a>,
    ) -> Result<(DocState, Action<'a>), PurifyError> {
        let next = match (self, class) {
            (
                DocState::Code {
                    fence, challenge, ..
                },
                LineClass::Fence(_),
            ) => {
                if !CodeFence::closes(fence, line.text) {
                    return Err(PurifyError::MismatchedFence {
                        line: line.number,
                        expected: fence.len,
                        found: line.text.to_string(),
                    });
                }
                (DocState::Prose { challenge }, Action::Fence)
            }
            (DocState::Code { .. }, _) => (self, Action::Verbatim(line.text)),

            (DocState::Omit { challenge, .. }, LineClass::OmitEnd) => {
                (DocState::Prose { challenge }, Action::Skip)
            }
            (DocState::Omit { .. }, _) => (self, Action::Omitted),

            (DocState::Prose { challenge }, LineClass::Fence(fence)) => (
                DocState::Code {
                    fence,
                    opened_at: line.number,
                    challenge,
                },
                Action::Fence,
            ),
            (DocState::Prose { challenge }, LineClass::Heading(heading)) => (
                DocState::Prose {
                    challenge: heading.challenge,
                },
                Action::Heading {
                    heading,
                    leaving_challenge: challenge,
                },
            ),
            (DocState::Prose { challenge }, LineClass::OmitStart) => (
                DocState::Omit {
                    opened_at: line.number,
                    challenge,
                },
                Action::Skip,
            ),
            (DocState::Prose { .. }, LineClass::OmitEnd) => {
                log::debug!("line {}: omit end without a start, ignored", line.number);
                (self, Action::Skip)
            }
            (DocState::Prose { .. }, LineClass::Blank) => (self, Action::Skip),
            (DocState::Prose { challenge }, LineClass::Text(text)) => {
                (self, Action::Paragraph { text, challenge })
            }
        };
        Ok(next)
    }
}

impl Default for DocState {
    fn default() -> Self {
        DocState::Prose { challenge: false }
    }
}
