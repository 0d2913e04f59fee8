use crate::options::Markers;

use super::{
    kinds::{CodeFence, FenceSig, Heading, OmitMarker, OmitSig},
    lines::LineRef,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1: each line is classified without reference to the
/// surrounding document. The [`Purifier`](super::Purifier) decides what a
/// class means given the current state (inside code, every non-fence line is
/// verbatim regardless of its class).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Opens or closes a fenced code block.
    Fence(FenceSig),
    Heading(Heading),
    OmitStart,
    OmitEnd,
    /// Empty after trailing whitespace removal.
    Blank,
    /// Anything else: prose outside code, verbatim inside code.
    Text(&'a str),
}

/// Classifies individual lines against the configured markers.
pub struct LineClassifier<'m> {
    challenge: &'m str,
    omit: OmitMarker<'m>,
}

impl<'m> LineClassifier<'m> {
    pub fn new(markers: &'m Markers) -> Self {
        Self {
            challenge: &markers.challenge,
            omit: OmitMarker::new(&markers.omit_start, &markers.omit_end),
        }
    }

    /// Classifies a line in priority order: fence, heading, omit markers,
    /// blank, text.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let text = lr.text;

        if let Some(sig) = CodeFence::sig(text) {
            return LineClass::Fence(sig);
        }
        if let Some(heading) = Heading::parse(text, self.challenge) {
            return LineClass::Heading(heading);
        }
        match self.omit.sig(text) {
            Some(OmitSig::Start) => return LineClass::OmitStart,
            Some(OmitSig::End) => return LineClass::OmitEnd,
            None => {}
        }
        if text.trim().is_empty() {
            LineClass::Blank
        } else {
            LineClass::Text(text)
        }
    }
}
