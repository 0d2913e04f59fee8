#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OmitSig {
    Start,
    End,
}

/// Standalone lines that open and close an omitted region.
pub struct OmitMarker<'m> {
    pub start: &'m str,
    pub end: &'m str,
}

impl<'m> OmitMarker<'m> {
    pub fn new(start: &'m str, end: &'m str) -> Self {
        Self { start, end }
    }

    /// Surrounding whitespace is ignored; anything else on the line disqualifies it.
    pub fn sig(&self, line: &str) -> Option<OmitSig> {
        let t = line.trim();
        if t.is_empty() {
            None
        } else if t == self.start {
            Some(OmitSig::Start)
        } else if t == self.end {
            Some(OmitSig::End)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker() -> OmitMarker<'static> {
        OmitMarker::new("<!-- omit -->", "<!-- /omit -->")
    }

    #[test]
    fn detects_start_and_end() {
        assert_eq!(marker().sig("<!-- omit -->"), Some(OmitSig::Start));
        assert_eq!(marker().sig("  <!-- /omit -->"), Some(OmitSig::End));
    }

    #[test]
    fn marker_must_stand_alone() {
        assert_eq!(marker().sig("text <!-- omit -->"), None);
        assert_eq!(marker().sig(""), None);
    }
}
