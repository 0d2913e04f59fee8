use super::reflow::comment_line;

/// Accumulates emitted lines for a single run.
///
/// Nothing reaches the caller until the run finishes, so a structural error
/// part-way through never leaves partial output behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    lines: Vec<String>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Emits `# text`, or a bare `#` for empty text.
    pub fn comment(&mut self, text: &str) {
        self.lines.push(comment_line(text));
    }

    pub fn raw(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, lines: I) {
        self.lines.extend(lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collects_lines_in_order() {
        let mut out = Output::new();
        out.comment("title");
        out.blank();
        out.raw("x <- 1");
        out.comment("");
        out.extend(["a".to_string(), "b".to_string()]);

        assert_eq!(out.len(), 6);
        assert_eq!(out.into_lines(), vec!["# title", "", "x <- 1", "#", "a", "b"]);
    }
}
