/// A single input line with its position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 1-based line number in the original input.
    pub number: usize,
    /// The line text with the line ending and trailing whitespace removed.
    pub text: &'a str,
}

const BOM: char = '\u{FEFF}';

/// Returns an iterator over input lines, numbered from 1.
///
/// Accepts LF and CRLF endings. A byte order mark at the very start of the
/// input is dropped so it cannot hide a front-matter delimiter.
pub fn numbered_lines(input: &str) -> impl Iterator<Item = LineRef<'_>> {
    let input = input.strip_prefix(BOM).unwrap_or(input);
    input.lines().enumerate().map(|(idx, line)| LineRef {
        number: idx + 1,
        text: line.trim_end(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(input: &str) -> Vec<&str> {
        numbered_lines(input).map(|l| l.text).collect()
    }

    #[test]
    fn numbers_start_at_one() {
        let numbers: Vec<usize> = numbered_lines("a\nb\nc").map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn trailing_whitespace_is_stripped() {
        assert_eq!(texts("keep  \t\n  indent  \n"), vec!["keep", "  indent"]);
    }

    #[test]
    fn crlf_endings_are_accepted() {
        assert_eq!(texts("one\r\ntwo\r\n"), vec!["one", "two"]);
    }

    #[test]
    fn bom_is_dropped() {
        assert_eq!(texts("\u{FEFF}---\nx"), vec!["---", "x"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(texts("").is_empty());
    }
}
