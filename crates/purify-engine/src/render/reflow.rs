use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Prefix for a bare comment line.
pub const COMMENT: &str = "#";

/// Wraps prose to `width` columns and prefixes every line with `# `.
///
/// Words are split on ASCII spaces only and are never broken, so long
/// identifiers and URLs overflow rather than split. Lines are filled greedily.
/// Content that wraps to nothing still yields a single bare `#` line.
pub fn wrap_comment(text: &str, width: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![COMMENT.to_string()];
    }

    let options = Options::new(width)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    textwrap::wrap(text, &options)
        .into_iter()
        .map(|line| comment_line(&line))
        .collect()
}

/// Formats a single comment line, avoiding trailing whitespace on empty text.
pub fn comment_line(text: &str) -> String {
    if text.is_empty() {
        COMMENT.to_string()
    } else {
        format!("{COMMENT} {text}")
    }
}
