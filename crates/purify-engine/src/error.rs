use thiserror::Error;

/// Structural violations of the line grammar.
///
/// Everything else in a document is handled permissively, so these are the
/// only ways a run can fail. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurifyError {
    #[error("line {line}: code fence of {marker_len} backticks is never closed")]
    UnterminatedFence { line: usize, marker_len: usize },

    #[error("line {line}: closing fence `{found}` does not match the opening fence of {expected} backticks")]
    MismatchedFence {
        line: usize,
        expected: usize,
        found: String,
    },
}

impl PurifyError {
    /// The input line the violation points at.
    pub fn line(&self) -> usize {
        match self {
            PurifyError::UnterminatedFence { line, .. } => *line,
            PurifyError::MismatchedFence { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unterminated_message_names_opening_line() {
        let err = PurifyError::UnterminatedFence {
            line: 7,
            marker_len: 3,
        };
        assert_eq!(
            err.to_string(),
            "line 7: code fence of 3 backticks is never closed"
        );
        assert_eq!(err.line(), 7);
    }

    #[test]
    fn mismatched_message_shows_offending_text() {
        let err = PurifyError::MismatchedFence {
            line: 12,
            expected: 4,
            found: "```".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 12: closing fence ````` does not match the opening fence of 4 backticks"
        );
    }
}
