/// A heading line with its challenge annotation already removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of leading `#` characters (always at least 1).
    pub level: usize,
    /// Title text, trimmed.
    pub text: String,
    /// Whether the line carried the challenge marker.
    pub challenge: bool,
}

impl Heading {
    pub const HASH: char = '#';

    /// Parses a line starting with `#`. The challenge marker may appear
    /// anywhere on the line; every occurrence is removed.
    pub fn parse(line: &str, challenge_marker: &str) -> Option<Self> {
        if !line.starts_with(Self::HASH) {
            return None;
        }

        let challenge = !challenge_marker.is_empty() && line.contains(challenge_marker);
        let stripped = if challenge {
            line.replace(challenge_marker, "")
        } else {
            line.to_string()
        };

        let level = stripped.chars().take_while(|&c| c == Self::HASH).count();
        let text = stripped[level..].trim().to_string();

        Some(Self {
            level,
            text,
            challenge,
        })
    }
}
