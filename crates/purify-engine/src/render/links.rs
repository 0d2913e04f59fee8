use std::sync::LazyLock;

use regex::Regex;

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("link pattern is valid")
});

/// Prose with its inline links reduced to their labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Linked {
    /// The line with every `[label](target)` replaced by `label`.
    pub text: String,
    /// Link targets in the order they appeared.
    pub targets: Vec<String>,
}

/// Rewrites `[label](target)` occurrences to `label`, collecting targets.
///
/// Anything that does not form a complete link (a lone `[x]`, an unclosed
/// paren) is left as literal text.
pub fn extract_links(line: &str) -> Linked {
    let targets = LINK
        .captures_iter(line)
        .map(|caps| caps[2].to_string())
        .collect();
    let text = LINK.replace_all(line, "$1").into_owned();
    Linked { text, targets }
}
