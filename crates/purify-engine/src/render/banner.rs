/// The two-line rendering of a heading: a filler underline framing a
/// bracketed title.
///
/// ```text
/// ## ________________
/// ## ----> Title ----
/// ```
///
/// Level 1 uses `====` brackets, deeper levels `----` plus one `>` per extra
/// level. Both lines are always the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner<'a> {
    level: usize,
    text: &'a str,
}

impl<'a> Banner<'a> {
    pub const FILLER: &'static str = "_";
    pub const DEPTH: &'static str = ">";

    pub fn new(level: usize, text: &'a str) -> Self {
        Self {
            level: level.max(1),
            text,
        }
    }

    pub fn bracket(&self) -> &'static str {
        if self.level > 1 { "----" } else { "====" }
    }

    /// Length of the filler run, not counting the left margin.
    pub fn underline_len(&self) -> usize {
        self.level - 1 + self.text.chars().count() + 2 * self.bracket().len() + 2
    }

    fn margin(&self) -> String {
        format!("{} ", "#".repeat(self.level))
    }

    pub fn underline(&self) -> String {
        format!("{}{}", self.margin(), Self::FILLER.repeat(self.underline_len()))
    }

    pub fn title(&self) -> String {
        let bracket = self.bracket();
        let depth = Self::DEPTH.repeat(self.level - 1);
        format!("{}{bracket}{depth} {} {bracket}", self.margin(), self.text)
    }

    pub fn lines(&self) -> [String; 2] {
        [self.underline(), self.title()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn level_one_banner() {
        let banner = Banner::new(1, "Title");
        assert_eq!(
            banner.lines(),
            [
                "# _______________".to_string(),
                "# ==== Title ====".to_string(),
            ]
        );
    }

    #[test]
    fn level_three_banner() {
        let banner = Banner::new(3, "Loops");
        assert_eq!(
            banner.lines(),
            [
                "### _________________".to_string(),
                "### ---->> Loops ----".to_string(),
            ]
        );
    }

    #[rstest]
    #[case(1, "Title")]
    #[case(2, "A longer section title")]
    #[case(4, "x")]
    #[case(6, "")]
    #[case(2, "Données")]
    fn underline_matches_formula(#[case] level: usize, #[case] text: &str) {
        let banner = Banner::new(level, text);
        let expected = level - 1 + text.chars().count() + 2 * 4 + 2;
        assert_eq!(banner.underline_len(), expected);

        let margin = level + 1;
        assert_eq!(banner.underline().chars().count(), margin + expected);
        assert_eq!(
            banner.underline().chars().count(),
            banner.title().chars().count()
        );
    }

    #[test]
    fn bracket_depends_on_level() {
        assert_eq!(Banner::new(1, "t").bracket(), "====");
        assert_eq!(Banner::new(2, "t").bracket(), "----");
        assert_eq!(Banner::new(5, "t").bracket(), "----");
    }
}
