/// Structural checks that hold for every successful run.
pub fn check(lines: &[String]) {
    for (idx, line) in lines.iter().enumerate() {
        assert_eq!(
            line.trim_end(),
            line,
            "trailing whitespace on output line {}: {:?}",
            idx + 1,
            line
        );
    }

    // Every banner underline is followed by a title of the same width.
    for pair in lines.windows(2) {
        let (underline, title) = (&pair[0], &pair[1]);
        if is_underline(underline) {
            assert_eq!(
                underline.chars().count(),
                title.chars().count(),
                "banner width mismatch: {underline:?} / {title:?}"
            );
        }
    }
}

fn is_underline(line: &str) -> bool {
    let rest = line.trim_start_matches('#');
    rest.len() < line.len()
        && rest
            .strip_prefix(' ')
            .is_some_and(|fill| !fill.is_empty() && fill.chars().all(|c| c == '_'))
}
