use std::iter::Peekable;

use super::lines::LineRef;

/// Consumes a leading metadata block delimited by `delimiter` lines.
///
/// Only acts when the very first line is exactly the delimiter; the closing
/// delimiter is consumed as well. Without a closing delimiter the rest of the
/// input is swallowed. Returns the number of lines consumed.
pub fn skip_front_matter<'a, I>(lines: &mut Peekable<I>, delimiter: &str) -> usize
where
    I: Iterator<Item = LineRef<'a>>,
{
    match lines.peek() {
        Some(first) if first.number == 1 && first.text == delimiter => {}
        _ => return 0,
    }

    let mut consumed = 0;
    let mut opened = false;
    for line in lines.by_ref() {
        consumed += 1;
        if line.text == delimiter {
            if opened {
                return consumed;
            }
            opened = true;
        }
    }

    log::warn!("front matter opened on line 1 is never closed; skipped {consumed} lines");
    consumed
}
