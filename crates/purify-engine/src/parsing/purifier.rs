use crate::{
    error::PurifyError,
    options::PurifyOptions,
    render::{Banner, COMMENT, Output, extract_links, wrap_comment},
};

use super::{
    classify::LineClassifier,
    kinds::Heading,
    lines::LineRef,
    state::{Action, DocState},
};

/// Counters gathered during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub front_matter_lines: usize,
    pub headings: usize,
    pub challenges: usize,
    pub code_blocks: usize,
    pub paragraphs: usize,
    pub links: usize,
    pub omitted_lines: usize,
}

/// The finished output of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purified {
    pub lines: Vec<String>,
    pub stats: Stats,
}

impl Purified {
    /// Joins the lines into newline-terminated text.
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        if !self.lines.is_empty() {
            text.push('\n');
        }
        text
    }
}

/// Phase 2: drives [`DocState`] one classified line at a time and renders
/// each resulting [`Action`].
pub struct Purifier<'o> {
    options: &'o PurifyOptions,
    classifier: LineClassifier<'o>,
    state: DocState,
    out: Output,
    stats: Stats,
}

impl<'o> Purifier<'o> {
    pub fn new(options: &'o PurifyOptions) -> Self {
        Self {
            options,
            classifier: LineClassifier::new(&options.markers),
            state: DocState::default(),
            out: Output::new(),
            stats: Stats::default(),
        }
    }

    pub fn state(&self) -> DocState {
        self.state
    }

    /// Emits the generated-file comment followed by two blank lines.
    pub fn write_header(&mut self) {
        if let Some(header) = &self.options.header {
            self.out.comment(header);
            self.out.blank();
            self.out.blank();
        }
    }

    pub fn push(&mut self, lr: LineRef<'_>) -> Result<(), PurifyError> {
        let class = self.classifier.classify(&lr);
        log::trace!("line {}: {:?}", lr.number, class);

        let (next, action) = self.state.step(class, &lr)?;
        if next != self.state {
            log::debug!("line {}: {:?} -> {:?}", lr.number, self.state, next);
        }
        self.state = next;
        self.apply(action);
        Ok(())
    }

    /// Ends the run. An open code block is fatal; an open omit region is not.
    pub fn finish(self) -> Result<Purified, PurifyError> {
        match self.state {
            DocState::Code {
                fence, opened_at, ..
            } => {
                return Err(PurifyError::UnterminatedFence {
                    line: opened_at,
                    marker_len: fence.len,
                });
            }
            DocState::Omit { opened_at, .. } => {
                log::warn!("omit region opened on line {opened_at} runs to end of input");
            }
            DocState::Prose { .. } => {}
        }

        Ok(Purified {
            lines: self.out.into_lines(),
            stats: self.stats,
        })
    }

    fn apply(&mut self, action: Action<'_>) {
        match action {
            Action::Fence => {
                if self.state.in_code() {
                    self.stats.code_blocks += 1;
                }
                self.out.blank();
            }
            Action::Verbatim(text) => self.verbatim(text),
            Action::Heading {
                heading,
                leaving_challenge,
            } => self.heading(&heading, leaving_challenge),
            Action::Paragraph { text, challenge } => self.paragraph(text, challenge),
            Action::Omitted => self.stats.omitted_lines += 1,
            Action::Skip => {}
        }
    }

    fn verbatim(&mut self, text: &str) {
        let escape = &self.options.markers.escape;
        if escape.is_empty() {
            self.out.raw(text);
        } else {
            self.out.raw(text.replace(escape.as_str(), ""));
        }
    }

    fn heading(&mut self, heading: &Heading, leaving_challenge: bool) {
        if leaving_challenge {
            self.out.raw(COMMENT);
        }
        self.out.blank();
        self.out.extend(Banner::new(heading.level, &heading.text).lines());

        self.stats.headings += 1;
        if heading.challenge {
            self.stats.challenges += 1;
        }
    }

    fn paragraph(&mut self, text: &str, challenge: bool) {
        let linked = extract_links(text);
        if !challenge {
            self.out.blank();
        }
        self.out.extend(wrap_comment(&linked.text, self.options.width));
        for target in &linked.targets {
            self.out.comment(target);
        }

        self.stats.paragraphs += 1;
        self.stats.links += linked.targets.len();
    }
}
