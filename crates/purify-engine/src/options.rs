/// Wrap width used for prose when nothing else is configured.
pub const DEFAULT_WIDTH: usize = 70;

/// Text of the comment placed at the top of every generated file.
pub const DEFAULT_HEADER: &str = "This file is generated from the corresponding .Rmd file";

/// The source-syntax tokens the classifier looks for.
///
/// Every marker is matched literally; none of them are patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Line that opens and closes a leading metadata block.
    pub front_matter: String,
    /// Annotation on a heading line that starts a challenge region.
    pub challenge: String,
    /// Standalone line that starts an omitted region.
    pub omit_start: String,
    /// Standalone line that ends an omitted region.
    pub omit_end: String,
    /// Sequence stripped from code lines; used to protect fences inside quoted code.
    pub escape: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            front_matter: "---".to_string(),
            challenge: "{.challenge}".to_string(),
            omit_start: "<!-- omit -->".to_string(),
            omit_end: "<!-- /omit -->".to_string(),
            escape: "`r ''`".to_string(),
        }
    }
}

/// Everything that shapes a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurifyOptions {
    /// Maximum column width for wrapped prose (excluding the `# ` prefix).
    pub width: usize,
    /// Comment written at the top of the output, if any.
    pub header: Option<String>,
    pub markers: Markers,
}

impl PurifyOptions {
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    #[must_use]
    pub fn without_header(mut self) -> Self {
        self.header = None;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }
}

impl Default for PurifyOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            header: Some(DEFAULT_HEADER.to_string()),
            markers: Markers::default(),
        }
    }
}
