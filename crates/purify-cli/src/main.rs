//! Command-line filter for purify.
//!
//! Reads a literate document on stdin and writes the commented source file on
//! stdout. Nothing is written if the document is structurally broken.
//!
//! Usage:
//!   purify < lesson.Rmd > lesson.R
//!   purify --width 60 --no-header < lesson.Rmd

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use purify_config::Config;
use purify_engine::{PurifyOptions, purify_document};
use std::{
    io::{self, BufWriter, Read, Write},
    path::PathBuf,
};

#[derive(Debug, Parser)]
#[command(name = "purify")]
#[command(version, about = "Turn a literate document on stdin into a commented source file on stdout")]
struct Cli {
    /// Wrap prose at this many columns
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    width: Option<u16>,

    /// Do not write the generated-file comment at the top
    #[arg(long)]
    no_header: bool,

    /// Heading annotation that starts a challenge region
    #[arg(long, value_name = "MARKER")]
    challenge_marker: Option<String>,

    /// Config file to use instead of ~/.config/purify/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    fn load_config(&self) -> Result<Option<Config>> {
        match &self.config {
            Some(path) => {
                let path = Config::expand_path(path).unwrap_or_else(|| path.clone());
                let config = Config::load_from_path(&path)?
                    .with_context(|| format!("Config file '{}' does not exist", path.display()))?;
                Ok(Some(config))
            }
            None => Ok(Config::load()?),
        }
    }

    /// Engine defaults, then the config file, then command-line flags.
    fn options(&self) -> Result<PurifyOptions> {
        let mut options = PurifyOptions::default();

        if let Some(config) = self.load_config()? {
            config.apply(&mut options)?;
        }

        if let Some(width) = self.width {
            options.width = usize::from(width);
        }
        if self.no_header {
            options.header = None;
        }
        if let Some(marker) = &self.challenge_marker {
            options.markers.challenge = marker.clone();
        }

        Ok(options)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let options = cli.options()?;
    log::debug!("options: {options:?}");

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read document from stdin")?;

    let purified = purify_document(&input, &options).context("Document is malformed")?;
    let stats = purified.stats;
    log::info!(
        "{} headings ({} challenges), {} code blocks, {} paragraphs, {} links, {} omitted lines, {} front matter lines",
        stats.headings,
        stats.challenges,
        stats.code_blocks,
        stats.paragraphs,
        stats.links,
        stats.omitted_lines,
        stats.front_matter_lines
    );

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    writer
        .write_all(purified.to_text().as_bytes())
        .context("Failed to write output")?;
    writer.flush().context("Failed to write output")?;

    Ok(())
}
