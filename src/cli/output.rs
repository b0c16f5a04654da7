//! Output handling for the non-interactive commands.
//!
//! Provides the `--output` format selection and the stdout-or-file
//! write target shared by `search` and `list`.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// Output format for `search` and `list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text, or JSON when writing to a `.json` file
    #[default]
    Auto,
    /// Aligned plain-text table
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Target for output - either stdout or a file
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => OutputTarget::File(p),
            None => OutputTarget::Stdout,
        }
    }
}

/// Resolve `Auto` against the output target.
///
/// Text everywhere, except that an explicit `.json` output file implies
/// JSON.
pub fn auto_detect_format(format: OutputFormat, target: &OutputTarget) -> OutputFormat {
    match format {
        OutputFormat::Auto => match target {
            OutputTarget::File(path)
                if path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json")) =>
            {
                OutputFormat::Json
            }
            _ => OutputFormat::Text,
        },
        other => other,
    }
}

/// Determine if color should be used based on flags and environment
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{}", content);
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {:?}", path))?;
            if !quiet {
                tracing::info!("Output written to {:?}", path);
            }
            Ok(())
        }
    }
}
