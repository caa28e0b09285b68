//! Rendering collaborator for mean paths.
//!
//! A [`Renderer`] takes a series and a title and produces an artefact. Two
//! implementations ship with the crate:
//!
//! - [`SvgRenderer`]: line chart, x = step index, y = rate, with a grid and
//!   "Time Steps" / "Interest Rate" axis labels
//! - [`CsvRenderer`]: `step,rate` table
//!
//! Both write `<output_dir>/<slug(title)>.<ext>`. [`ChartRenderer`]
//! dispatches over them statically for configuration-driven selection.

mod csv_table;
mod svg_chart;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::summary::MeanPath;

pub use csv_table::CsvRenderer;
pub use svg_chart::SvgRenderer;

/// X axis label.
pub const X_LABEL: &str = "Time Steps";

/// Y axis label.
pub const Y_LABEL: &str = "Interest Rate";

/// Rendering failure.
///
/// Raised by the renderer only; the series being rendered is never modified.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Filesystem error creating the output directory or file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart backend failure
    #[error("Chart backend error: {0}")]
    Backend(String),

    /// CSV writer failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Series cannot be rendered (empty or non-finite)
    #[error("Invalid series: {0}")]
    InvalidSeries(String),
}

impl RenderError {
    /// Create a backend error
    pub fn backend(msg: impl fmt::Display) -> Self {
        Self::Backend(msg.to_string())
    }
}

/// Presents a series under a title.
pub trait Renderer {
    /// Render `series` with `title`.
    fn render(&mut self, series: &MeanPath, title: &str) -> Result<(), RenderError>;
}

/// Output format selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// SVG line chart
    #[default]
    Svg,
    /// CSV table
    Csv,
}

impl OutputFormat {
    /// File extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "unknown output format '{}', expected svg or csv",
                other
            )),
        }
    }
}

/// Static dispatch over the bundled renderers.
#[derive(Debug)]
pub enum ChartRenderer {
    /// SVG line chart
    Svg(SvgRenderer),
    /// CSV table
    Csv(CsvRenderer),
}

impl ChartRenderer {
    /// Renderer for `format` writing into `output_dir`.
    pub fn new(format: OutputFormat, output_dir: impl AsRef<Path>) -> Self {
        match format {
            OutputFormat::Svg => ChartRenderer::Svg(SvgRenderer::new(output_dir)),
            OutputFormat::Csv => ChartRenderer::Csv(CsvRenderer::new(output_dir)),
        }
    }

    /// Files written so far.
    pub fn written(&self) -> &[PathBuf] {
        match self {
            ChartRenderer::Svg(r) => r.written(),
            ChartRenderer::Csv(r) => r.written(),
        }
    }
}

impl Renderer for ChartRenderer {
    fn render(&mut self, series: &MeanPath, title: &str) -> Result<(), RenderError> {
        match self {
            ChartRenderer::Svg(r) => r.render(series, title),
            ChartRenderer::Csv(r) => r.render(series, title),
        }
    }
}

/// File-name stem for a title: lowercase ASCII alphanumerics joined by `-`.
///
/// ```
/// use shortrate_report::render::slug;
///
/// assert_eq!(
///     slug("Mean Interest Rate Path (Hull-White Model)"),
///     "mean-interest-rate-path-hull-white-model"
/// );
/// ```
pub fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("series");
    }
    out
}

/// Rejects series that cannot be drawn.
pub(crate) fn check_series(series: &MeanPath) -> Result<(), RenderError> {
    if series.is_empty() {
        return Err(RenderError::InvalidSeries("series is empty".to_string()));
    }
    if let Some(step) = series.values().iter().position(|v| !v.is_finite()) {
        return Err(RenderError::InvalidSeries(format!(
            "non-finite value at step {}",
            step
        )));
    }
    Ok(())
}

/// Creates `dir` if needed and returns the artefact path for `title`.
pub(crate) fn artefact_path(
    dir: &Path,
    title: &str,
    format: OutputFormat,
) -> Result<PathBuf, RenderError> {
    std::fs::create_dir_all(dir)?;
    Ok(dir.join(format!("{}.{}", slug(title), format.extension())))
}
