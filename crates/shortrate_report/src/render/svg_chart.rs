//! SVG line chart output via plotters.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use super::{artefact_path, check_series, OutputFormat, RenderError, Renderer, X_LABEL, Y_LABEL};
use crate::summary::MeanPath;

/// Default chart size in pixels (width, height).
pub const DEFAULT_SIZE: (u32, u32) = (1000, 500);

/// Writes each series as an SVG line chart.
#[derive(Debug)]
pub struct SvgRenderer {
    output_dir: PathBuf,
    size: (u32, u32),
    written: Vec<PathBuf>,
}

impl SvgRenderer {
    /// Renderer writing into `output_dir`, created on first use.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            size: DEFAULT_SIZE,
            written: Vec::new(),
        }
    }

    /// Overrides the chart size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Charts written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn draw(&self, path: &Path, series: &MeanPath, title: &str) -> Result<(), RenderError> {
        let root = SVGBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(RenderError::backend)?;

        let (lo, hi) = series
            .range()
            .ok_or_else(|| RenderError::InvalidSeries("series is empty".to_string()))?;
        let pad = ((hi - lo) * 0.05).max(1e-6);
        let x_max = series.len().saturating_sub(1).max(1);

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24).into_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(0..x_max, (lo - pad)..(hi + pad))
            .map_err(RenderError::backend)?;

        chart
            .configure_mesh()
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .draw()
            .map_err(RenderError::backend)?;

        chart
            .draw_series(LineSeries::new(
                series.values().iter().copied().enumerate(),
                BLUE.stroke_width(2),
            ))
            .map_err(RenderError::backend)?;

        root.present().map_err(RenderError::backend)?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, series: &MeanPath, title: &str) -> Result<(), RenderError> {
        check_series(series)?;
        let path = artefact_path(&self.output_dir, title, OutputFormat::Svg)?;
        self.draw(&path, series, title)?;

        info!(path = %path.display(), points = series.len(), "Chart written");
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_svg_with_title_and_labels() {
        let dir = tempfile::tempdir().unwrap();
        let mut renderer = SvgRenderer::new(dir.path());
        let series = MeanPath::from_values(vec![0.02, 0.025, 0.03, 0.028, 0.031]);

        renderer.render(&series, "Mean Interest Rate Path (Test)").unwrap();

        let path = dir.path().join("mean-interest-rate-path-test.svg");
        assert_eq!(renderer.written(), &[path.clone()]);
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Mean Interest Rate Path (Test)"));
        assert!(svg.contains(X_LABEL));
        assert!(svg.contains(Y_LABEL));
    }

    #[test]
    fn test_constant_series_renders() {
        let dir = tempfile::tempdir().unwrap();
        let mut renderer = SvgRenderer::new(dir.path()).with_size(400, 300);
        let series = MeanPath::from_values(vec![0.05; 10]);
        assert!(renderer.render(&series, "flat").is_ok());
    }

    #[test]
    fn test_empty_series_rejected_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let mut renderer = SvgRenderer::new(dir.path());
        let err = renderer
            .render(&MeanPath::from_values(vec![]), "empty")
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidSeries(_)));
        assert!(renderer.written().is_empty());
    }
}
