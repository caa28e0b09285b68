//! CSV table output of a mean path.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use super::{artefact_path, check_series, OutputFormat, RenderError, Renderer};
use crate::summary::MeanPath;

#[derive(Serialize)]
struct Row {
    step: usize,
    rate: f64,
}

/// Writes each series as a `step,rate` CSV file.
#[derive(Debug)]
pub struct CsvRenderer {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl CsvRenderer {
    /// Renderer writing into `output_dir`, created on first use.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    /// Tables written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl Renderer for CsvRenderer {
    fn render(&mut self, series: &MeanPath, title: &str) -> Result<(), RenderError> {
        check_series(series)?;
        let path = artefact_path(&self.output_dir, title, OutputFormat::Csv)?;

        let mut writer = csv::Writer::from_path(&path)?;
        for (step, &rate) in series.values().iter().enumerate() {
            writer.serialize(Row { step, rate })?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = series.len(), "Table written");
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut renderer = CsvRenderer::new(dir.path().join("nested"));
        let series = MeanPath::from_values(vec![0.02, 0.5, -0.25]);

        renderer.render(&series, "Mean Path").unwrap();

        let path = dir.path().join("nested").join("mean-path.csv");
        assert_eq!(renderer.written(), &[path.clone()]);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["step", "rate"]);

        let rows: Vec<(usize, f64)> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].parse().unwrap(), r[1].parse().unwrap())
            })
            .collect();
        assert_eq!(rows, vec![(0, 0.02), (1, 0.5), (2, -0.25)]);
    }

    #[test]
    fn test_unwritable_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let mut renderer = CsvRenderer::new(&blocker);
        let err = renderer
            .render(&MeanPath::from_values(vec![0.1]), "x")
            .unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
