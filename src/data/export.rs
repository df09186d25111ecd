//! Saving the distance matrix to disk as HTML or CSV.

use std::io::Write;
use std::path::Path;

use crate::data::matrix::DistanceMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Csv => "csv",
        }
    }

    /// Default file name, stamped with the local time.
    pub fn default_file_name(self) -> String {
        format!(
            "distance_matrix_{}.{}",
            chrono::Local::now().format("%Y%m%d_%H%M%S"),
            self.extension()
        )
    }
}

/// Write `matrix` to `path`, distances suffixed with `unit`.
pub fn save_matrix<P: AsRef<Path>>(
    path: P,
    matrix: &DistanceMatrix,
    unit: &str,
    format: ExportFormat,
) -> std::io::Result<()> {
    let f = std::fs::File::create(path)?;
    let mut w = std::io::BufWriter::new(f);
    match format {
        ExportFormat::Html => writeln!(w, "{}", matrix.to_html(unit))?,
        ExportFormat::Csv => matrix.write_csv(&mut w, unit)?,
    }
    w.flush()
}
