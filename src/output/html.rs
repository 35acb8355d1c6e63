//! Chart document writer.
//!
//! Writes the rendered HTML chart to disk.

use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a rendered chart document to a file
///
/// **Public** - main entry point for chart output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_chart(html: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing chart to: {}", output_path.display());

    validate_chart_path(output_path)?;
    super::ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(html.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Chart written successfully ({:.2} KB)",
        html.len() as f64 / 1024.0
    );

    Ok(())
}

/// Validate output path for the chart document
///
/// **Public** - also used for early argument validation
///
/// The chart is always HTML, so any other extension (`.pdf`, `.png`, ...)
/// is rejected rather than written with the wrong content. A path without
/// an extension is accepted.
pub fn validate_chart_path(path: &Path) -> Result<(), OutputError> {
    super::validate_path(path)?;

    match path.extension().and_then(|ext| ext.to_str()) {
        None => Ok(()),
        Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => Ok(()),
        Some(ext) => Err(OutputError::InvalidPath(format!(
            "Chart is written as HTML, cannot use .{} extension: {}",
            ext,
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "<html><body>chart</body></html>";

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/graph.html");

        write_chart(DOC, &nested_path).unwrap();

        assert_eq!(std::fs::read_to_string(&nested_path).unwrap(), DOC);
    }

    #[test]
    fn test_pdf_path_is_rejected_without_writing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let pdf_path = temp_dir.path().join("graph.pdf");

        let result = write_chart(DOC, &pdf_path);

        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
        assert!(!pdf_path.exists());
    }

    #[test]
    fn test_chart_path_extensions() {
        assert!(validate_chart_path(Path::new("graph.html")).is_ok());
        assert!(validate_chart_path(Path::new("graph.HTM")).is_ok());
        assert!(validate_chart_path(Path::new("graph")).is_ok());
        assert!(validate_chart_path(Path::new("graph.png")).is_err());
    }

    #[test]
    fn test_write_empty_path_fails() {
        assert!(write_chart(DOC, "").is_err());
    }
}
