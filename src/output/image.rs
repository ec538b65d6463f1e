//! Dashboard image writers (SVG text and PNG bytes).

use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write SVG content to a file
///
/// **Public** - main entry point for SVG output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is empty or a directory
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    info!("Writing SVG to: {}", output_path.display());

    write_bytes(svg_content.as_bytes(), output_path, "svg")?;

    info!(
        "SVG written successfully ({} bytes, {:.2} KB)",
        svg_content.len(),
        svg_content.len() as f64 / 1024.0
    );
    Ok(())
}

/// Write encoded PNG bytes to a file
///
/// **Public** - the PNG is the mail attachment
pub fn write_png(png: &[u8], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    info!("Writing PNG to: {}", output_path.display());

    write_bytes(png, output_path, "png")?;

    info!("PNG written successfully ({} bytes)", png.len());
    Ok(())
}

fn write_bytes(content: &[u8], path: &Path, extension: &str) -> Result<(), OutputError> {
    super::prepare_output_path(path, extension)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedlog.svg");

        write_svg("<svg></svg>", &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg></svg>");
    }

    #[test]
    fn test_write_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plots/feedlog.png");

        write_png(&[0x89, b'P', b'N', b'G'], &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_empty_path() {
        assert!(matches!(
            write_svg("<svg/>", ""),
            Err(OutputError::InvalidPath(_))
        ));
    }
}
