use std::{
    path::{Path, PathBuf},
    process::Stdio,
};

use tokio::process::Command;

use crate::{app::models::api_error::ApiError, extraction::errors::ExtractionApiError};

pub static OCR_LANGUAGE: &str = "eng";
pub static RASTER_DPI: &str = "200";

/// Runs tesseract on an image and returns the recognized text.
pub async fn ocr_image(image_path: &Path, tesseract_path: &str) -> Result<String, ApiError> {
    let output = Command::new(tesseract_path)
        .arg(image_path)
        .arg("stdout")
        .args(["-l", OCR_LANGUAGE])
        .stdin(Stdio::null())
        .output()
        .await;

    match output {
        Ok(output) if output.status.success() => {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        }
        Ok(output) => {
            tracing::error!(
                "tesseract exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            );
            Err(ExtractionApiError::TextExtractionFailed.value())
        }
        Err(e) => {
            tracing::error!("failed to spawn {}: {}", tesseract_path, e);
            Err(ExtractionApiError::TextExtractionFailed.value())
        }
    }
}

/// Renders the first page of a PDF to `<out_prefix>.png`.
pub async fn rasterize_first_page(
    pdf_path: &Path,
    out_prefix: &Path,
    pdftoppm_path: &str,
) -> Result<PathBuf, ApiError> {
    let output = Command::new(pdftoppm_path)
        .args(["-png", "-r", RASTER_DPI, "-f", "1", "-l", "1", "-singlefile"])
        .arg(pdf_path)
        .arg(out_prefix)
        .stdin(Stdio::null())
        .output()
        .await;

    match output {
        Ok(output) if output.status.success() => Ok(out_prefix.with_extension("png")),
        Ok(output) => {
            tracing::error!(
                "pdftoppm exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            );
            Err(ExtractionApiError::TextExtractionFailed.value())
        }
        Err(e) => {
            tracing::error!("failed to spawn {}: {}", pdftoppm_path, e);
            Err(ExtractionApiError::TextExtractionFailed.value())
        }
    }
}
