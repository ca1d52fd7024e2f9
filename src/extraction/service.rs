use axum::extract::Multipart;
use tempfile::TempDir;

use crate::{
    app::{
        envy::Envy,
        errors::DefaultApiError,
        models::api_error::ApiError,
        util::multipart::{
            models::file_properties::FileProperties, multipart::get_files_properties,
        },
    },
    auth::jwt::models::claims::Claims,
    categories,
    AppState,
};

use super::{
    enums::file_kind::FileKind,
    errors::ExtractionApiError,
    gemini,
    models::{category_names::CategoryNames, extraction_response::ExtractionResponse},
    util::{llm_output::parse_llm_output, ocr, pdf, prompt::build_prompt},
};

pub static FILE_FIELD_NAME: &str = "file";

pub async fn extract_from_multipart(
    multipart: Multipart,
    claims: &Claims,
    state: &AppState,
) -> Result<ExtractionResponse, ApiError> {
    let files = get_files_properties(multipart).await?;

    let Some(file) = files
        .into_iter()
        .find(|file| file.field_name == FILE_FIELD_NAME && !file.data.is_empty())
    else {
        return Err(ExtractionApiError::FileRequired.value());
    };

    tracing::debug!(
        "extracting {} ({}, {} bytes)",
        file.file_name,
        file.mime_type,
        file.data.len()
    );

    let text = extract_text_from_file(&file, &state.envy).await?;

    let owned_categories = categories::service::get_all_categories(claims, &state.pool).await?;
    let category_names = CategoryNames::from_categories(&owned_categories);

    let value = extract_transactions(&text, &category_names, &state.http, &state.envy).await?;

    Ok(ExtractionResponse::from_value(value))
}

pub async fn extract_text_from_file(
    file: &FileProperties,
    envy: &Envy,
) -> Result<String, ApiError> {
    let Some(kind) = FileKind::detect(&file.mime_type, &file.data) else {
        return Err(ExtractionApiError::UnsupportedFileType.value());
    };

    let text = match kind {
        FileKind::Pdf => {
            let text = pdf::extract_text(file.data.clone()).await;

            match pdf::needs_ocr(&text) {
                true => {
                    tracing::debug!("pdf has {} text chars, running ocr", text.len());
                    ocr_file(file, kind, envy).await?
                }
                false => text,
            }
        }
        FileKind::Image => ocr_file(file, kind, envy).await?,
    };

    match text.trim().is_empty() {
        true => Err(ExtractionApiError::NoTextFound.value()),
        false => Ok(text),
    }
}

/// Writes the upload to a scratch directory that is removed on return.
async fn ocr_file(file: &FileProperties, kind: FileKind, envy: &Envy) -> Result<String, ApiError> {
    let dir = match TempDir::new() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::error!(%e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    };

    let input_path = dir.path().join(["upload.", kind.extension()].concat());
    if let Err(e) = tokio::fs::write(&input_path, &file.data).await {
        tracing::error!(%e);
        return Err(DefaultApiError::InternalServerError.value());
    }

    let image_path = match kind {
        FileKind::Pdf => {
            ocr::rasterize_first_page(&input_path, &dir.path().join("page"), &envy.pdftoppm_path)
                .await?
        }
        FileKind::Image => input_path,
    };

    ocr::ocr_image(&image_path, &envy.tesseract_path).await
}

pub async fn extract_transactions(
    text: &str,
    categories: &CategoryNames,
    client: &reqwest::Client,
    envy: &Envy,
) -> Result<serde_json::Value, ApiError> {
    let prompt = build_prompt(text, categories);
    let content = gemini::service::generate_content_with_retry(&prompt, client, envy).await?;

    parse_llm_output(&content)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use bytes::Bytes;

    use super::*;

    fn file(mime_type: mime::Mime, data: &'static [u8]) -> FileProperties {
        FileProperties {
            id: "1".to_string(),
            field_name: "file".to_string(),
            file_name: "statement".to_string(),
            mime_type,
            data: Bytes::from_static(data),
        }
    }

    #[tokio::test]
    async fn rejects_unsupported_file_types() {
        let result =
            extract_text_from_file(&file(mime::TEXT_PLAIN, b"hello"), &Envy::for_tests()).await;

        assert_eq!(result.unwrap_err().code, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn rejects_unrecognized_octet_stream() {
        let result = extract_text_from_file(
            &file(mime::APPLICATION_OCTET_STREAM, b"\x00\x01\x02"),
            &Envy::for_tests(),
        )
        .await;

        assert_eq!(result.unwrap_err().code, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
