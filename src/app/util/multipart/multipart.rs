use axum::{extract::Multipart, http::StatusCode};
use uuid::Uuid;

use crate::app::models::api_error::ApiError;

use super::models::file_properties::FileProperties;

pub async fn get_files_properties(mut multipart: Multipart) -> Result<Vec<FileProperties>, ApiError> {
    let mut vec = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(%e);
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: "Malformed multipart body.".to_string(),
                });
            }
        };

        let field_name = field.name().unwrap_or("file").to_string();
        let file_name = field.file_name().unwrap_or("file-name").to_string();
        let mime_type = field
            .content_type()
            .and_then(|content_type| content_type.parse().ok())
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);
        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(%e);
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: "Failed to read uploaded file.".to_string(),
                });
            }
        };

        let properties = FileProperties {
            id: Uuid::new_v4().to_string(),
            field_name,
            file_name,
            mime_type,
            data,
        };

        vec.push(properties);
    }

    Ok(vec)
}
