// src/web/handlers/session_handlers.rs
//! Session lifecycle, personal info edits and the picture upload.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rocket::form::Form;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, warn};

use crate::editor::personal::{self, PersonalField};
use crate::session::SessionStore;
use crate::validators::{sniff_image_format, validate_image_upload, validate_url};
use crate::web::types::{
    ActionResponse, ErrorResponse, Notice, PictureUploadForm, RecordResponse,
    SessionCreatedResponse,
};

use super::parse_session_id;

pub async fn create_session_handler(store: &State<SessionStore>) -> Json<SessionCreatedResponse> {
    let session_id = store.create().await;
    Json(SessionCreatedResponse { session_id })
}

pub async fn get_session_handler(
    store: &State<SessionStore>,
    id: &str,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    let id = parse_session_id(id)?;
    match store.get(id).await {
        Some(cv) => Ok(Json(RecordResponse::new(cv))),
        None => Err(Json(ErrorResponse::session_not_found(id))),
    }
}

pub async fn delete_session_handler(
    store: &State<SessionStore>,
    id: &str,
) -> Result<Json<ActionResponse>, Json<ErrorResponse>> {
    let id = parse_session_id(id)?;
    if store.delete(id).await {
        Ok(Json(ActionResponse::success("Session discarded")))
    } else {
        Err(Json(ErrorResponse::session_not_found(id)))
    }
}

/// Apply one personal-info field. URL-shaped fields get an advisory
/// validation notice; the value is stored either way.
pub async fn update_personal_handler(
    store: &State<SessionStore>,
    id: &str,
    field: Json<PersonalField>,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    let id = parse_session_id(id)?;
    let field = field.into_inner();

    let mut notices = Vec::new();
    match &field {
        PersonalField::Linkedin(value) | PersonalField::Website(value) => {
            Notice::from_validation(&validate_url(value), &mut notices);
        }
        _ => {}
    }

    let updated = store
        .update(id, |cv| {
            let mut next = cv.clone();
            next.personal_info = personal::apply(&cv.personal_info, field.clone());
            next
        })
        .await
        .ok_or_else(|| Json(ErrorResponse::session_not_found(id)))?;

    Ok(Json(RecordResponse::with_notices(updated, notices)))
}

/// Profile picture upload. The one enforcing validation path: a
/// rejected file is discarded and the previous picture survives.
pub async fn upload_picture_handler(
    store: &State<SessionStore>,
    id: &str,
    mut upload: Form<PictureUploadForm<'_>>,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    let id = parse_session_id(id)?;

    if store.get(id).await.is_none() {
        return Err(Json(ErrorResponse::session_not_found(id)));
    }

    // Unsanitized name is only string-compared against allowed
    // extensions, never used as a path.
    let filename = upload
        .file
        .raw_name()
        .map(|n| n.dangerous_unsafe_unsanitized_raw().as_str().to_string())
        .unwrap_or_default();
    let content_type = upload
        .file
        .content_type()
        .map(|ct| ct.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let size = upload.file.len();

    let verdict = validate_image_upload(&filename, &content_type, size);
    if !verdict.is_valid {
        let message = verdict
            .message
            .unwrap_or_else(|| "Invalid image file".to_string());
        warn!("Rejected picture upload for session {}: {}", id, message);
        return Err(Json(ErrorResponse::new(
            message,
            "INVALID_IMAGE".to_string(),
            vec![
                "Use a JPEG, PNG or WebP image".to_string(),
                "Keep the file under 5MB".to_string(),
            ],
        )));
    }

    let temp_path = std::env::temp_dir().join(format!("cvforge_upload_{}", uuid::Uuid::new_v4()));
    if let Err(e) = upload.file.persist_to(&temp_path).await {
        error!("Failed to stage uploaded picture: {}", e);
        return Err(Json(ErrorResponse::new(
            "Failed to process uploaded file".to_string(),
            "FILE_SAVE_ERROR".to_string(),
            vec!["Try uploading the file again".to_string()],
        )));
    }

    let bytes = match tokio::fs::read(&temp_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read staged picture: {}", e);
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(Json(ErrorResponse::new(
                "Failed to process uploaded file".to_string(),
                "FILE_SAVE_ERROR".to_string(),
                vec!["Try uploading the file again".to_string()],
            )));
        }
    };
    let _ = tokio::fs::remove_file(&temp_path).await;

    // The declared type passed; the content must agree with it.
    let format = match sniff_image_format(&bytes) {
        Some(format) => format,
        None => {
            warn!("Picture upload for session {} failed format sniffing", id);
            return Err(Json(ErrorResponse::new(
                "File content is not a recognized image".to_string(),
                "INVALID_IMAGE".to_string(),
                vec!["Re-export the image as JPEG, PNG or WebP".to_string()],
            )));
        }
    };

    let data_uri = format!("data:{};base64,{}", format.mime(), BASE64.encode(&bytes));
    let updated = store
        .update(id, |cv| {
            let mut next = cv.clone();
            next.personal_info = personal::set_profile_picture(&cv.personal_info, data_uri.clone());
            next
        })
        .await
        .ok_or_else(|| Json(ErrorResponse::session_not_found(id)))?;

    info!("Stored profile picture for session {} ({} bytes)", id, size);
    Ok(Json(RecordResponse::with_notices(
        updated,
        vec![Notice::info("Profile picture updated")],
    )))
}

pub async fn delete_picture_handler(
    store: &State<SessionStore>,
    id: &str,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    let id = parse_session_id(id)?;
    let updated = store
        .update(id, |cv| {
            let mut next = cv.clone();
            next.personal_info = personal::clear_profile_picture(&cv.personal_info);
            next
        })
        .await
        .ok_or_else(|| Json(ErrorResponse::session_not_found(id)))?;
    Ok(Json(RecordResponse::new(updated)))
}
