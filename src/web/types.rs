// src/web/types.rs
//! Request/response types for the JSON API.

use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::http::ContentType;
use rocket::response::{self, Responder};
use rocket::serde::Serialize;
use rocket::{Request, Response};
use uuid::Uuid;

use crate::types::CvData;
use crate::validators::Validation;

/// Advisory notice attached to a mutation response. The toast channel:
/// informative only, it never gates the operation.
#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum NoticeSeverity {
    Info,
    Warning,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Warning,
            message: message.into(),
        }
    }

    /// Collect a warning from a failed advisory validation.
    pub fn from_validation(validation: &Validation, notices: &mut Vec<Notice>) {
        if !validation.is_valid {
            if let Some(message) = &validation.message {
                notices.push(Notice::warning(message.clone()));
            }
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

/// Standard mutation response: the full replaced record plus any
/// advisory notices.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct RecordResponse {
    pub cv: CvData,
    pub notices: Vec<Notice>,
}

impl RecordResponse {
    pub fn new(cv: CvData) -> Self {
        Self {
            cv,
            notices: Vec::new(),
        }
    }

    pub fn with_notices(cv: CvData, notices: Vec<Notice>) -> Self {
        Self { cv, notices }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl ErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            success: false,
            error,
            error_code,
            suggestions,
        }
    }

    pub fn session_not_found(id: Uuid) -> Self {
        Self::new(
            format!("Session {} not found", id),
            "SESSION_NOT_FOUND".to_string(),
            vec![
                "Create a session with POST /api/sessions".to_string(),
                "Sessions are in-memory and do not survive a restart".to_string(),
            ],
        )
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TemplateInfo {
    pub id: String,
    pub description: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CoverLetterResponse {
    pub letter: String,
    pub filename: String,
}

#[derive(FromForm)]
pub struct PictureUploadForm<'f> {
    pub file: TempFile<'f>,
}

/// HTML payload served as a named attachment download.
pub struct HtmlDownload {
    pub body: String,
    pub filename: String,
}

impl<'r> Responder<'r, 'static> for HtmlDownload {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .header(ContentType::HTML)
            .raw_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.filename),
            )
            .sized_body(self.body.len(), std::io::Cursor::new(self.body))
            .ok()
    }
}
