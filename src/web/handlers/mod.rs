// src/web/handlers/mod.rs

pub mod output_handlers;
pub mod section_handlers;
pub mod session_handlers;

pub use output_handlers::*;
pub use section_handlers::*;
pub use session_handlers::*;

use rocket::serde::json::Json;
use uuid::Uuid;

use crate::web::types::ErrorResponse;

/// Session ids arrive as raw path segments; anything that is not a
/// UUID gets the same not-found answer as a missing session.
pub(crate) fn parse_session_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| {
        Json(ErrorResponse::new(
            format!("Invalid session id: {}", raw),
            "SESSION_NOT_FOUND".to_string(),
            vec!["Create a session with POST /api/sessions".to_string()],
        ))
    })
}
