// src/web/handlers/output_handlers.rs
//! Read-only consumers of the session record: template listing, HTML
//! rendering, export download and cover-letter composition.

use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::cover_letter::{self, LetterRequest};
use crate::environment::EnvironmentConfig;
use crate::render::{render_html, TemplateId};
use crate::session::SessionStore;
use crate::utils::document_filename;
use crate::web::types::{
    CoverLetterResponse, ErrorResponse, HtmlDownload, TemplateInfo, TextResponse,
};

use super::parse_session_id;

pub async fn health_handler() -> Json<TextResponse> {
    Json(TextResponse {
        message: "ok".to_string(),
    })
}

pub async fn list_templates_handler() -> Json<Vec<TemplateInfo>> {
    Json(
        TemplateId::ALL
            .iter()
            .map(|id| TemplateInfo {
                id: id.name().to_string(),
                description: id.description().to_string(),
            })
            .collect(),
    )
}

fn resolve_template(requested: Option<&str>, config: &EnvironmentConfig) -> TemplateId {
    match requested {
        Some(name) => TemplateId::from_name(name),
        None => config.default_template_id(),
    }
}

pub async fn render_session_handler(
    store: &State<SessionStore>,
    config: &State<EnvironmentConfig>,
    id: &str,
    template: Option<&str>,
) -> Result<RawHtml<String>, Json<ErrorResponse>> {
    let id = parse_session_id(id)?;
    let cv = store
        .get(id)
        .await
        .ok_or_else(|| Json(ErrorResponse::session_not_found(id)))?;

    let template = resolve_template(template, config);
    Ok(RawHtml(render_html(&cv, template)))
}

pub async fn export_session_handler(
    store: &State<SessionStore>,
    config: &State<EnvironmentConfig>,
    id: &str,
    template: Option<&str>,
) -> Result<HtmlDownload, Json<ErrorResponse>> {
    let id = parse_session_id(id)?;
    let cv = store
        .get(id)
        .await
        .ok_or_else(|| Json(ErrorResponse::session_not_found(id)))?;

    let template = resolve_template(template, config);
    let body = render_html(&cv, template);
    let filename = document_filename(&cv.personal_info.full_name);
    info!(
        "Exporting session {} with template {} as {}",
        id,
        template.name(),
        filename
    );

    Ok(HtmlDownload { body, filename })
}

pub async fn cover_letter_handler(
    store: &State<SessionStore>,
    id: &str,
    request: Json<LetterRequest>,
) -> Result<Json<CoverLetterResponse>, Json<ErrorResponse>> {
    let id = parse_session_id(id)?;
    let cv = store
        .get(id)
        .await
        .ok_or_else(|| Json(ErrorResponse::session_not_found(id)))?;

    let request = request.into_inner();
    if request.job_title.trim().is_empty() || request.company_name.trim().is_empty() {
        return Err(Json(ErrorResponse::new(
            "Job title and company name are required".to_string(),
            "MISSING_JOB_DETAILS".to_string(),
            vec!["Provide job_title and company_name".to_string()],
        )));
    }

    let letter = cover_letter::compose(&cv, &request);
    let filename = cover_letter::letter_filename(&request);
    Ok(Json(CoverLetterResponse { letter, filename }))
}
