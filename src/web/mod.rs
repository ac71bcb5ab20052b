// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{catchers, delete, get, options, patch, post, put, routes, Request, Response, State};
use tracing::info;

use crate::cover_letter::LetterRequest;
use crate::editor::education::EducationField;
use crate::editor::experience::ExperienceField;
use crate::editor::personal::PersonalField;
use crate::editor::skills::{CertificationField, LanguageField};
use crate::environment::EnvironmentConfig;
use crate::session::SessionStore;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, PUT, PATCH, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

// ===== Session lifecycle =====

#[post("/sessions")]
pub async fn create_session(store: &State<SessionStore>) -> Json<SessionCreatedResponse> {
    handlers::create_session_handler(store).await
}

#[get("/sessions/<id>")]
pub async fn get_session(
    store: &State<SessionStore>,
    id: &str,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::get_session_handler(store, id).await
}

#[delete("/sessions/<id>")]
pub async fn delete_session(
    store: &State<SessionStore>,
    id: &str,
) -> Result<Json<ActionResponse>, Json<ErrorResponse>> {
    handlers::delete_session_handler(store, id).await
}

// ===== Personal info =====

#[put("/sessions/<id>/personal", data = "<field>")]
pub async fn update_personal(
    store: &State<SessionStore>,
    id: &str,
    field: Json<PersonalField>,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::update_personal_handler(store, id, field).await
}

#[post("/sessions/<id>/picture", data = "<upload>")]
pub async fn upload_picture(
    store: &State<SessionStore>,
    id: &str,
    upload: Form<PictureUploadForm<'_>>,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::upload_picture_handler(store, id, upload).await
}

#[delete("/sessions/<id>/picture")]
pub async fn delete_picture(
    store: &State<SessionStore>,
    id: &str,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::delete_picture_handler(store, id).await
}

// ===== Experience =====

#[post("/sessions/<id>/experience")]
pub async fn add_experience(
    store: &State<SessionStore>,
    id: &str,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::add_experience_handler(store, id).await
}

#[patch("/sessions/<id>/experience/<entry_id>", data = "<field>")]
pub async fn update_experience(
    store: &State<SessionStore>,
    id: &str,
    entry_id: &str,
    field: Json<ExperienceField>,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::update_experience_handler(store, id, entry_id, field).await
}

#[delete("/sessions/<id>/experience/<entry_id>")]
pub async fn remove_experience(
    store: &State<SessionStore>,
    id: &str,
    entry_id: &str,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::remove_experience_handler(store, id, entry_id).await
}

#[post("/sessions/<id>/experience/<entry_id>/achievements")]
pub async fn add_achievement(
    store: &State<SessionStore>,
    id: &str,
    entry_id: &str,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::add_achievement_handler(store, id, entry_id).await
}

#[patch("/sessions/<id>/experience/<entry_id>/achievements/<index>", data = "<body>")]
pub async fn update_achievement(
    store: &State<SessionStore>,
    id: &str,
    entry_id: &str,
    index: usize,
    body: Json<handlers::AchievementUpdate>,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::update_achievement_handler(store, id, entry_id, index, body).await
}

#[delete("/sessions/<id>/experience/<entry_id>/achievements/<index>")]
pub async fn remove_achievement(
    store: &State<SessionStore>,
    id: &str,
    entry_id: &str,
    index: usize,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::remove_achievement_handler(store, id, entry_id, index).await
}

// ===== Education =====

#[post("/sessions/<id>/education")]
pub async fn add_education(
    store: &State<SessionStore>,
    id: &str,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::add_education_handler(store, id).await
}

#[patch("/sessions/<id>/education/<entry_id>", data = "<field>")]
pub async fn update_education(
    store: &State<SessionStore>,
    id: &str,
    entry_id: &str,
    field: Json<EducationField>,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::update_education_handler(store, id, entry_id, field).await
}

#[delete("/sessions/<id>/education/<entry_id>")]
pub async fn remove_education(
    store: &State<SessionStore>,
    id: &str,
    entry_id: &str,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::remove_education_handler(store, id, entry_id).await
}

// ===== Skills =====

#[post("/sessions/<id>/skills/<category>")]
pub async fn add_skill(
    store: &State<SessionStore>,
    id: &str,
    category: &str,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::add_skill_handler(store, id, category).await
}

#[patch("/sessions/<id>/skills/<category>/<index>", data = "<body>")]
pub async fn update_skill(
    store: &State<SessionStore>,
    id: &str,
    category: &str,
    index: usize,
    body: Json<handlers::SkillUpdate>,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::update_skill_handler(store, id, category, index, body).await
}

#[delete("/sessions/<id>/skills/<category>/<index>")]
pub async fn remove_skill(
    store: &State<SessionStore>,
    id: &str,
    category: &str,
    index: usize,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::remove_skill_handler(store, id, category, index).await
}

#[post("/sessions/<id>/languages")]
pub async fn add_language(
    store: &State<SessionStore>,
    id: &str,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::add_language_handler(store, id).await
}

#[patch("/sessions/<id>/languages/<index>", data = "<field>")]
pub async fn update_language(
    store: &State<SessionStore>,
    id: &str,
    index: usize,
    field: Json<LanguageField>,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::update_language_handler(store, id, index, field).await
}

#[delete("/sessions/<id>/languages/<index>")]
pub async fn remove_language(
    store: &State<SessionStore>,
    id: &str,
    index: usize,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::remove_language_handler(store, id, index).await
}

#[post("/sessions/<id>/certifications")]
pub async fn add_certification(
    store: &State<SessionStore>,
    id: &str,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::add_certification_handler(store, id).await
}

#[patch("/sessions/<id>/certifications/<index>", data = "<field>")]
pub async fn update_certification(
    store: &State<SessionStore>,
    id: &str,
    index: usize,
    field: Json<CertificationField>,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::update_certification_handler(store, id, index, field).await
}

#[delete("/sessions/<id>/certifications/<index>")]
pub async fn remove_certification(
    store: &State<SessionStore>,
    id: &str,
    index: usize,
) -> Result<Json<RecordResponse>, Json<ErrorResponse>> {
    handlers::remove_certification_handler(store, id, index).await
}

// ===== Output =====

#[get("/sessions/<id>/render?<template>")]
pub async fn render_session(
    store: &State<SessionStore>,
    config: &State<EnvironmentConfig>,
    id: &str,
    template: Option<&str>,
) -> Result<RawHtml<String>, Json<ErrorResponse>> {
    handlers::render_session_handler(store, config, id, template).await
}

#[get("/sessions/<id>/export?<template>")]
pub async fn export_session(
    store: &State<SessionStore>,
    config: &State<EnvironmentConfig>,
    id: &str,
    template: Option<&str>,
) -> Result<HtmlDownload, Json<ErrorResponse>> {
    handlers::export_session_handler(store, config, id, template).await
}

#[post("/sessions/<id>/cover-letter", data = "<request>")]
pub async fn compose_cover_letter(
    store: &State<SessionStore>,
    id: &str,
    request: Json<LetterRequest>,
) -> Result<Json<CoverLetterResponse>, Json<ErrorResponse>> {
    handlers::cover_letter_handler(store, id, request).await
}

#[get("/templates")]
pub async fn get_templates() -> Json<Vec<TemplateInfo>> {
    handlers::list_templates_handler().await
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Resource not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Check the request path".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

// Main server start function
pub async fn start_web_server(config: EnvironmentConfig) -> Result<()> {
    info!("Starting CV builder API server");
    info!("Default template: {}", config.default_template_id().name());
    info!("Sessions are held in memory only; nothing is persisted");

    let _rocket = rocket::build()
        .attach(Cors)
        .manage(SessionStore::new())
        .manage(config)
        .register("/api", catchers![bad_request, not_found, internal_error])
        .mount(
            "/api",
            routes![
                create_session,
                get_session,
                delete_session,
                update_personal,
                upload_picture,
                delete_picture,
                add_experience,
                update_experience,
                remove_experience,
                add_achievement,
                update_achievement,
                remove_achievement,
                add_education,
                update_education,
                remove_education,
                add_skill,
                update_skill,
                remove_skill,
                add_language,
                update_language,
                remove_language,
                add_certification,
                update_certification,
                remove_certification,
                render_session,
                export_session,
                compose_cover_letter,
                get_templates,
                health,
                options,
            ],
        )
        .launch()
        .await?;

    Ok(())
}
