// src/web/handlers/section_handlers.rs
//! Experience, education and skills editors over the session record.
//! Every mutation swaps in a whole new record; validation is advisory
//! and reported through notices.

use rocket::serde::json::Json;
use rocket::State;
use uuid::Uuid;

use crate::editor::education::{self, EducationField};
use crate::editor::experience::{self, ExperienceField};
use crate::editor::skills::{self, CertificationField, LanguageField, SkillCategory};
use crate::session::SessionStore;
use crate::types::CvData;
use crate::validators::{
    validate_education_span, validate_experience_span, validate_url, validate_year,
};
use crate::web::types::{ErrorResponse, Notice, RecordResponse};

use super::parse_session_id;

type HandlerResult = Result<Json<RecordResponse>, Json<ErrorResponse>>;

async fn apply_edit<F>(store: &State<SessionStore>, id: &str, edit: F) -> Result<CvData, Json<ErrorResponse>>
where
    F: FnOnce(&CvData) -> CvData,
{
    let id = parse_session_id(id)?;
    store
        .update(id, edit)
        .await
        .ok_or_else(|| Json(ErrorResponse::session_not_found(id)))
}

fn parse_entry_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| {
        Json(ErrorResponse::new(
            format!("Invalid entry id: {}", raw),
            "ENTRY_NOT_FOUND".to_string(),
            vec!["Use the id returned when the entry was added".to_string()],
        ))
    })
}

// ===== Experience =====

pub async fn add_experience_handler(store: &State<SessionStore>, id: &str) -> HandlerResult {
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.experience = experience::add(&cv.experience);
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}

pub async fn update_experience_handler(
    store: &State<SessionStore>,
    id: &str,
    entry_id: &str,
    field: Json<ExperienceField>,
) -> HandlerResult {
    let entry_id = parse_entry_id(entry_id)?;
    let field = field.into_inner();

    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.experience = experience::update(&cv.experience, entry_id, field.clone());
        next
    })
    .await?;

    let mut notices = Vec::new();
    if let Some(exp) = updated.experience.iter().find(|e| e.id == entry_id) {
        Notice::from_validation(
            &validate_experience_span(&exp.start_date, &exp.end_date, exp.current),
            &mut notices,
        );
    }
    Ok(Json(RecordResponse::with_notices(updated, notices)))
}

pub async fn remove_experience_handler(
    store: &State<SessionStore>,
    id: &str,
    entry_id: &str,
) -> HandlerResult {
    let entry_id = parse_entry_id(entry_id)?;
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.experience = experience::remove(&cv.experience, entry_id);
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}

pub async fn add_achievement_handler(
    store: &State<SessionStore>,
    id: &str,
    entry_id: &str,
) -> HandlerResult {
    let entry_id = parse_entry_id(entry_id)?;
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.experience = experience::add_achievement(&cv.experience, entry_id);
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}

#[derive(rocket::serde::Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct AchievementUpdate {
    pub value: String,
}

pub async fn update_achievement_handler(
    store: &State<SessionStore>,
    id: &str,
    entry_id: &str,
    index: usize,
    body: Json<AchievementUpdate>,
) -> HandlerResult {
    let entry_id = parse_entry_id(entry_id)?;
    let value = body.into_inner().value;
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.experience = experience::update_achievement(&cv.experience, entry_id, index, value.clone());
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}

pub async fn remove_achievement_handler(
    store: &State<SessionStore>,
    id: &str,
    entry_id: &str,
    index: usize,
) -> HandlerResult {
    let entry_id = parse_entry_id(entry_id)?;
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.experience = experience::remove_achievement(&cv.experience, entry_id, index);
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}

// ===== Education =====

pub async fn add_education_handler(store: &State<SessionStore>, id: &str) -> HandlerResult {
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.education = education::add(&cv.education);
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}

pub async fn update_education_handler(
    store: &State<SessionStore>,
    id: &str,
    entry_id: &str,
    field: Json<EducationField>,
) -> HandlerResult {
    let entry_id = parse_entry_id(entry_id)?;
    let field = field.into_inner();

    let mut notices = Vec::new();
    if let EducationField::StartYear(v) | EducationField::GraduationYear(v) = &field {
        Notice::from_validation(&validate_year(v), &mut notices);
    }

    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.education = education::update(&cv.education, entry_id, field.clone());
        next
    })
    .await?;

    if let Some(edu) = updated.education.iter().find(|e| e.id == entry_id) {
        Notice::from_validation(
            &validate_education_span(
                edu.start_year.as_deref().unwrap_or(""),
                &edu.graduation_year,
            ),
            &mut notices,
        );
    }
    Ok(Json(RecordResponse::with_notices(updated, notices)))
}

pub async fn remove_education_handler(
    store: &State<SessionStore>,
    id: &str,
    entry_id: &str,
) -> HandlerResult {
    let entry_id = parse_entry_id(entry_id)?;
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.education = education::remove(&cv.education, entry_id);
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}

// ===== Skills =====

fn parse_category(raw: &str) -> Result<SkillCategory, Json<ErrorResponse>> {
    raw.parse().map_err(|_| {
        Json(ErrorResponse::new(
            format!("Unknown skill category: {}", raw),
            "UNKNOWN_CATEGORY".to_string(),
            vec!["Use 'technical' or 'soft'".to_string()],
        ))
    })
}

pub async fn add_skill_handler(
    store: &State<SessionStore>,
    id: &str,
    category: &str,
) -> HandlerResult {
    let category = parse_category(category)?;
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.skills = skills::add_skill(&cv.skills, category);
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}

#[derive(rocket::serde::Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct SkillUpdate {
    pub value: String,
}

pub async fn update_skill_handler(
    store: &State<SessionStore>,
    id: &str,
    category: &str,
    index: usize,
    body: Json<SkillUpdate>,
) -> HandlerResult {
    let category = parse_category(category)?;
    let value = body.into_inner().value;
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.skills = skills::update_skill(&cv.skills, category, index, value.clone());
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}

pub async fn remove_skill_handler(
    store: &State<SessionStore>,
    id: &str,
    category: &str,
    index: usize,
) -> HandlerResult {
    let category = parse_category(category)?;
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.skills = skills::remove_skill(&cv.skills, category, index);
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}

pub async fn add_language_handler(store: &State<SessionStore>, id: &str) -> HandlerResult {
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.skills = skills::add_language(&cv.skills);
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}

pub async fn update_language_handler(
    store: &State<SessionStore>,
    id: &str,
    index: usize,
    field: Json<LanguageField>,
) -> HandlerResult {
    let field = field.into_inner();
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.skills = skills::update_language(&cv.skills, index, field.clone());
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}

pub async fn remove_language_handler(
    store: &State<SessionStore>,
    id: &str,
    index: usize,
) -> HandlerResult {
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.skills = skills::remove_language(&cv.skills, index);
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}

pub async fn add_certification_handler(store: &State<SessionStore>, id: &str) -> HandlerResult {
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.skills = skills::add_certification(&cv.skills);
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}

pub async fn update_certification_handler(
    store: &State<SessionStore>,
    id: &str,
    index: usize,
    field: Json<CertificationField>,
) -> HandlerResult {
    let field = field.into_inner();

    let mut notices = Vec::new();
    if let CertificationField::Link(link) = &field {
        Notice::from_validation(&validate_url(link), &mut notices);
    }

    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.skills = skills::update_certification(&cv.skills, index, field.clone());
        next
    })
    .await?;
    Ok(Json(RecordResponse::with_notices(updated, notices)))
}

pub async fn remove_certification_handler(
    store: &State<SessionStore>,
    id: &str,
    index: usize,
) -> HandlerResult {
    let updated = apply_edit(store, id, |cv| {
        let mut next = cv.clone();
        next.skills = skills::remove_certification(&cv.skills, index);
        next
    })
    .await?;
    Ok(Json(RecordResponse::new(updated)))
}
