// src/editor/skills.rs
//! Skills editor: flat technical/soft lists plus languages and
//! certifications. These lists are index-addressed (they have no ids);
//! out-of-range indices are no-ops.

use serde::Deserialize;
use std::str::FromStr;

use crate::types::{Certification, LanguageLevel, LanguageSkill, Skills};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "technical" => Ok(Self::Technical),
            "soft" => Ok(Self::Soft),
            other => Err(format!("Unknown skill category: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum LanguageField {
    Language(String),
    Level(LanguageLevel),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum CertificationField {
    Name(String),
    Link(String),
}

pub fn add_skill(skills: &Skills, category: SkillCategory) -> Skills {
    let mut next = skills.clone();
    list_mut(&mut next, category).push(String::new());
    next
}

pub fn update_skill(skills: &Skills, category: SkillCategory, index: usize, value: String) -> Skills {
    let mut next = skills.clone();
    if let Some(slot) = list_mut(&mut next, category).get_mut(index) {
        *slot = value;
    }
    next
}

pub fn remove_skill(skills: &Skills, category: SkillCategory, index: usize) -> Skills {
    let mut next = skills.clone();
    let list = list_mut(&mut next, category);
    if index < list.len() {
        list.remove(index);
    }
    next
}

pub fn add_language(skills: &Skills) -> Skills {
    let mut next = skills.clone();
    next.languages.push(LanguageSkill::default());
    next
}

pub fn update_language(skills: &Skills, index: usize, field: LanguageField) -> Skills {
    let mut next = skills.clone();
    if let Some(entry) = next.languages.get_mut(index) {
        match field {
            LanguageField::Language(v) => entry.language = v,
            LanguageField::Level(v) => entry.level = Some(v),
        }
    }
    next
}

pub fn remove_language(skills: &Skills, index: usize) -> Skills {
    let mut next = skills.clone();
    if index < next.languages.len() {
        next.languages.remove(index);
    }
    next
}

pub fn add_certification(skills: &Skills) -> Skills {
    let mut next = skills.clone();
    next.certifications.push(Certification::default());
    next
}

pub fn update_certification(skills: &Skills, index: usize, field: CertificationField) -> Skills {
    let mut next = skills.clone();
    if let Some(entry) = next.certifications.get_mut(index) {
        match field {
            CertificationField::Name(v) => entry.name = v,
            CertificationField::Link(v) => {
                entry.link = if v.is_empty() { None } else { Some(v) };
            }
        }
    }
    next
}

pub fn remove_certification(skills: &Skills, index: usize) -> Skills {
    let mut next = skills.clone();
    if index < next.certifications.len() {
        next.certifications.remove(index);
    }
    next
}

fn list_mut(skills: &mut Skills, category: SkillCategory) -> &mut Vec<String> {
    match category {
        SkillCategory::Technical => &mut skills.technical,
        SkillCategory::Soft => &mut skills.soft,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_add_update_remove_round_trip() {
        let base = Skills::default();
        let with = add_skill(&base, SkillCategory::Technical);
        let with = update_skill(&with, SkillCategory::Technical, 0, "Rust".into());
        assert_eq!(with.technical, vec!["Rust".to_string()]);
        assert!(with.soft.is_empty());
        let back = remove_skill(&with, SkillCategory::Technical, 0);
        assert_eq!(back, base);
    }

    #[test]
    fn out_of_range_index_is_noop() {
        let skills = add_skill(&Skills::default(), SkillCategory::Soft);
        let same = update_skill(&skills, SkillCategory::Soft, 5, "x".into());
        assert_eq!(same, skills);
        let same = remove_skill(&skills, SkillCategory::Soft, 5);
        assert_eq!(same, skills);
    }

    #[test]
    fn language_level_is_constrained_by_type() {
        let skills = add_language(&Skills::default());
        let skills = update_language(&skills, 0, LanguageField::Language("French".into()));
        let skills = update_language(&skills, 0, LanguageField::Level(LanguageLevel::Fluent));
        assert_eq!(skills.languages[0].language, "French");
        assert_eq!(skills.languages[0].level, Some(LanguageLevel::Fluent));
    }

    #[test]
    fn certification_link_clears_on_empty() {
        let skills = add_certification(&Skills::default());
        let skills = update_certification(&skills, 0, CertificationField::Name("CKA".into()));
        let skills =
            update_certification(&skills, 0, CertificationField::Link("cncf.io/cka".into()));
        assert_eq!(skills.certifications[0].link.as_deref(), Some("cncf.io/cka"));
        let skills = update_certification(&skills, 0, CertificationField::Link(String::new()));
        assert_eq!(skills.certifications[0].link, None);
    }
}
