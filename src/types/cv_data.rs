// src/types/cv_data.rs
//! CV record schema shared by the editors, renderer and composer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Root aggregate for one editing session. Never persisted; lives in
/// memory for the session and is replaced wholesale on every edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CvData {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub summary: String,
    /// Inline-encoded image payload (data URI), set by the upload path.
    #[serde(default)]
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub id: Uuid,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// Year-month form, e.g. "2020-01".
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// When true, end_date is ignored for display and validation.
    #[serde(default)]
    pub current: bool,
    /// At least one slot is always retained by the editor.
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl Experience {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            job_title: String::new(),
            company: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            achievements: vec![String::new()],
        }
    }
}

impl Default for Experience {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    pub id: Uuid,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub start_year: Option<String>,
    #[serde(default)]
    pub graduation_year: String,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub honors: Option<String>,
}

impl Education {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            degree: String::new(),
            institution: String::new(),
            start_year: None,
            graduation_year: String::new(),
            gpa: None,
            honors: None,
        }
    }
}

impl Default for Education {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Skills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
    #[serde(default)]
    pub languages: Vec<LanguageSkill>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LanguageSkill {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub level: Option<LanguageLevel>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LanguageLevel {
    Native,
    Fluent,
    Advanced,
    Intermediate,
    Basic,
}

impl LanguageLevel {
    pub const ALL: [LanguageLevel; 5] = [
        Self::Native,
        Self::Fluent,
        Self::Advanced,
        Self::Intermediate,
        Self::Basic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "Native",
            Self::Fluent => "Fluent",
            Self::Advanced => "Advanced",
            Self::Intermediate => "Intermediate",
            Self::Basic => "Basic",
        }
    }
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "fluent" => Ok(Self::Fluent),
            "advanced" => Ok(Self::Advanced),
            "intermediate" => Ok(Self::Intermediate),
            "basic" => Ok(Self::Basic),
            other => Err(format!("Unknown language level: {}", other)),
        }
    }
}

/// Superset certification shape: plain-string inputs deserialize with
/// `link` absent rather than being coerced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Certification {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Declared in the schema but not exposed through any editor or
/// renderer; carried as inert passthrough.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_empty() {
        let cv = CvData::default();
        assert!(cv.personal_info.full_name.is_empty());
        assert!(cv.experience.is_empty());
        assert!(cv.education.is_empty());
        assert!(cv.skills.technical.is_empty());
        assert!(cv.projects.is_empty());
    }

    #[test]
    fn new_experience_keeps_one_achievement_slot() {
        let exp = Experience::new();
        assert_eq!(exp.achievements, vec![String::new()]);
        assert!(!exp.current);
    }

    #[test]
    fn older_json_without_optional_fields_deserializes() {
        let json = r#"{
            "personal_info": { "full_name": "Ada" },
            "education": [{
                "id": "6f2f7e3e-9f1b-4c4e-9a57-2f6f1f0e8a11",
                "degree": "BSc",
                "institution": "ETH",
                "graduation_year": "2019"
            }],
            "skills": { "certifications": [{ "name": "AWS SAA" }] }
        }"#;
        let cv: CvData = serde_json::from_str(json).unwrap();
        assert_eq!(cv.education[0].start_year, None);
        assert_eq!(cv.skills.certifications[0].link, None);
    }

    #[test]
    fn language_level_round_trips_from_str() {
        assert_eq!(
            "intermediate".parse::<LanguageLevel>().unwrap(),
            LanguageLevel::Intermediate
        );
        assert!("mother tongue".parse::<LanguageLevel>().is_err());
    }
}
