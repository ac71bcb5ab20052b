// src/cover_letter.rs
//! Deterministic cover-letter composition: CV fields plus job-posting
//! fields interpolated into a fixed narrative template. Plain text out,
//! suitable for clipboard copy or download.

use serde::Deserialize;

use crate::types::CvData;
use crate::utils::sanitize_filename;

/// Fixed vocabulary scanned against the job description, in priority
/// order; the first three matches win.
const DESCRIPTION_VOCABULARY: [&str; 8] = [
    "experience",
    "skills",
    "team",
    "project",
    "management",
    "development",
    "client",
    "strategic",
];

/// Keyword triples keyed by substring match against the job title.
const TITLE_KEYWORDS: [(&str, [&str; 3]); 5] = [
    ("developer", ["development", "coding", "technical"]),
    ("engineer", ["engineering", "problem-solving", "technical"]),
    ("manager", ["management", "leadership", "strategic"]),
    ("designer", ["design", "creativity", "user experience"]),
    ("analyst", ["analysis", "data", "insights"]),
];

const FALLBACK_KEYWORDS: [&str; 3] = ["professional", "experience", "skills"];

#[derive(Debug, Clone, Deserialize)]
pub struct LetterRequest {
    pub job_title: String,
    pub company_name: String,
    #[serde(default)]
    pub job_description: String,
}

/// Pick up to three focus keywords: scan the description against the
/// fixed vocabulary when one is given, otherwise key off the job title.
pub fn derive_keywords(job_title: &str, job_description: &str) -> Vec<&'static str> {
    if !job_description.trim().is_empty() {
        let lower = job_description.to_lowercase();
        let matches: Vec<&'static str> = DESCRIPTION_VOCABULARY
            .iter()
            .copied()
            .filter(|word| lower.contains(word))
            .take(3)
            .collect();
        if !matches.is_empty() {
            return matches;
        }
    }

    let title = job_title.to_lowercase();
    for (key, triple) in TITLE_KEYWORDS {
        if title.contains(key) {
            return triple.to_vec();
        }
    }
    FALLBACK_KEYWORDS.to_vec()
}

/// Short phrase from the first few combined technical and soft skills.
pub fn skills_phrase(data: &CvData) -> String {
    data.skills
        .technical
        .iter()
        .chain(data.skills.soft.iter())
        .filter(|s| !s.trim().is_empty())
        .take(3)
        .map(|s| s.trim().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compose the letter. Referenced CV sections that are empty drop their
/// paragraph entirely rather than rendering placeholders.
pub fn compose(data: &CvData, request: &LetterRequest) -> String {
    let mut paragraphs: Vec<String> = Vec::new();

    paragraphs.push("Dear Hiring Manager,".to_string());

    let background = if data.personal_info.summary.trim().is_empty() {
        "professional experience".to_string()
    } else {
        data.personal_info.summary.trim().to_string()
    };
    paragraphs.push(format!(
        "I am writing to express my strong interest in the {} position at {}. \
         With my background in {}, I am confident that I would be a valuable \
         addition to your team.",
        request.job_title, request.company_name, background
    ));

    if let Some(exp) = data.experience.first() {
        let highlight = exp
            .achievements
            .iter()
            .find(|a| !a.trim().is_empty())
            .map(|a| a.trim().to_string())
            .unwrap_or_else(|| {
                "successfully contributed to key projects and initiatives".to_string()
            });
        paragraphs.push(format!(
            "In my previous role as {} at {}, I {}. This experience has prepared \
             me well for the challenges and opportunities at {}.",
            exp.job_title, exp.company, highlight, request.company_name
        ));
    }

    let keywords = derive_keywords(&request.job_title, &request.job_description);
    let focus = keywords.join(", ");
    let skills = skills_phrase(data);
    let mut alignment = String::new();
    if !skills.is_empty() {
        alignment.push_str(&format!(
            "My technical skills in {} align perfectly with the requirements \
             outlined in your job posting. ",
            skills
        ));
    }
    alignment.push_str(&format!(
        "I am particularly excited about the opportunity to apply my strengths \
         in {} at {}.",
        focus, request.company_name
    ));
    paragraphs.push(alignment);

    if let Some(edu) = data.education.first() {
        paragraphs.push(format!(
            "My educational background in {} from {} has provided me with a \
             strong foundation for this role.",
            edu.degree, edu.institution
        ));
    }

    paragraphs.push(format!(
        "I would welcome the opportunity to discuss how my experience and \
         enthusiasm can contribute to {}'s continued success. Thank you for \
         considering my application.",
        request.company_name
    ));

    let signature = if data.personal_info.full_name.trim().is_empty() {
        "Sincerely,".to_string()
    } else {
        format!("Sincerely,\n{}", data.personal_info.full_name.trim())
    };
    paragraphs.push(signature);

    paragraphs.join("\n\n")
}

/// Download name for the composed letter, run through the filename
/// sanitizer.
pub fn letter_filename(request: &LetterRequest) -> String {
    let company = if request.company_name.trim().is_empty() {
        "Company"
    } else {
        request.company_name.trim()
    };
    let title = if request.job_title.trim().is_empty() {
        "Position"
    } else {
        request.job_title.trim()
    };
    format!(
        "{}.txt",
        sanitize_filename(&format!("Cover_Letter_{}_{}", company, title))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Education, Experience};

    fn request(title: &str, description: &str) -> LetterRequest {
        LetterRequest {
            job_title: title.into(),
            company_name: "Tech Corp".into(),
            job_description: description.into(),
        }
    }

    #[test]
    fn title_keywords_for_developer() {
        assert_eq!(
            derive_keywords("Frontend Developer", ""),
            vec!["development", "coding", "technical"]
        );
    }

    #[test]
    fn description_scan_keeps_vocabulary_order() {
        let desc = "We need strong management of the team and client projects.";
        assert_eq!(
            derive_keywords("Developer", desc),
            vec!["team", "project", "management"]
        );
    }

    #[test]
    fn fallback_keywords_when_nothing_matches() {
        assert_eq!(
            derive_keywords("Barista", ""),
            vec!["professional", "experience", "skills"]
        );
    }

    #[test]
    fn experience_paragraph_omitted_when_empty() {
        let cv = CvData::default();
        let letter = compose(&cv, &request("Developer", ""));
        assert!(!letter.contains("In my previous role"));
        assert!(!letter.contains("  .")); // no blank interpolations
    }

    #[test]
    fn experience_and_education_interpolated() {
        let mut cv = CvData::default();
        cv.personal_info.full_name = "Ada Lovelace".into();
        let mut exp = Experience::new();
        exp.job_title = "Engineer".into();
        exp.company = "Analytical Ltd".into();
        exp.achievements = vec!["designed the first program".into()];
        cv.experience.push(exp);
        let mut edu = Education::new();
        edu.degree = "Mathematics".into();
        edu.institution = "Home Tutoring".into();
        cv.education.push(edu);

        let letter = compose(&cv, &request("Developer", ""));
        assert!(letter.contains("In my previous role as Engineer at Analytical Ltd"));
        assert!(letter.contains("designed the first program"));
        assert!(letter.contains("Mathematics from Home Tutoring"));
        assert!(letter.ends_with("Sincerely,\nAda Lovelace"));
    }

    #[test]
    fn skills_phrase_takes_first_three() {
        let mut cv = CvData::default();
        cv.skills.technical = vec!["Rust".into(), "SQL".into()];
        cv.skills.soft = vec!["Mentoring".into(), "Writing".into()];
        assert_eq!(skills_phrase(&cv), "Rust, SQL, Mentoring");
    }

    #[test]
    fn letter_output_is_plain_text() {
        let letter = compose(&CvData::default(), &request("Developer", ""));
        assert!(!letter.contains('<'));
        assert!(letter.starts_with("Dear Hiring Manager,"));
    }

    #[test]
    fn filename_is_sanitized() {
        let name = letter_filename(&request("Staff Engineer / Lead", ""));
        assert_eq!(name, "Cover_Letter_Tech_Corp_Staff_Engineer_Lead.txt");
    }
}
