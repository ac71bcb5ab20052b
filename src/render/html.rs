// src/render/html.rs
//! HTML document builder. Sections are emitted only when their data is
//! non-empty; an empty record renders just the header block.

use chrono::NaiveDate;

use crate::types::{CvData, Education, Experience};
use crate::validators::{parse_year_month, sanitize_url};

use super::styles::{style_for, ProfileLayout, TemplateId};

/// Render the record to a standalone HTML document with the selected
/// template's style configuration.
pub fn render_html(data: &CvData, template: TemplateId) -> String {
    let style = style_for(template);
    let mut doc = String::new();

    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    doc.push_str(&format!(
        "<title>CV - {}</title>\n",
        escape_html(display_name(data))
    ));
    doc.push_str(
        "<style>body{margin:0;font-family:Arial,Helvetica,sans-serif;font-size:14px;}\
         h1,h2,h3,h4{margin:0 0 8px 0;}ul{margin:4px 0;padding-left:20px;}\
         @media print{body{margin:0;}}</style>\n",
    );
    doc.push_str("</head>\n<body>\n");

    doc.push_str(&format!(
        "<div class=\"cv cv--{}\" style=\"min-height:800px;{}\">\n",
        template.name(),
        style.container
    ));

    push_header(&mut doc, data, style.header, style.profile_layout);

    doc.push_str("<div style=\"padding:24px;\">\n");
    push_summary(&mut doc, data, style.section, style.accent, style.body_text);
    push_experience(&mut doc, data, style.section, style.accent, style.body_text);
    push_education(&mut doc, data, style.section, style.accent, style.body_text);
    push_skills(&mut doc, data, style.section, style.accent, style.body_text);
    push_languages_and_certifications(&mut doc, data, style.section, style.accent, style.body_text);
    doc.push_str("</div>\n</div>\n</body>\n</html>\n");

    doc
}

fn display_name(data: &CvData) -> &str {
    let name = data.personal_info.full_name.trim();
    if name.is_empty() {
        "Your Name"
    } else {
        name
    }
}

fn push_header(doc: &mut String, data: &CvData, header_style: &str, layout: ProfileLayout) {
    let info = &data.personal_info;

    doc.push_str(&format!(
        "<header style=\"padding:24px;{}\">\n",
        header_style
    ));

    let picture = info.profile_picture.as_deref().filter(|p| !p.is_empty());
    let picture_html = picture.map(|src| {
        let size = if layout == ProfileLayout::Centered {
            128
        } else {
            96
        };
        format!(
            "<img src=\"{}\" alt=\"Profile\" style=\"width:{size}px;height:{size}px;\
             border-radius:50%;object-fit:cover;\">\n",
            escape_html(src)
        )
    });

    // Layout decides where the picture sits; absence of a picture emits
    // nothing, not an empty placeholder.
    match layout {
        ProfileLayout::Beside => {
            doc.push_str("<div style=\"display:flex;align-items:flex-start;gap:24px;\">\n");
            if let Some(img) = &picture_html {
                doc.push_str(img);
            }
            doc.push_str("<div>\n");
            push_name_and_contacts(doc, data);
            doc.push_str("</div>\n</div>\n");
        }
        ProfileLayout::Centered => {
            if let Some(img) = &picture_html {
                doc.push_str(img);
            }
            push_name_and_contacts(doc, data);
        }
        ProfileLayout::TrailingEdge => {
            doc.push_str(
                "<div style=\"display:flex;align-items:center;justify-content:space-between;\">\n",
            );
            doc.push_str("<div>\n");
            push_name_and_contacts(doc, data);
            doc.push_str("</div>\n");
            if let Some(img) = &picture_html {
                doc.push_str(img);
            }
            doc.push_str("</div>\n");
        }
    }

    doc.push_str("</header>\n");
}

fn push_name_and_contacts(doc: &mut String, data: &CvData) {
    let info = &data.personal_info;

    doc.push_str(&format!(
        "<h1 style=\"font-size:28px;\">{}</h1>\n",
        escape_html(display_name(data))
    ));

    let mut contacts: Vec<String> = Vec::new();
    for value in [&info.email, &info.phone, &info.location, &info.linkedin] {
        if !value.trim().is_empty() {
            contacts.push(escape_html(value));
        }
    }
    if let Some(website) = info.website.as_deref() {
        if !website.trim().is_empty() {
            contacts.push(escape_html(website));
        }
    }

    if !contacts.is_empty() {
        doc.push_str(&format!(
            "<div style=\"display:flex;flex-wrap:wrap;gap:16px;font-size:12px;opacity:.9;\">{}</div>\n",
            contacts
                .iter()
                .map(|c| format!("<span>{}</span>", c))
                .collect::<Vec<_>>()
                .join("")
        ));
    }
}

fn push_summary(doc: &mut String, data: &CvData, section: &str, accent: &str, body: &str) {
    let summary = data.personal_info.summary.trim();
    if summary.is_empty() {
        return;
    }
    push_section_heading(doc, section, accent, "PROFESSIONAL SUMMARY");
    doc.push_str(&format!(
        "<p style=\"line-height:1.6;{}\">{}</p>\n</section>\n",
        body,
        escape_html(summary)
    ));
}

fn push_experience(doc: &mut String, data: &CvData, section: &str, accent: &str, body: &str) {
    if data.experience.is_empty() {
        return;
    }
    push_section_heading(doc, section, accent, "PROFESSIONAL EXPERIENCE");

    for exp in &data.experience {
        doc.push_str("<div style=\"margin-bottom:16px;\">\n");
        doc.push_str(&format!(
            "<h3>{}</h3>\n",
            escape_html(&exp.job_title)
        ));

        let mut employer = escape_html(&exp.company);
        if !exp.location.trim().is_empty() {
            employer.push_str(&format!(" \u{2022} {}", escape_html(&exp.location)));
        }
        doc.push_str(&format!(
            "<p style=\"font-weight:600;{}\">{}</p>\n",
            accent, employer
        ));

        doc.push_str(&format!(
            "<p style=\"font-size:12px;{}\">{}</p>\n",
            body,
            escape_html(&experience_date_range(exp))
        ));

        let achievements: Vec<&String> = exp
            .achievements
            .iter()
            .filter(|a| !a.trim().is_empty())
            .collect();
        if !achievements.is_empty() {
            doc.push_str(&format!("<ul style=\"{}\">\n", body));
            for achievement in achievements {
                doc.push_str(&format!("<li>{}</li>\n", escape_html(achievement)));
            }
            doc.push_str("</ul>\n");
        }
        doc.push_str("</div>\n");
    }
    doc.push_str("</section>\n");
}

fn push_education(doc: &mut String, data: &CvData, section: &str, accent: &str, body: &str) {
    if data.education.is_empty() {
        return;
    }
    push_section_heading(doc, section, accent, "EDUCATION");

    for edu in &data.education {
        doc.push_str("<div style=\"margin-bottom:12px;\">\n");
        doc.push_str(&format!("<h3>{}</h3>\n", escape_html(&edu.degree)));
        doc.push_str(&format!(
            "<p style=\"font-weight:600;{}\">{}</p>\n",
            accent,
            escape_html(&edu.institution)
        ));

        let years = education_years(edu);
        if !years.is_empty() {
            doc.push_str(&format!(
                "<p style=\"font-size:12px;{}\">{}</p>\n",
                body,
                escape_html(&years)
            ));
        }

        let mut extras: Vec<String> = Vec::new();
        if let Some(gpa) = edu.gpa.as_deref().filter(|g| !g.trim().is_empty()) {
            extras.push(format!("GPA: {}", escape_html(gpa)));
        }
        if let Some(honors) = edu.honors.as_deref().filter(|h| !h.trim().is_empty()) {
            extras.push(escape_html(honors));
        }
        if !extras.is_empty() {
            doc.push_str(&format!(
                "<p style=\"font-size:12px;{}\">{}</p>\n",
                body,
                extras.join(" \u{2022} ")
            ));
        }
        doc.push_str("</div>\n");
    }
    doc.push_str("</section>\n");
}

fn push_skills(doc: &mut String, data: &CvData, section: &str, accent: &str, body: &str) {
    let skills = &data.skills;
    if skills.technical.is_empty() && skills.soft.is_empty() {
        return;
    }
    push_section_heading(doc, section, accent, "SKILLS");

    if !skills.technical.is_empty() {
        doc.push_str("<h4>Technical Skills:</h4>\n");
        doc.push_str(&format!(
            "<p style=\"{}\">{}</p>\n",
            body,
            joined_skill_line(&skills.technical)
        ));
    }
    if !skills.soft.is_empty() {
        doc.push_str("<h4>Core Competencies:</h4>\n");
        doc.push_str(&format!(
            "<p style=\"{}\">{}</p>\n",
            body,
            joined_skill_line(&skills.soft)
        ));
    }
    doc.push_str("</section>\n");
}

fn push_languages_and_certifications(
    doc: &mut String,
    data: &CvData,
    section: &str,
    accent: &str,
    body: &str,
) {
    let skills = &data.skills;

    if !skills.languages.is_empty() {
        push_section_heading(doc, section, accent, "LANGUAGES");
        for lang in &skills.languages {
            let level = lang.level.map(|l| l.as_str()).unwrap_or("");
            doc.push_str(&format!(
                "<div style=\"display:flex;justify-content:space-between;max-width:320px;{}\">\
                 <span>{}</span><span>{}</span></div>\n",
                body,
                escape_html(&lang.language),
                level
            ));
        }
        doc.push_str("</section>\n");
    }

    if !skills.certifications.is_empty() {
        push_section_heading(doc, section, accent, "CERTIFICATIONS");
        doc.push_str(&format!("<ul style=\"{}\">\n", body));
        for cert in &skills.certifications {
            match cert.link.as_deref().filter(|l| !l.trim().is_empty()) {
                Some(link) => doc.push_str(&format!(
                    "<li><a href=\"{}\" style=\"{}\">{}</a></li>\n",
                    escape_html(&sanitize_url(link)),
                    accent,
                    escape_html(&cert.name)
                )),
                None => doc.push_str(&format!("<li>{}</li>\n", escape_html(&cert.name))),
            }
        }
        doc.push_str("</ul>\n</section>\n");
    }
}

fn push_section_heading(doc: &mut String, section: &str, accent: &str, title: &str) {
    doc.push_str(&format!(
        "<section style=\"margin-bottom:24px;{}\">\n<h2 style=\"font-size:17px;{}\">{}</h2>\n",
        section, accent, title
    ));
}

fn joined_skill_line(entries: &[String]) -> String {
    entries
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| escape_html(s))
        .collect::<Vec<_>>()
        .join(" \u{2022} ")
}

/// "YYYY-MM" formats as "Jan 2020". Empty input stays empty; anything
/// non-conforming comes back unchanged so user-entered dates are never
/// silently dropped.
pub fn format_year_month(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_year_month(trimmed) {
        Some(date) => format_month(date),
        None => trimmed.to_string(),
    }
}

fn format_month(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

pub fn experience_date_range(exp: &Experience) -> String {
    let start = format_year_month(&exp.start_date);
    let end = if exp.current {
        "Present".to_string()
    } else {
        format_year_month(&exp.end_date)
    };
    format!("{} - {}", start, end)
}

/// "start - graduation" when both are present, else the graduation year
/// alone.
pub fn education_years(edu: &Education) -> String {
    let grad = edu.graduation_year.trim();
    match edu.start_year.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(start) if !grad.is_empty() => format!("{} - {}", start, grad),
        _ => grad.to_string(),
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Certification, Experience, LanguageLevel, LanguageSkill};

    #[test]
    fn empty_record_renders_header_only() {
        let html = render_html(&CvData::default(), TemplateId::Modern);
        assert!(html.contains("Your Name"));
        assert!(!html.contains("<h2"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<span>"));
    }

    #[test]
    fn blank_achievements_are_filtered() {
        let mut cv = CvData::default();
        let mut exp = Experience::new();
        exp.job_title = "Engineer".into();
        exp.achievements = vec!["  ".into(), "Shipped v2".into(), String::new()];
        cv.experience.push(exp);

        let html = render_html(&cv, TemplateId::Classic);
        assert!(html.contains("<li>Shipped v2</li>"));
        assert_eq!(html.matches("<li>").count(), 1);
    }

    #[test]
    fn date_formatting_and_fallbacks() {
        assert_eq!(format_year_month("2020-01"), "Jan 2020");
        assert_eq!(format_year_month(""), "");
        assert_eq!(format_year_month("circa 2019"), "circa 2019");

        let mut exp = Experience::new();
        exp.start_date = "2020-01".into();
        exp.current = true;
        assert_eq!(experience_date_range(&exp), "Jan 2020 - Present");
    }

    #[test]
    fn education_year_range() {
        let mut edu = crate::types::Education::new();
        edu.graduation_year = "2023".into();
        assert_eq!(education_years(&edu), "2023");
        edu.start_year = Some("2019".into());
        assert_eq!(education_years(&edu), "2019 - 2023");
    }

    #[test]
    fn skills_render_as_joined_line() {
        let mut cv = CvData::default();
        cv.skills.technical = vec!["Rust".into(), "SQL".into()];
        let html = render_html(&cv, TemplateId::Minimal);
        assert!(html.contains("Rust \u{2022} SQL"));
    }

    #[test]
    fn certification_link_is_sanitized_and_anchored() {
        let mut cv = CvData::default();
        cv.skills.certifications.push(Certification {
            name: "CKA".into(),
            link: Some("javascript:alert(1)".into()),
        });
        let html = render_html(&cv, TemplateId::Modern);
        assert!(html.contains("href=\"https://alert(1)\""));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn languages_show_name_and_level() {
        let mut cv = CvData::default();
        cv.skills.languages.push(LanguageSkill {
            language: "French".into(),
            level: Some(LanguageLevel::Fluent),
        });
        let html = render_html(&cv, TemplateId::Gradient);
        assert!(html.contains("French"));
        assert!(html.contains("Fluent"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut cv = CvData::default();
        cv.personal_info.full_name = "<script>alert(1)</script>".into();
        let html = render_html(&cv, TemplateId::Dark);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn templates_share_field_selection() {
        let mut cv = CvData::default();
        cv.personal_info.summary = "Builds things.".into();
        for id in TemplateId::ALL {
            let html = render_html(&cv, id);
            assert!(html.contains("PROFESSIONAL SUMMARY"), "template {}", id.name());
        }
    }
}
