// src/render/styles.rs
//! Template identifiers and their style configurations. The styles are
//! plain data: the renderer's field-selection logic never branches on
//! the template.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
    Dark,
    Gradient,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        Self::Modern,
        Self::Classic,
        Self::Minimal,
        Self::Creative,
        Self::Dark,
        Self::Gradient,
    ];

    /// Unknown names fall back to the default "modern" configuration.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "classic" => Self::Classic,
            "minimal" => Self::Minimal,
            "creative" => Self::Creative,
            "dark" => Self::Dark,
            "gradient" => Self::Gradient,
            _ => Self::Modern,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Minimal => "minimal",
            Self::Creative => "creative",
            Self::Dark => "dark",
            Self::Gradient => "gradient",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Modern => "Gradient header with side-by-side profile",
            Self::Classic => "Dark banner, centered profile",
            Self::Minimal => "Plain typographic layout",
            Self::Creative => "Colored panels with rounded sections",
            Self::Dark => "Dark background throughout",
            Self::Gradient => "Teal-to-blue accent gradient",
        }
    }
}

/// Where the profile picture sits relative to the name block.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProfileLayout {
    Beside,
    Centered,
    TrailingEdge,
}

/// Inline CSS fragments applied per document region. Cosmetic only.
#[derive(Debug, Clone, Copy)]
pub struct TemplateStyle {
    pub container: &'static str,
    pub header: &'static str,
    pub section: &'static str,
    pub accent: &'static str,
    pub body_text: &'static str,
    pub profile_layout: ProfileLayout,
}

pub fn style_for(id: TemplateId) -> &'static TemplateStyle {
    match id {
        TemplateId::Modern => &MODERN,
        TemplateId::Classic => &CLASSIC,
        TemplateId::Minimal => &MINIMAL,
        TemplateId::Creative => &CREATIVE,
        TemplateId::Dark => &DARK,
        TemplateId::Gradient => &GRADIENT,
    }
}

static MODERN: TemplateStyle = TemplateStyle {
    container: "background:#ffffff;",
    header: "background:linear-gradient(90deg,#2563eb,#9333ea);color:#ffffff;",
    section: "border-left:4px solid #3b82f6;padding-left:16px;",
    accent: "color:#2563eb;",
    body_text: "color:#374151;",
    profile_layout: ProfileLayout::Beside,
};

static CLASSIC: TemplateStyle = TemplateStyle {
    container: "background:#ffffff;",
    header: "background:#111827;color:#ffffff;text-align:center;",
    section: "border-bottom:2px solid #e5e7eb;padding-bottom:8px;",
    accent: "color:#374151;",
    body_text: "color:#374151;",
    profile_layout: ProfileLayout::Centered,
};

static MINIMAL: TemplateStyle = TemplateStyle {
    container: "background:#ffffff;",
    header: "background:#ffffff;color:#111827;border-bottom:2px solid #111827;",
    section: "margin-bottom:24px;",
    accent: "color:#111827;",
    body_text: "color:#374151;",
    profile_layout: ProfileLayout::TrailingEdge,
};

static CREATIVE: TemplateStyle = TemplateStyle {
    container: "background:linear-gradient(135deg,#faf5ff,#fdf2f8);",
    header: "background:linear-gradient(90deg,#9333ea,#db2777);color:#ffffff;",
    section: "border-left:4px solid #a855f7;padding:12px 16px;background:#ffffff;\
              border-radius:0 8px 8px 0;margin-bottom:16px;",
    accent: "color:#9333ea;",
    body_text: "color:#374151;",
    profile_layout: ProfileLayout::Beside,
};

static DARK: TemplateStyle = TemplateStyle {
    container: "background:#111827;color:#e5e7eb;",
    header: "background:#1f2937;color:#f9fafb;",
    section: "border-left:4px solid #4b5563;padding-left:16px;",
    accent: "color:#60a5fa;",
    body_text: "color:#d1d5db;",
    profile_layout: ProfileLayout::Beside,
};

static GRADIENT: TemplateStyle = TemplateStyle {
    container: "background:linear-gradient(135deg,#eff6ff,#faf5ff);",
    header: "background:linear-gradient(90deg,#0d9488,#2563eb);color:#ffffff;",
    section: "border-left:4px solid #14b8a6;padding-left:16px;",
    accent: "color:#0d9488;",
    body_text: "color:#374151;",
    profile_layout: ProfileLayout::Beside,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_template_falls_back_to_modern() {
        assert_eq!(TemplateId::from_name("brutalist"), TemplateId::Modern);
        assert_eq!(TemplateId::from_name(""), TemplateId::Modern);
        assert_eq!(TemplateId::from_name("  Classic "), TemplateId::Classic);
    }

    #[test]
    fn every_template_has_a_style() {
        for id in TemplateId::ALL {
            let style = style_for(id);
            assert!(!style.header.is_empty());
            assert!(!style.accent.is_empty());
        }
    }
}
