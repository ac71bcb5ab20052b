// src/editor/personal.rs

use serde::Deserialize;

use crate::types::PersonalInfo;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum PersonalField {
    FullName(String),
    Email(String),
    Phone(String),
    Location(String),
    Linkedin(String),
    Website(String),
    Summary(String),
}

/// Apply one field change, producing a new `PersonalInfo`.
pub fn apply(info: &PersonalInfo, field: PersonalField) -> PersonalInfo {
    let mut next = info.clone();
    match field {
        PersonalField::FullName(v) => next.full_name = v,
        PersonalField::Email(v) => next.email = v,
        PersonalField::Phone(v) => next.phone = v,
        PersonalField::Location(v) => next.location = v,
        PersonalField::Linkedin(v) => next.linkedin = v,
        PersonalField::Website(v) => {
            next.website = if v.is_empty() { None } else { Some(v) };
        }
        PersonalField::Summary(v) => next.summary = v,
    }
    next
}

pub fn set_profile_picture(info: &PersonalInfo, data_uri: String) -> PersonalInfo {
    let mut next = info.clone();
    next.profile_picture = Some(data_uri);
    next
}

pub fn clear_profile_picture(info: &PersonalInfo) -> PersonalInfo {
    let mut next = info.clone();
    next.profile_picture = None;
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_changes_only_the_named_field() {
        let base = PersonalInfo {
            email: "ada@example.com".into(),
            ..Default::default()
        };
        let next = apply(&base, PersonalField::FullName("Ada Lovelace".into()));
        assert_eq!(next.full_name, "Ada Lovelace");
        assert_eq!(next.email, "ada@example.com");
    }

    #[test]
    fn empty_website_clears_the_option() {
        let base = apply(
            &PersonalInfo::default(),
            PersonalField::Website("example.com".into()),
        );
        assert_eq!(base.website.as_deref(), Some("example.com"));
        let next = apply(&base, PersonalField::Website(String::new()));
        assert_eq!(next.website, None);
    }

    #[test]
    fn picture_set_and_clear() {
        let with = set_profile_picture(&PersonalInfo::default(), "data:image/png;base64,AA".into());
        assert!(with.profile_picture.is_some());
        let without = clear_profile_picture(&with);
        assert_eq!(without.profile_picture, None);
    }
}
