// src/editor/education.rs

use serde::Deserialize;
use uuid::Uuid;

use crate::types::Education;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum EducationField {
    Degree(String),
    Institution(String),
    StartYear(String),
    GraduationYear(String),
    Gpa(String),
    Honors(String),
}

pub fn add(items: &[Education]) -> Vec<Education> {
    let mut next = items.to_vec();
    next.push(Education::new());
    next
}

pub fn update(items: &[Education], id: Uuid, field: EducationField) -> Vec<Education> {
    items
        .iter()
        .map(|edu| {
            if edu.id != id {
                return edu.clone();
            }
            let mut edu = edu.clone();
            match field.clone() {
                EducationField::Degree(v) => edu.degree = v,
                EducationField::Institution(v) => edu.institution = v,
                EducationField::StartYear(v) => edu.start_year = none_if_empty(v),
                EducationField::GraduationYear(v) => edu.graduation_year = v,
                EducationField::Gpa(v) => edu.gpa = none_if_empty(v),
                EducationField::Honors(v) => edu.honors = none_if_empty(v),
            }
            edu
        })
        .collect()
}

pub fn remove(items: &[Education], id: Uuid) -> Vec<Education> {
    items.iter().filter(|edu| edu.id != id).cloned().collect()
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_remove_restores_prior_state() {
        let mut before = add(&[]);
        before = update(&before, before[0].id, EducationField::Degree("BSc".into()));
        let after = add(&before);
        let added_id = after.last().unwrap().id;
        assert_eq!(remove(&after, added_id), before);
    }

    #[test]
    fn optional_fields_clear_on_empty_input() {
        let mut items = add(&[]);
        let id = items[0].id;
        items = update(&items, id, EducationField::Gpa("3.8/4.0".into()));
        assert_eq!(items[0].gpa.as_deref(), Some("3.8/4.0"));
        items = update(&items, id, EducationField::Gpa(String::new()));
        assert_eq!(items[0].gpa, None);
    }

    #[test]
    fn update_leaves_siblings_untouched() {
        let mut items = add(&add(&[]));
        let second = items[1].id;
        items = update(&items, second, EducationField::Institution("MIT".into()));
        assert_eq!(items[0].institution, "");
        assert_eq!(items[1].institution, "MIT");
    }
}
