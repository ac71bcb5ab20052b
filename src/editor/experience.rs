// src/editor/experience.rs
//! Work-experience editor, including the achievement sub-list.

use serde::Deserialize;
use uuid::Uuid;

use crate::types::Experience;

/// One field update, tagged for the wire: `{"field": "job_title", "value": "..."}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ExperienceField {
    JobTitle(String),
    Company(String),
    Location(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
}

/// Append a fresh entry with a generated id and empty defaults.
pub fn add(items: &[Experience]) -> Vec<Experience> {
    let mut next = items.to_vec();
    next.push(Experience::new());
    next
}

/// Replace one field on the entry with the given id. Unknown ids leave
/// the list untouched.
pub fn update(items: &[Experience], id: Uuid, field: ExperienceField) -> Vec<Experience> {
    items
        .iter()
        .map(|exp| {
            if exp.id != id {
                return exp.clone();
            }
            let mut exp = exp.clone();
            match field.clone() {
                ExperienceField::JobTitle(v) => exp.job_title = v,
                ExperienceField::Company(v) => exp.company = v,
                ExperienceField::Location(v) => exp.location = v,
                ExperienceField::StartDate(v) => exp.start_date = v,
                ExperienceField::EndDate(v) => exp.end_date = v,
                ExperienceField::Current(v) => exp.current = v,
            }
            exp
        })
        .collect()
}

pub fn remove(items: &[Experience], id: Uuid) -> Vec<Experience> {
    items.iter().filter(|exp| exp.id != id).cloned().collect()
}

pub fn add_achievement(items: &[Experience], id: Uuid) -> Vec<Experience> {
    map_entry(items, id, |exp| exp.achievements.push(String::new()))
}

pub fn update_achievement(
    items: &[Experience],
    id: Uuid,
    index: usize,
    value: String,
) -> Vec<Experience> {
    map_entry(items, id, |exp| {
        if let Some(slot) = exp.achievements.get_mut(index) {
            *slot = value.clone();
        }
    })
}

/// Remove one achievement line. A no-op when it would leave zero lines:
/// the editor always retains at least one slot.
pub fn remove_achievement(items: &[Experience], id: Uuid, index: usize) -> Vec<Experience> {
    map_entry(items, id, |exp| {
        if exp.achievements.len() > 1 && index < exp.achievements.len() {
            exp.achievements.remove(index);
        }
    })
}

fn map_entry<F>(items: &[Experience], id: Uuid, mut apply: F) -> Vec<Experience>
where
    F: FnMut(&mut Experience),
{
    items
        .iter()
        .map(|exp| {
            let mut exp = exp.clone();
            if exp.id == id {
                apply(&mut exp);
            }
            exp
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Experience> {
        let mut items = add(&[]);
        items = update(
            &items,
            items[0].id,
            ExperienceField::JobTitle("Engineer".into()),
        );
        items = update(&items, items[0].id, ExperienceField::Company("Acme".into()));
        items
    }

    #[test]
    fn add_then_remove_restores_prior_state() {
        let before = sample();
        let after = add(&before);
        let added_id = after.last().unwrap().id;
        assert_eq!(remove(&after, added_id), before);
    }

    #[test]
    fn update_is_scoped_to_one_entry() {
        let mut items = add(&add(&[]));
        let first = items[0].id;
        items = update(&items, first, ExperienceField::JobTitle("Lead".into()));
        assert_eq!(items[0].job_title, "Lead");
        assert_eq!(items[1].job_title, "");
    }

    #[test]
    fn update_with_unknown_id_is_noop() {
        let items = sample();
        let same = update(&items, Uuid::new_v4(), ExperienceField::Company("X".into()));
        assert_eq!(same, items);
    }

    #[test]
    fn last_achievement_cannot_be_removed() {
        let items = sample();
        let id = items[0].id;
        let after = remove_achievement(&items, id, 0);
        assert_eq!(after[0].achievements.len(), 1);
    }

    #[test]
    fn achievement_add_update_remove() {
        let items = sample();
        let id = items[0].id;
        let items = add_achievement(&items, id);
        let items = update_achievement(&items, id, 1, "Shipped v2".into());
        assert_eq!(items[0].achievements[1], "Shipped v2");
        let items = remove_achievement(&items, id, 0);
        assert_eq!(items[0].achievements, vec!["Shipped v2".to_string()]);
    }

    #[test]
    fn field_update_deserializes_from_tagged_json() {
        let field: ExperienceField =
            serde_json::from_str(r#"{"field":"start_date","value":"2020-01"}"#).unwrap();
        assert!(matches!(field, ExperienceField::StartDate(v) if v == "2020-01"));
    }
}
