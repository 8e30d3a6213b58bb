//! Alias resolution — maps inconsistently-keyed quiz answers onto canonical fields.
//!
//! A field can arrive under several historical key names. The canonical key wins
//! when it holds a truthy value; otherwise the first truthy alias (in the fixed
//! order below) is used. Falsy values are never stored.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// Canonical answer fields, in summary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Challenge,
    Applications,
    ResumeStrategy,
    Linkedin,
    Interviews,
    Urgency,
    Experience,
    Salary,
    Applying,
    EmotionalState,
    CoachingExperience,
    FullName,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::Challenge,
        Field::Applications,
        Field::ResumeStrategy,
        Field::Linkedin,
        Field::Interviews,
        Field::Urgency,
        Field::Experience,
        Field::Salary,
        Field::Applying,
        Field::EmotionalState,
        Field::CoachingExperience,
        Field::FullName,
        Field::Email,
        Field::Phone,
    ];

    /// The canonical key this field is stored under.
    pub fn key(self) -> &'static str {
        match self {
            Field::Challenge => "challenge",
            Field::Applications => "applications",
            Field::ResumeStrategy => "resume_strategy",
            Field::Linkedin => "linkedin",
            Field::Interviews => "interviews",
            Field::Urgency => "urgency",
            Field::Experience => "experience",
            Field::Salary => "salary",
            Field::Applying => "applying",
            Field::EmotionalState => "emotional_state",
            Field::CoachingExperience => "coaching_experience",
            Field::FullName => "full_name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    /// Historical key names, in precedence order.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Challenge => &["primary_challenge"],
            Field::Applications => &["application_volume"],
            Field::ResumeStrategy => &["resumeStrategy"],
            Field::Linkedin => &["linkedin_presence"],
            Field::Interviews => &["interview_count"],
            Field::Urgency => &["timeline", "timeline_goal"],
            Field::Experience => &["career_stage", "careerStage"],
            Field::Salary => &[],
            Field::Applying => &["application_channel"],
            Field::EmotionalState => &["emotionalState"],
            Field::CoachingExperience => &["coachingExperience"],
            Field::FullName => &["fullName", "name"],
            Field::Email => &[],
            Field::Phone => &[],
        }
    }
}

/// JavaScript-style truthiness: null, false, "", 0 and NaN are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Canonical answer record. Only truthy values are ever stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnswerRecord {
    values: BTreeMap<Field, Value>,
}

impl AnswerRecord {
    pub fn get(&self, field: Field) -> Option<&Value> {
        self.values.get(&field)
    }

    /// Scalar value rendered as text. Lists and objects have no text form.
    pub fn text(&self, field: Field) -> Option<String> {
        match self.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Multi-select answers. A lone string counts as a one-element list.
    pub fn list(&self, field: Field) -> Vec<String> {
        match self.get(field) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Some(Value::String(s)) => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copies fields from `other` that this record does not hold yet.
    pub fn fill_missing(&mut self, other: AnswerRecord) {
        for (field, value) in other.values {
            self.values.entry(field).or_insert(value);
        }
    }
}

/// Resolves every canonical field from `raw`, returning a new record.
pub fn normalize(raw: &Map<String, Value>) -> AnswerRecord {
    let mut values = BTreeMap::new();

    for field in Field::ALL {
        let resolved = std::iter::once(field.key())
            .chain(field.aliases().iter().copied())
            .filter_map(|key| raw.get(key))
            .find(|value| is_truthy(value));

        if let Some(value) = resolved {
            values.insert(field, value.clone());
        }
    }

    AnswerRecord { values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_canonical_key_preferred_over_alias() {
        let record = normalize(&raw(json!({
            "resume_strategy": "same",
            "resumeStrategy": "tailor_ats"
        })));
        assert_eq!(record.text(Field::ResumeStrategy).as_deref(), Some("same"));
    }

    #[test]
    fn test_alias_used_when_canonical_missing() {
        let record = normalize(&raw(json!({ "application_volume": "150+" })));
        assert_eq!(record.text(Field::Applications).as_deref(), Some("150+"));
    }

    #[test]
    fn test_empty_canonical_never_hides_populated_alias() {
        let record = normalize(&raw(json!({
            "linkedin": "",
            "linkedin_presence": "under100"
        })));
        assert_eq!(record.text(Field::Linkedin).as_deref(), Some("under100"));

        let record = normalize(&raw(json!({
            "interviews": null,
            "interview_count": "3-5"
        })));
        assert_eq!(record.text(Field::Interviews).as_deref(), Some("3-5"));
    }

    #[test]
    fn test_alias_precedence_is_fixed() {
        let record = normalize(&raw(json!({
            "timeline_goal": "3-6",
            "timeline": "asap"
        })));
        assert_eq!(record.text(Field::Urgency).as_deref(), Some("asap"));

        let record = normalize(&raw(json!({
            "careerStage": "senior",
            "career_stage": "mid"
        })));
        assert_eq!(record.text(Field::Experience).as_deref(), Some("mid"));
    }

    #[test]
    fn test_falsy_values_are_omitted_not_stored() {
        let record = normalize(&raw(json!({
            "challenge": "",
            "salary": null,
            "email": false,
            "phone": 0
        })));
        assert!(record.is_empty(), "falsy values must be omitted: {record:?}");
        assert!(record.get(Field::Challenge).is_none());
    }

    #[test]
    fn test_unknown_values_pass_through_unchanged() {
        let record = normalize(&raw(json!({ "linkedin": "millions" })));
        assert_eq!(record.text(Field::Linkedin).as_deref(), Some("millions"));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = raw(json!({ "resumeStrategy": "tweaks", "extra": 1 }));
        let before = input.clone();
        let _ = normalize(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_unrelated_keys_are_dropped() {
        let record = normalize(&raw(json!({ "favourite_colour": "blue" })));
        assert!(record.is_empty());
    }

    #[test]
    fn test_multi_select_list() {
        let record = normalize(&raw(json!({
            "emotional_state": ["stressed", "determined", ""]
        })));
        assert_eq!(
            record.list(Field::EmotionalState),
            vec!["stressed".to_string(), "determined".to_string()]
        );
        assert!(record.text(Field::EmotionalState).is_none());
    }

    #[test]
    fn test_numbers_render_as_text() {
        let record = normalize(&raw(json!({ "applications": 25 })));
        assert_eq!(record.text(Field::Applications).as_deref(), Some("25"));
    }

    #[test]
    fn test_record_serializes_with_canonical_keys() {
        let record = normalize(&raw(json!({
            "resumeStrategy": "tweaks",
            "fullName": "Asha Rao"
        })));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["resume_strategy"], "tweaks");
        assert_eq!(value["full_name"], "Asha Rao");
    }

    #[test]
    fn test_fill_missing_keeps_existing_values() {
        let mut record = normalize(&raw(json!({ "linkedin": "1000+" })));
        record.fill_missing(normalize(&raw(json!({
            "linkedin": "under100",
            "interviews": "none"
        }))));
        assert_eq!(record.text(Field::Linkedin).as_deref(), Some("1000+"));
        assert_eq!(record.text(Field::Interviews).as_deref(), Some("none"));
    }
}
