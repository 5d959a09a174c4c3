//! Editable scoring-form state and submission payload building.

#[cfg(test)]
#[path = "scoring_test.rs"]
mod scoring_test;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::net::api::AnswerPayload;
use crate::net::types::{FieldType, FormItem};

/// Value held by one form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    fn initial(item: &FormItem) -> Self {
        let stored = item.answer_value();
        match item.field_type {
            FieldType::Boolean => Self::Flag(stored.is_some_and(|v| {
                v.as_bool().unwrap_or_else(|| v.as_i64().is_some_and(|n| n != 0))
            })),
            FieldType::Integer | FieldType::Text => Self::Text(match stored {
                Some(Value::String(s)) => s.clone(),
                Some(v) => v.to_string(),
                None => String::new(),
            }),
        }
    }

    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Flag(_) => "",
        }
    }

    #[must_use]
    pub fn as_flag(&self) -> bool {
        matches!(self, Self::Flag(true))
    }
}

/// In-progress answers keyed by form item id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoringDraft {
    items: Vec<FormItem>,
    values: BTreeMap<i64, FieldValue>,
}

impl ScoringDraft {
    /// Seed the draft from the backend's stored answers.
    #[must_use]
    pub fn new(items: &[FormItem]) -> Self {
        let values = items.iter().map(|item| (item.id, FieldValue::initial(item))).collect();
        Self { items: items.to_vec(), values }
    }

    #[must_use]
    pub fn items(&self) -> &[FormItem] {
        &self.items
    }

    #[must_use]
    pub fn value(&self, item_id: i64) -> Option<&FieldValue> {
        self.values.get(&item_id)
    }

    /// Replace one item's value. Unknown ids are ignored.
    pub fn set(&mut self, item_id: i64, value: FieldValue) {
        if let Some(slot) = self.values.get_mut(&item_id) {
            *slot = value;
        }
    }

    /// Build the `[{form_item_id, answer}]` submission body.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first integer item whose input does not parse.
    pub fn to_answers(&self) -> Result<Vec<AnswerPayload>, String> {
        let mut answers = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let Some(value) = self.values.get(&item.id) else {
                continue;
            };
            let answer = match (item.field_type, value) {
                (FieldType::Boolean, v) => Value::from(i64::from(v.as_flag())),
                (FieldType::Integer, v) => {
                    let raw = v.as_text().trim();
                    if raw.is_empty() {
                        continue;
                    }
                    let n: i64 = raw
                        .parse()
                        .map_err(|_| format!("{} must be a whole number.", item.label))?;
                    Value::from(n)
                }
                (FieldType::Text, v) => {
                    let raw = v.as_text();
                    if raw.trim().is_empty() {
                        continue;
                    }
                    Value::from(raw)
                }
            };
            answers.push(AnswerPayload { form_item_id: item.id, answer });
        }
        Ok(answers)
    }
}
