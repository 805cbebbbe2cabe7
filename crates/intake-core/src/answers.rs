//! The answer record and its outbound form shape.

use std::collections::BTreeMap;

use crate::catalog::Field;

/// Field name to answer text, one entry per catalog field.
///
/// Every value is a string, including the age; nothing is parsed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    values: BTreeMap<Field, String>,
}

impl Default for AnswerRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerRecord {
    /// A record with every field set to the empty string.
    pub fn new() -> Self {
        Self {
            values: Field::ALL
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Overwrite one field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// A field is satisfied when its value is non-empty.
    pub fn is_satisfied(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    pub fn is_complete(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.is_satisfied(f))
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    /// Iterate `(field, value)` in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Snapshot the record as the outbound form body.
    pub fn to_payload(&self) -> FormPayload {
        FormPayload {
            pairs: self
                .iter()
                .map(|(field, value)| (field.external_name(), value.to_string()))
                .collect(),
        }
    }
}

/// Form-encoded body: external key/value pairs in a fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    pairs: Vec<(&'static str, String)>,
}

impl FormPayload {
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}
