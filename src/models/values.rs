use rust_decimal::Decimal;
use std::collections::HashMap;

use super::field::{BudgetField, FieldGroup, FIELD_COUNT};
use crate::budget::{normalize_stored, parse_amount};

/// A complete set of budget amounts: every field is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetValues {
    amounts: [Decimal; FIELD_COUNT],
}

impl Default for BudgetValues {
    fn default() -> Self {
        Self {
            amounts: [Decimal::ZERO; FIELD_COUNT],
        }
    }
}

impl BudgetValues {
    /// Build from submitted form text. Unknown keys are ignored, missing
    /// fields are zero.
    pub fn from_raw(raw: &HashMap<String, String>) -> Self {
        let mut values = Self::default();
        for field in BudgetField::all() {
            if let Some(text) = raw.get(field.key()) {
                values.set(*field, parse_amount(text));
            }
        }
        values
    }

    /// Build from a stored JSON document, re-normalizing every entry.
    pub fn from_stored(doc: &serde_json::Value) -> Self {
        let mut values = Self::default();
        if let Some(map) = doc.as_object() {
            for field in BudgetField::all() {
                if let Some(v) = map.get(field.key()) {
                    values.set(*field, normalize_stored(v));
                }
            }
        }
        values
    }

    /// Storage document: field key → decimal string.
    pub fn to_stored(&self) -> serde_json::Value {
        let map = self
            .iter()
            .map(|(f, v)| (f.key().to_string(), serde_json::Value::String(v.to_string())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }

    pub fn get(&self, field: BudgetField) -> Decimal {
        self.amounts[field.index()]
    }

    pub fn set(&mut self, field: BudgetField, amount: Decimal) {
        self.amounts[field.index()] = amount;
    }

    pub fn iter(&self) -> impl Iterator<Item = (BudgetField, Decimal)> + '_ {
        BudgetField::all().iter().map(|f| (*f, self.get(*f)))
    }

    /// Sum of every field in `group`, saturating at the Decimal range.
    pub fn group_total(&self, group: FieldGroup) -> Decimal {
        group
            .fields()
            .map(|f| self.get(f))
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

impl serde::Serialize for BudgetValues {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(f, v)| (f.key(), v)))
    }
}
