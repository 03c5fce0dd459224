//! Generic ERP record model
//!
//! A read operation against the ERP returns untyped records: maps from field
//! name to wire value. The wire format has two conventions every consumer has
//! to cope with:
//!
//! - A relational ("many-to-one") field is either a two-element array
//!   `[id, label]` or the literal boolean `false` when unset.
//! - Any optional scalar field is `false` when unset, never null or absent.
//!
//! [`Record`] wraps the raw map with total accessors that coalesce those
//! conventions into type-appropriate defaults, so entity mappers never leak a
//! `false` into a field typed as string or number.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single wire value as decoded from the ERP transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Int(i64),
    Double(f64),
    Bool(bool),
    Str(String),
    Array(Vec<FieldValue>),
    Struct(BTreeMap<String, FieldValue>),
    Nil,
}

impl FieldValue {
    /// True for the `false` literal the ERP uses to mean "unset".
    pub fn is_unset(&self) -> bool {
        matches!(self, FieldValue::Bool(false) | FieldValue::Nil)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Double(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Str(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Str(v)
    }
}

/// A resolved many-to-one reference.
///
/// `id == 0` is the sentinel for "unset on the ERP side"; [`Reference::label_or`]
/// substitutes the caller's placeholder in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub id: i64,
    pub label: String,
}

impl Reference {
    /// Placeholder label used across the dashboard for unset references.
    pub const PLACEHOLDER: &'static str = "—";

    pub fn unset() -> Self {
        Self { id: 0, label: String::new() }
    }

    pub fn is_set(&self) -> bool {
        self.id != 0
    }

    /// The label, or `placeholder` when the reference is unset.
    pub fn label_or(&self, placeholder: &str) -> String {
        if self.is_set() {
            self.label.clone()
        } else {
            placeholder.to_string()
        }
    }

    /// The label, or the dashboard-wide "—" placeholder.
    pub fn display_label(&self) -> String {
        self.label_or(Self::PLACEHOLDER)
    }
}

/// Untyped record returned by a generic read operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record(BTreeMap<String, FieldValue>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Builder-style insert, convenient for write payloads and tests.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    /// Record id, defaulting to 0 when the ERP did not return one.
    pub fn id(&self) -> i64 {
        self.i64_or("id", 0)
    }

    /// String field, with `default` substituted for unset/missing/false.
    pub fn str_or(&self, field: &str, default: &str) -> String {
        match self.0.get(field) {
            Some(FieldValue::Str(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    /// Integer field; doubles are truncated, everything else is `default`.
    pub fn i64_or(&self, field: &str, default: i64) -> i64 {
        match self.0.get(field) {
            Some(FieldValue::Int(i)) => *i,
            #[allow(clippy::cast_possible_truncation)]
            Some(FieldValue::Double(d)) => *d as i64,
            _ => default,
        }
    }

    /// Float field; integers widen, everything else is `default`.
    #[allow(clippy::cast_precision_loss)]
    pub fn f64_or(&self, field: &str, default: f64) -> f64 {
        match self.0.get(field) {
            Some(FieldValue::Double(d)) => *d,
            Some(FieldValue::Int(i)) => *i as f64,
            _ => default,
        }
    }

    /// Boolean field. Here `false` is ambiguous between "unset" and a real
    /// false; the ERP makes the same choice, so we pass it through.
    pub fn bool_or(&self, field: &str, default: bool) -> bool {
        match self.0.get(field) {
            Some(FieldValue::Bool(b)) => *b,
            _ => default,
        }
    }

    /// Resolve a many-to-one field: `[id, label]` on the wire, `false` when
    /// unset. Malformed shapes resolve to `None` as well.
    pub fn many_to_one(&self, field: &str) -> Option<Reference> {
        match self.0.get(field) {
            Some(FieldValue::Array(items)) if items.len() == 2 => {
                let id = match items[0] {
                    FieldValue::Int(i) => i,
                    _ => return None,
                };
                let label = match &items[1] {
                    FieldValue::Str(s) => s.clone(),
                    _ => return None,
                };
                Some(Reference { id, label })
            }
            _ => None,
        }
    }

    /// Like [`Record::many_to_one`] but total: unset resolves to
    /// [`Reference::unset`], so downstream display code never branches.
    pub fn reference(&self, field: &str) -> Reference {
        self.many_to_one(field).unwrap_or_else(Reference::unset)
    }

    /// String items of an array field (non-string items are skipped).
    pub fn str_array(&self, field: &str) -> Vec<String> {
        match self.0.get(field) {
            Some(FieldValue::Array(items)) => items
                .iter()
                .filter_map(|v| match v {
                    FieldValue::Str(s) => Some(s.clone()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Binary field passed through as base64 text, or `None` when unset.
    /// Turning it into a displayable image source is the presentation
    /// layer's job.
    pub fn base64_or_none(&self, field: &str) -> Option<String> {
        match self.0.get(field) {
            Some(FieldValue::Str(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

impl From<BTreeMap<String, FieldValue>> for Record {
    fn from(map: BTreeMap<String, FieldValue>) -> Self {
        Self(map)
    }
}

impl IntoIterator for Record {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relational(id: i64, label: &str) -> FieldValue {
        FieldValue::Array(vec![FieldValue::Int(id), FieldValue::Str(label.to_string())])
    }

    #[test]
    fn str_or_coalesces_false_to_default() {
        let record = Record::new().with("name", "Villa X").with("city", false);

        assert_eq!(record.str_or("name", ""), "Villa X");
        assert_eq!(record.str_or("city", ""), "");
        assert_eq!(record.str_or("missing", "n/a"), "n/a");
    }

    #[test]
    fn numeric_accessors_default_on_unset() {
        let record = Record::new().with("surface", false).with("count", 3i64).with("rate", 2.5);

        assert_eq!(record.f64_or("surface", 0.0), 0.0);
        assert_eq!(record.i64_or("count", 0), 3);
        assert_eq!(record.f64_or("count", 0.0), 3.0);
        assert_eq!(record.f64_or("rate", 0.0), 2.5);
        assert_eq!(record.i64_or("rate", 0), 2);
    }

    #[test]
    fn many_to_one_resolves_id_label_pair() {
        let mut record = Record::new();
        record.set("province", relational(4, "Haut-Katanga"));

        let reference = record.many_to_one("province").unwrap();
        assert_eq!(reference.id, 4);
        assert_eq!(reference.label, "Haut-Katanga");
        assert_eq!(reference.display_label(), "Haut-Katanga");
    }

    #[test]
    fn many_to_one_unset_yields_placeholder() {
        let record = Record::new().with("province", false);

        assert!(record.many_to_one("province").is_none());
        let reference = record.reference("province");
        assert_eq!(reference.id, 0);
        assert_eq!(reference.display_label(), Reference::PLACEHOLDER);
    }

    #[test]
    fn many_to_one_rejects_malformed_shapes() {
        let mut record = Record::new();
        record.set("a", FieldValue::Array(vec![FieldValue::Int(1)]));
        record.set(
            "b",
            FieldValue::Array(vec![FieldValue::Str("x".into()), FieldValue::Str("y".into())]),
        );

        assert!(record.many_to_one("a").is_none());
        assert!(record.many_to_one("b").is_none());
        assert!(record.many_to_one("missing").is_none());
    }

    #[test]
    fn str_array_skips_non_string_items() {
        let mut record = Record::new();
        record.set(
            "tags",
            FieldValue::Array(vec![
                FieldValue::Str("tenant".into()),
                FieldValue::Int(9),
                FieldValue::Str("vip".into()),
            ]),
        );

        assert_eq!(record.str_array("tags"), vec!["tenant", "vip"]);
        assert!(record.str_array("missing").is_empty());
    }

    #[test]
    fn base64_passthrough_treats_empty_and_false_as_none() {
        let record = Record::new()
            .with("image", "aGVsbG8=")
            .with("empty", "")
            .with("unset", false);

        assert_eq!(record.base64_or_none("image").as_deref(), Some("aGVsbG8="));
        assert!(record.base64_or_none("empty").is_none());
        assert!(record.base64_or_none("unset").is_none());
    }
}
