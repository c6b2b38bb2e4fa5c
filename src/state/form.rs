//! Form field model shared by every record modal.
//!
//! Values are kept as the strings the inputs hold; type coercion happens only
//! when a record payload is built, the way a browser form behaves.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use crate::net::types::{Choice, EntityKind};

/// Input widget used for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Color,
    Number,
    /// Numeric id of another record.
    Reference(EntityKind),
    Choice(&'static [Choice]),
    Flag,
}

/// Static description of one form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name, also the form key.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Value restored by a form reset.
    pub default: &'static str,
    pub required: bool,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text, default: "", required: false }
    }

    pub const fn long_text(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::LongText, default: "", required: false }
    }

    pub const fn choice(name: &'static str, label: &'static str, choices: &'static [Choice], default: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Choice(choices), default, required: false }
    }

    pub const fn with_kind(self, kind: FieldKind) -> Self {
        Self { kind, ..self }
    }

    pub const fn with_default(self, default: &'static str) -> Self {
        Self { default, ..self }
    }

    pub const fn required(self) -> Self {
        Self { required: true, ..self }
    }
}

/// String value of a checked flag.
pub const FLAG_ON: &str = "true";
/// String value of an unchecked flag.
pub const FLAG_OFF: &str = "false";

/// Current values of a record form, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    /// Values after a form reset.
    pub fn defaults(fields: &[FieldSpec]) -> Self {
        let values = fields.iter().map(|f| (f.name.to_owned(), f.default.to_owned())).collect();
        Self { values }
    }

    /// Raw value of `name`; missing fields read as empty.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_owned(), value.into());
    }

    pub fn text(&self, name: &str) -> String {
        self.get(name).to_owned()
    }

    /// Integer value with zero fallback.
    pub fn number_or_zero(&self, name: &str) -> i64 {
        parse_leading_int(self.get(name)).unwrap_or(0)
    }

    /// Record id, `None` when the input holds no number.
    pub fn reference(&self, name: &str) -> Option<i64> {
        parse_leading_int(self.get(name))
    }

    pub fn flag(&self, name: &str) -> bool {
        self.get(name) == FLAG_ON
    }

    pub fn set_flag(&mut self, name: &str, on: bool) {
        self.set(name, if on { FLAG_ON } else { FLAG_OFF });
    }

    pub fn set_reference(&mut self, name: &str, id: Option<i64>) {
        self.set(name, id.map(|v| v.to_string()).unwrap_or_default());
    }
}

/// Parse the leading decimal integer of `raw`, ignoring leading whitespace
/// and any trailing non-digit text (`"12 members"` → 12).
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}
