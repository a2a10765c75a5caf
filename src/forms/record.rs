use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which email template a submission maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Booking,
    Review,
}

impl FormKind {
    /// Parse the wire discriminator. Anything other than the two known
    /// values is rejected upstream as a bad request.
    pub fn parse(value: &str) -> Option<FormKind> {
        match value {
            "booking" => Some(FormKind::Booking),
            "review" => Some(FormKind::Review),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Booking => "booking",
            FormKind::Review => "review",
        }
    }
}

/// A form submission as it travels over the wire and into the draft store:
/// a `type` discriminator plus a flat field-name → value map.
///
/// Every declared field is present in the map — an untouched choice group
/// persists as an empty string rather than being omitted, so a reloaded
/// draft restores the whole form shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub form_type: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl FormRecord {
    pub fn new(kind: FormKind) -> Self {
        FormRecord {
            form_type: Some(kind.as_str().to_string()),
            fields: BTreeMap::new(),
        }
    }

    /// The parsed discriminator, if present and recognized.
    pub fn kind(&self) -> Option<FormKind> {
        self.form_type.as_deref().and_then(FormKind::parse)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    /// Field value, empty string when absent.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Optional field: absent or empty-after-trim reads as `None`, matching
    /// how the templates treat blank inputs.
    pub fn optional(&self, name: &str) -> Option<&str> {
        let value = self.field(name).trim();
        if value.is_empty() { None } else { Some(value) }
    }
}
