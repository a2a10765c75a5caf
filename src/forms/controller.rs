use std::collections::BTreeMap;

use crate::client::SubmitClient;
use crate::forms::draft::DraftStore;
use crate::forms::record::{FormKind, FormRecord};
use crate::forms::validate::{self, FieldType};

/// One interactive input of a form.
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
}

const fn field(name: &'static str, field_type: FieldType, required: bool) -> FieldSpec {
    FieldSpec {
        name,
        field_type,
        required,
    }
}

const BOOKING_FIELDS: &[FieldSpec] = &[
    field("name", FieldType::Text, true),
    field("email", FieldType::Email, true),
    field("phone", FieldType::Phone, false),
    field("guests", FieldType::Text, true),
    field("checkin", FieldType::Date, true),
    field("checkout", FieldType::Date, true),
    field("room", FieldType::Text, false),
    field("message", FieldType::Text, false),
];

const REVIEW_FIELDS: &[FieldSpec] = &[
    field("name", FieldType::Text, true),
    field("email", FieldType::Email, true),
    field("satisfaction", FieldType::Text, true),
    field("recommend", FieldType::Text, true),
    field("cleanliness", FieldType::Text, true),
    field("service", FieldType::Text, true),
    field("problems", FieldType::Text, false),
    field("improvements", FieldType::Text, false),
    field("comments", FieldType::Text, false),
];

/// What a submit attempt came to, with the notification text to surface.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; no network call was made. `errors` lists the
    /// offending fields with their inline messages.
    Invalid {
        notice: String,
        errors: Vec<(String, String)>,
    },
    /// Dispatch succeeded; fields and draft have been cleared.
    Sent { notice: String },
    /// Dispatch failed; field values and the draft are left intact so the
    /// guest can retry.
    Failed { notice: String },
}

/// Drives one form through its lifecycle: field edits with inline
/// validation and draft auto-save, then a validated submit.
///
/// Exclusive access (`&mut self`) across the submit await is the library
/// analog of the disabled submit button — a second submit cannot start
/// while one is in flight.
pub struct FormController<C: SubmitClient> {
    form_id: String,
    kind: FormKind,
    fields: &'static [FieldSpec],
    record: FormRecord,
    errors: BTreeMap<String, String>,
    submitting: bool,
    store: DraftStore,
    client: C,
}

impl<C: SubmitClient> FormController<C> {
    /// Controller for the booking request form, restoring any saved draft.
    pub fn booking(store: DraftStore, client: C) -> Self {
        Self::new("booking-form", FormKind::Booking, BOOKING_FIELDS, store, client)
    }

    /// Controller for the guest review form, restoring any saved draft.
    pub fn review(store: DraftStore, client: C) -> Self {
        Self::new("review-form", FormKind::Review, REVIEW_FIELDS, store, client)
    }

    fn new(
        form_id: &str,
        kind: FormKind,
        fields: &'static [FieldSpec],
        store: DraftStore,
        client: C,
    ) -> Self {
        let mut record = FormRecord::new(kind);
        for spec in fields {
            record.set(spec.name, "");
        }

        // Merge the saved draft into the declared fields; anything else in
        // a stale draft is ignored.
        if let Some(saved) = store.load(form_id) {
            for spec in fields {
                if let Some(value) = saved.optional(spec.name) {
                    record.set(spec.name, value);
                }
            }
        }

        FormController {
            form_id: form_id.to_string(),
            kind,
            fields,
            record,
            errors: BTreeMap::new(),
            submitting: false,
            store,
            client,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn value(&self, name: &str) -> &str {
        self.record.field(name)
    }

    /// Inline error for a field, if its last validation failed.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Label for the submit control while a request is in flight.
    pub fn busy_label(&self) -> &'static str {
        match self.kind {
            FormKind::Booking => "Sending Request...",
            FormKind::Review => "Submitting Review...",
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Record a field edit: store the value, validate it, refresh its inline
    /// error, and persist the draft. Returns the field's current error.
    pub fn input(&mut self, name: &str, value: &str) -> Option<String> {
        let Some(spec) = self.fields.iter().find(|s| s.name == name) else {
            return None;
        };
        self.record.set(name, value);

        let result = validate::validate(spec.field_type, value, spec.required);
        match &result {
            Some(message) => {
                self.errors.insert(name.to_string(), message.clone());
            }
            None => {
                self.errors.remove(name);
            }
        }

        if let Err(e) = self.store.save(&self.form_id, &self.record) {
            log::warn!("Failed to auto-save draft for {}: {e}", self.form_id);
        }
        result
    }

    /// Validate every field at once so all inline errors update together.
    /// Returns whether submission may proceed: only required-field failures
    /// (and the date-order rule) block.
    fn validate_all(&mut self) -> bool {
        let mut required_ok = true;
        for spec in self.fields {
            let value = self.record.field(spec.name).to_string();
            match validate::validate(spec.field_type, &value, spec.required) {
                Some(message) => {
                    if spec.required {
                        required_ok = false;
                    }
                    self.errors.insert(spec.name.to_string(), message);
                }
                None => {
                    self.errors.remove(spec.name);
                }
            }
        }

        // Stay ordering: check-out must lie strictly after check-in.
        // ISO dates compare correctly as strings.
        if self.kind == FormKind::Booking {
            let checkin = self.record.field("checkin");
            let checkout = self.record.field("checkout");
            if !checkin.is_empty() && !checkout.is_empty() && checkout <= checkin {
                self.errors.insert(
                    "checkout".to_string(),
                    "Check-out date must be after check-in date".to_string(),
                );
                required_ok = false;
            }
        }

        required_ok
    }

    /// Run the submit lifecycle: validate, dispatch, and settle back to
    /// idle. On success the form and its draft are cleared; on failure both
    /// survive so a retry costs nothing.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.validate_all() {
            let notice = match self.kind {
                FormKind::Booking => "Please fix the errors in the form before submitting",
                FormKind::Review => "Please complete all required fields before submitting",
            };
            return SubmitOutcome::Invalid {
                notice: notice.to_string(),
                errors: self
                    .errors
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            };
        }

        self.submitting = true;
        let result = self.client.submit(&self.record).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                for spec in self.fields {
                    self.record.set(spec.name, "");
                }
                self.errors.clear();
                self.store.clear(&self.form_id);
                let notice = match self.kind {
                    FormKind::Booking => {
                        "Booking request sent successfully! We'll contact you within 24 hours."
                    }
                    FormKind::Review => {
                        "Thank you for your review! Your feedback helps us improve our service."
                    }
                };
                SubmitOutcome::Sent {
                    notice: notice.to_string(),
                }
            }
            Err(e) => {
                let notice = match self.kind {
                    FormKind::Booking => format!(
                        "Failed to send booking request. Please try again or call us directly. (Error: {e})"
                    ),
                    FormKind::Review => format!(
                        "Failed to send review. Please try again or email us directly. (Error: {e})"
                    ),
                };
                SubmitOutcome::Failed { notice }
            }
        }
    }
}
