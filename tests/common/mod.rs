//! Shared test infrastructure: temp draft stores, sample records, and a
//! stub submission client.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tempfile::TempDir;

use simphiwe::client::{Submission, SubmitClient, SubmitError};
use simphiwe::forms::{DraftStore, FormKind, FormRecord};

pub const GUEST_NAME: &str = "Thabo Dlamini";
pub const GUEST_EMAIL: &str = "thabo@example.com";

/// Draft store in a fresh temp directory. Keep the `TempDir` alive for as
/// long as the store is used.
pub fn temp_store() -> (TempDir, DraftStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = DraftStore::open(dir.path()).expect("Failed to open draft store");
    (dir, store)
}

/// A second handle onto the same directory, for inspecting what a
/// controller-owned store persisted.
pub fn store_at(dir: &TempDir) -> DraftStore {
    DraftStore::open(dir.path()).expect("Failed to reopen draft store")
}

/// A complete booking submission for the given stay.
pub fn booking_record(checkin: &str, checkout: &str) -> FormRecord {
    let mut record = FormRecord::new(FormKind::Booking);
    record.set("name", GUEST_NAME);
    record.set("email", GUEST_EMAIL);
    record.set("phone", "+268 7665 5974");
    record.set("guests", "2");
    record.set("checkin", checkin);
    record.set("checkout", checkout);
    record.set("room", "");
    record.set("message", "");
    record
}

/// A complete review submission with the given satisfaction score.
pub fn review_record(satisfaction: &str) -> FormRecord {
    let mut record = FormRecord::new(FormKind::Review);
    record.set("name", GUEST_NAME);
    record.set("email", GUEST_EMAIL);
    record.set("satisfaction", satisfaction);
    record.set("recommend", "yes");
    record.set("cleanliness", "Excellent");
    record.set("service", "Good");
    record.set("problems", "");
    record.set("improvements", "");
    record.set("comments", "");
    record
}

/// Submission client stub: counts calls, succeeds or fails on command.
pub struct StubClient {
    pub fail_with: Option<String>,
    pub calls: Arc<AtomicUsize>,
}

impl StubClient {
    pub fn succeeding() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            StubClient {
                fail_with: None,
                calls: calls.clone(),
            },
            calls,
        )
    }

    pub fn failing(detail: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            StubClient {
                fail_with: Some(detail.to_string()),
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl SubmitClient for StubClient {
    async fn submit(&self, _record: &FormRecord) -> Result<Submission, SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(detail) => Err(SubmitError::Rejected(detail.clone())),
            None => Ok(Submission {
                message: "booking email sent successfully.".to_string(),
                message_id: Some("abc123".to_string()),
            }),
        }
    }
}
