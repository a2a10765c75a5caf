//! Simphiwe Guesthouse form-to-email pipeline.
//!
//! The server side (`handlers`, `mail`, `config`) accepts booking and review
//! form submissions over HTTP, renders them into HTML emails, and relays them
//! to the guesthouse mailbox over SMTP. The client side (`forms`, `client`)
//! models the website's form behavior — per-field validation, draft
//! auto-save, and the submit lifecycle — independently of any rendered page.

pub mod client;
pub mod config;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod mail;
