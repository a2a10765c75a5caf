pub mod controller;
pub mod draft;
pub mod record;
pub mod validate;

pub use controller::{FormController, SubmitOutcome};
pub use draft::DraftStore;
pub use record::{FormKind, FormRecord};
pub use validate::FieldType;
