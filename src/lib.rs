//! formctl - form state controller with per-field validation
//!
//! Tracks current field values, runs per-field validators, and manages the
//! dirty/submitting lifecycle for a single form instance. Purely in-memory
//! and UI-toolkit agnostic: the UI layer feeds in [`ChangeEvent`]s and
//! [`SubmitEvent`]s and reads state back through the controller's accessors.
//!
//! ```
//! use formctl::{ChangeEvent, FormController, SubmitEvent, Validators};
//!
//! let validators = Validators::new().with("username", |v| {
//!     (v.as_text().len() < 7).then(|| "too short".to_string())
//! });
//! let mut form = FormController::new([("username", "foobar")])
//!     .with_validators(validators);
//!
//! form.validate_all();
//! assert_eq!(form.error("username"), Some("too short"));
//!
//! form.on_change(ChangeEvent::input("username", "sevenchars"));
//! assert!(form.is_valid() && form.is_dirty());
//!
//! form.on_submit(&mut SubmitEvent::new());
//! assert!(!form.is_submitting());
//! ```

mod controller;
mod event;
mod field;
mod validate;

pub use controller::{FormController, FormSnapshot};
pub use event::{ChangeEvent, InputKind, SubmitEvent};
pub use field::{FieldKind, FieldValue, TypeError};
pub use validate::{Validator, Validators};
