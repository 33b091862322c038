//! Form state controller: values, errors, dirty/submitting lifecycle

use crate::event::{ChangeEvent, InputKind, SubmitEvent};
use crate::field::FieldValue;
use crate::validate::Validators;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Owns the state of one form instance.
///
/// Holds current field values, the set of currently-failing fields, and the
/// dirty/submitting flags. State changes only through [`on_change`],
/// [`validate_all`], and [`on_submit`].
///
/// [`on_change`]: FormController::on_change
/// [`validate_all`]: FormController::validate_all
/// [`on_submit`]: FormController::on_submit
pub struct FormController {
    values: HashMap<String, FieldValue>,
    errors: HashMap<String, String>,
    is_dirty: bool,
    is_submitting: bool,
    validators: Option<Validators>,
    callback: Option<Box<dyn FnMut()>>,
}

/// Owned, serializable copy of a controller's observable state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub values: HashMap<String, FieldValue>,
    pub errors: HashMap<String, String>,
    pub is_valid: bool,
    pub is_dirty: bool,
    pub is_submitting: bool,
}

impl FormController {
    /// Create a controller seeded with default values.
    ///
    /// No validation runs here: `errors` starts empty and `is_valid` starts
    /// true even if the defaults would fail their validators.
    pub fn new<K, V>(default_values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            values: default_values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            errors: HashMap::new(),
            is_dirty: false,
            is_submitting: false,
            validators: None,
            callback: None,
        }
    }

    /// Attach per-field validators
    pub fn with_validators(mut self, validators: Validators) -> Self {
        self.validators = Some(validators);
        self
    }

    /// Attach the callback invoked on successful submission
    pub fn with_callback(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Apply a change reported by an input element.
    ///
    /// Checkboxes toggle the truthiness of the *stored* value; multi-selects
    /// replace the stored value with the full reported selection; everything
    /// else stores the literal reported value. Marks the form dirty, then
    /// runs the field's validator.
    ///
    /// The validator receives the raw reported scalar, not the value computed
    /// above. For checkboxes and multi-selects the two differ: the validator
    /// sees the pre-toggle/reported scalar rather than the stored boolean or
    /// selection list. Validators always observe what the control reported.
    pub fn on_change(&mut self, event: ChangeEvent) {
        let ChangeEvent {
            name,
            kind,
            value,
            selected,
        } = event;

        match kind {
            InputKind::Checkbox => {
                let next = !self.values.get(&name).is_some_and(FieldValue::is_truthy);
                self.values.insert(name.clone(), FieldValue::Bool(next));
            }
            InputKind::Select { multiple: true } => {
                self.values.insert(name.clone(), FieldValue::Multi(selected));
            }
            _ => {
                self.values.insert(name.clone(), value.clone());
            }
        }

        self.is_dirty = true;

        let message = self
            .validators
            .as_ref()
            .and_then(|validators| validators.get(&name))
            .and_then(|validator| validator(&value));
        match message {
            Some(message) => {
                tracing::debug!(field = %name, %message, "field failed validation");
                self.errors.insert(name, message);
            }
            None => {
                self.errors.remove(&name);
            }
        }
    }

    /// Re-validate every field that has a validator.
    ///
    /// Rebuilds `errors` from scratch as exactly the failing fields; fields
    /// without a validator never appear in it. A field with no current value
    /// is validated against the default empty text. No-op if no validators
    /// were supplied.
    pub fn validate_all(&mut self) {
        let Some(validators) = &self.validators else {
            return;
        };

        let fallback = FieldValue::default();
        self.errors = validators
            .iter()
            .filter_map(|(name, validator)| {
                let value = self.values.get(name).unwrap_or(&fallback);
                validator(value).map(|message| (name.clone(), message))
            })
            .collect();
        tracing::debug!(failing = self.errors.len(), "validated all fields");
    }

    /// Handle a form submission.
    ///
    /// Suppresses the event's default behavior, re-validates everything, and
    /// settles: once the fresh error state is committed, the callback fires
    /// iff the form is valid, and `is_submitting` drops back to false either
    /// way. The controller performs no submission itself; an invalid form
    /// simply withholds the callback.
    pub fn on_submit(&mut self, event: &mut SubmitEvent) {
        event.prevent_default();
        self.validate_all();
        self.is_submitting = true;
        self.settle();
    }

    /// Second phase of submission: runs strictly after `validate_all` has
    /// committed its write to `errors`, so the validity check here never
    /// observes pre-validation state.
    fn settle(&mut self) {
        if self.is_valid() {
            tracing::debug!("submission valid");
            if let Some(callback) = self.callback.as_mut() {
                callback();
            }
        } else {
            tracing::debug!(failing = self.errors.len(), "submission withheld");
        }
        self.is_submitting = false;
    }

    /// Current field values
    pub fn values(&self) -> &HashMap<String, FieldValue> {
        &self.values
    }

    /// Current value of one field
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Currently-failing fields and their messages
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Current error message for one field
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// True iff no field is currently failing
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// True once any change has been applied
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// True while a submission is settling
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Owned copy of the observable state
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self.values.clone(),
            errors: self.errors.clone(),
            is_valid: self.is_valid(),
            is_dirty: self.is_dirty,
            is_submitting: self.is_submitting,
        }
    }
}

impl fmt::Debug for FormController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("is_dirty", &self.is_dirty)
            .field("is_submitting", &self.is_submitting)
            .field("validators", &self.validators)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}
