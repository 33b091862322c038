//! Per-field validator registry

use crate::field::FieldValue;
use std::collections::HashMap;
use std::fmt;

/// A pure check of a candidate value: `None` passes, `Some(message)` rejects
pub type Validator = Box<dyn Fn(&FieldValue) -> Option<String>>;

/// Validators keyed by field name
#[derive(Default)]
pub struct Validators {
    inner: HashMap<String, Validator>,
}

impl Validators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator, builder-style
    pub fn with(
        mut self,
        name: impl Into<String>,
        validator: impl Fn(&FieldValue) -> Option<String> + 'static,
    ) -> Self {
        self.insert(name, validator);
        self
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        validator: impl Fn(&FieldValue) -> Option<String> + 'static,
    ) {
        self.inner.insert(name.into(), Box::new(validator));
    }

    pub fn get(&self, name: &str) -> Option<&Validator> {
        self.inner.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Validator)> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for Validators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validators")
            .field("fields", &self.inner.keys().collect::<Vec<_>>())
            .finish()
    }
}
