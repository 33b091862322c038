//! Change and submit events as reported by UI input elements

use crate::field::FieldValue;

/// Classifies the input element a change came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Text inputs and anything else that reports a literal value
    Input,
    Checkbox,
    Select { multiple: bool },
}

/// A change reported by an input element.
///
/// `value` is the raw scalar the element reports; for selects, `selected`
/// carries the full set of currently-selected option values.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub name: String,
    pub kind: InputKind,
    pub value: FieldValue,
    pub selected: Vec<String>,
}

impl ChangeEvent {
    /// A text input (or any other control reporting a literal value)
    pub fn input(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Input,
            value: value.into(),
            selected: Vec::new(),
        }
    }

    /// A checkbox. `reported` is whatever scalar the control reports;
    /// the controller toggles the stored value and ignores it.
    pub fn checkbox(name: impl Into<String>, reported: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Checkbox,
            value: reported.into(),
            selected: Vec::new(),
        }
    }

    /// A single-value select; behaves like a literal-value input
    pub fn select(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Select { multiple: false },
            value: value.into(),
            selected: Vec::new(),
        }
    }

    /// A multi-select reporting its full current selection. The reported
    /// scalar is the first selected option, as selection controls do.
    pub fn multi_select(
        name: impl Into<String>,
        selected: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let selected: Vec<String> = selected.into_iter().map(Into::into).collect();
        let value = FieldValue::Text(selected.first().cloned().unwrap_or_default());
        Self {
            name: name.into(),
            kind: InputKind::Select { multiple: true },
            value,
            selected,
        }
    }
}

/// A form submission event
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the default submission behavior
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
