//! One-shot value cells.
//!
//! Every chain step that takes a value owns a cell: a [`Placeholder`] for
//! names, property segments and operator text, an [`Argument`] for
//! comparison operands. A cell starts [`Slot::Unset`] and can be assigned
//! exactly once.
//!
//! Cells are only created inside the crate:
//!
//! ```compile_fail
//! let _ = cel_builder::Placeholder::new();
//! ```

use crate::error::{CelError, CelResult};
use crate::value::Value;

/// State of a one-shot cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Slot {
    /// No value assigned yet.
    #[default]
    Unset,
    /// Assigned value.
    Set(Value),
}

/// A one-shot cell rendered with the value's natural text form.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    slot: Slot,
}

impl Placeholder {
    pub(crate) fn new() -> Self {
        Self { slot: Slot::Unset }
    }

    /// Assign the value. Fails if the cell is already set.
    pub fn set(&mut self, value: impl Into<Value>) -> CelResult<()> {
        match self.slot {
            Slot::Set(_) => Err(CelError::DoubleAssignment),
            Slot::Unset => {
                self.slot = Slot::Set(value.into());
                Ok(())
            }
        }
    }

    /// The assigned value. Fails if the cell is unset.
    pub fn value(&self) -> CelResult<&Value> {
        match &self.slot {
            Slot::Set(value) => Ok(value),
            Slot::Unset => Err(CelError::UnassignedValue),
        }
    }

    /// Whether a value has been assigned.
    pub fn is_set(&self) -> bool {
        matches!(self.slot, Slot::Set(_))
    }

    /// Current state of the cell.
    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    /// Render the assigned value verbatim.
    pub fn render(&self) -> CelResult<String> {
        Ok(self.value()?.to_string())
    }
}

/// A placeholder for comparison operands: strings render quoted.
///
/// The string contents are inserted between the quotes as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    inner: Placeholder,
}

impl Argument {
    pub(crate) fn new() -> Self {
        Self {
            inner: Placeholder::new(),
        }
    }

    /// Assign the value. Fails if the cell is already set.
    pub fn set(&mut self, value: impl Into<Value>) -> CelResult<()> {
        self.inner.set(value)
    }

    /// The assigned value. Fails if the cell is unset.
    pub fn value(&self) -> CelResult<&Value> {
        self.inner.value()
    }

    /// Whether a value has been assigned.
    pub fn is_set(&self) -> bool {
        self.inner.is_set()
    }

    /// Current state of the cell.
    pub fn slot(&self) -> &Slot {
        self.inner.slot()
    }

    /// Render the assigned value, quoting strings.
    pub fn render(&self) -> CelResult<String> {
        Ok(quote(self.inner.value()?))
    }
}

fn quote(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

/// A cell stored in a template, either flavour.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Container {
    Placeholder(Placeholder),
    Argument(Argument),
}

impl Container {
    pub(crate) fn placeholder() -> Self {
        Container::Placeholder(Placeholder::new())
    }

    pub(crate) fn argument() -> Self {
        Container::Argument(Argument::new())
    }

    pub(crate) fn set(&mut self, value: Value) -> CelResult<()> {
        match self {
            Container::Placeholder(p) => p.set(value),
            Container::Argument(a) => a.set(value),
        }
    }

    pub(crate) fn render(&self) -> CelResult<String> {
        match self {
            Container::Placeholder(p) => p.render(),
            Container::Argument(a) => a.render(),
        }
    }

    /// Render `value` the way this cell would once assigned.
    ///
    /// Used for immediate values, which never reach `build`, so the cell
    /// itself is dropped without being stored.
    pub(crate) fn bind(self, value: Value) -> String {
        match self {
            Container::Placeholder(_) => value.to_string(),
            Container::Argument(_) => quote(&value),
        }
    }
}
