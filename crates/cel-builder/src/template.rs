//! Literal/placeholder interleaving.
//!
//! A [`Template`] is an alternating sequence of literal text and cells:
//!
//! ```text
//! literal[0] cell[0] literal[1] cell[1] ... cell[n-1] literal[n]
//! ```
//!
//! so `literals.len() == placeholders.len() + 1` always holds. Immediate
//! values are spliced straight into the last literal; only deferred values
//! open a new cell.

use tracing::{debug, trace};

use crate::config::BuildConfig;
use crate::error::{CelError, CelResult, Element};
use crate::expression::Expression;
use crate::placeholder::Container;
use crate::value::Value;

/// How a chain step supplies its value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Binding {
    /// Supplied later, positionally, to `build`.
    Deferred,
    /// Supplied now and baked into the literal text.
    Immediate(Value),
}

impl Binding {
    pub(crate) fn immediate(value: impl Into<Value>) -> Self {
        Binding::Immediate(value.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Template {
    literals: Vec<String>,
    placeholders: Vec<Container>,
}

impl Template {
    /// The empty template every chain starts from.
    pub(crate) fn root() -> Self {
        Self {
            literals: vec![String::new()],
            placeholders: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Number of deferred cells.
    pub(crate) fn arity(&self) -> usize {
        self.placeholders.len()
    }

    /// Copy of this template with one more step appended.
    pub(crate) fn concat(&self, container: Container, binding: Binding) -> Self {
        let mut next = self.clone();
        next.push(container, binding);
        next
    }

    /// Copy of this template with `prefix` appended to the last literal,
    /// followed by one more step.
    pub(crate) fn concat_after(&self, prefix: &str, container: Container, binding: Binding) -> Self {
        let mut next = self.clone();
        next.splice(prefix);
        next.push(container, binding);
        next
    }

    fn push(&mut self, container: Container, binding: Binding) {
        match binding {
            Binding::Deferred => {
                self.placeholders.push(container);
                self.literals.push(String::new());
            }
            Binding::Immediate(value) => {
                let text = container.bind(value);
                self.splice(&text);
            }
        }
    }

    fn splice(&mut self, text: &str) {
        match self.literals.last_mut() {
            Some(last) => last.push_str(text),
            None => self.literals.push(text.to_owned()),
        }
    }

    fn literal(&self, index: usize) -> CelResult<&str> {
        self.literals
            .get(index)
            .map(String::as_str)
            .ok_or(CelError::MissingElement {
                element: Element::Literal,
                index,
            })
    }

    fn placeholder(&self, index: usize) -> CelResult<&Container> {
        self.placeholders
            .get(index)
            .ok_or(CelError::MissingElement {
                element: Element::Placeholder,
                index,
            })
    }

    /// Fill every deferred cell with the matching positional value and
    /// join the result into an [`Expression`].
    ///
    /// Cells are cloned before assignment, so the template is left untouched
    /// and can be assembled again.
    pub(crate) fn assemble(&self, args: Vec<Value>, config: &BuildConfig) -> CelResult<Expression> {
        let expected = self.arity();
        let supplied = args.len();
        trace!(expected, supplied, "assembling expression");

        if supplied > expected {
            if config.strict_arity {
                return Err(CelError::SurplusBuildArguments { expected, supplied });
            }
            debug!(
                ignored = supplied - expected,
                "ignoring surplus build arguments"
            );
        }

        let mut args = args.into_iter();
        let mut text = self.literal(0)?.to_owned();
        for index in 0..self.literals.len().saturating_sub(1) {
            let mut cell = self.placeholder(index)?.clone();
            let value = args
                .next()
                .ok_or(CelError::MissingBuildArgument { index, expected })?;
            cell.set(value)?;
            text.push_str(&cell.render()?);
            text.push_str(self.literal(index + 1)?);
        }

        Ok(Expression::new(text))
    }
}
