//! Error types for expression building.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while filling placeholders or building an expression.
///
/// All of these are contract violations raised at the point where they
/// happen; nothing inside the crate retries or recovers from them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CelError {
    /// A placeholder was assigned a value more than once.
    #[error("placeholder has already been assigned: cannot assign a new value")]
    DoubleAssignment,

    /// A placeholder was read or rendered before being assigned.
    #[error("placeholder is not assigned: provide a value before rendering it")]
    UnassignedValue,

    /// The literal or placeholder list is shorter than the chain requires.
    #[error("missing {element} at index {index}")]
    MissingElement {
        /// Which list came up short.
        element: Element,
        /// Index that was requested.
        index: usize,
    },

    /// `build` received fewer values than there are deferred slots.
    #[error("missing build argument at position {index}: {expected} expected")]
    MissingBuildArgument {
        /// Position of the first missing value.
        index: usize,
        /// Number of deferred slots in the chain.
        expected: usize,
    },

    /// `build` received more values than there are deferred slots and
    /// strict arity was requested.
    #[error("too many build arguments: {supplied} supplied, {expected} expected")]
    SurplusBuildArguments {
        /// Number of deferred slots in the chain.
        expected: usize,
        /// Number of values supplied.
        supplied: usize,
    },
}

/// Template list referenced by [`CelError::MissingElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// A literal text segment.
    Literal,
    /// A placeholder slot.
    Placeholder,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Literal => write!(f, "literal"),
            Element::Placeholder => write!(f, "placeholder"),
        }
    }
}

/// Result type for expression building.
pub type CelResult<T> = std::result::Result<T, CelError>;
