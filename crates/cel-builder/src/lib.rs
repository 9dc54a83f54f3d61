//! # cel-builder
//!
//! A typed fluent builder for comparison/boolean expression strings.
//!
//! Expressions are assembled step by step from a shared starting point,
//! [`builder`]. Each step returns a new node whose type only offers the
//! steps that are legal from that position, so `x == == y` or a dangling
//! `&&` cannot be written. Values are either given immediately or
//! deferred to [`build`](RightOperand::build), which takes them as a tuple
//! whose shape is checked at compile time.
//!
//! ## Usage
//!
//! ```rust
//! use cel_builder::builder;
//!
//! // Deferred operands: values are supplied to `build`.
//! let expr = builder().a().is_equal().a().build(("foo", "bar")).unwrap();
//! assert_eq!(expr.to_string(), r#""foo" == "bar""#);
//!
//! // Property paths and connectors.
//! let adult = builder()
//!     .the("user")
//!     .s("profile")
//!     .s("age")
//!     .is_greater_or_equal()
//!     .a();
//! assert_eq!(adult.build((18,)).unwrap().as_str(), "user.profile.age >= 18");
//!
//! // Immediate operands need no build arguments.
//! let expr = builder()
//!     .the("user.name")
//!     .is_equal()
//!     .a_value("John")
//!     .build(())
//!     .unwrap();
//! assert_eq!(expr.as_str(), r#"user.name == "John""#);
//! ```
//!
//! A comparison must be complete before it can be built:
//!
//! ```compile_fail
//! let _ = cel_builder::builder().a().is_equal().build((1,));
//! ```
//!
//! and `build` takes exactly the deferred values:
//!
//! ```compile_fail
//! let _ = cel_builder::builder().a().is_equal().a().build((1,));
//! ```
//!
//! ## Rendering
//!
//! | Step | Emits |
//! |------|-------|
//! | `is_equal` / `is_not_equal` | ` == ` / ` != ` |
//! | `is_less` / `is_less_or_equal` | ` < ` / ` <= ` |
//! | `is_greater` / `is_greater_or_equal` | ` > ` / ` >= ` |
//! | `and` / `or` | ` && ` / ` \|\| ` |
//! | `the(name)` | `name` |
//! | `s(name)` | `.name` |
//! | `a` / `a_value` | the value; strings in double quotes |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::sync::LazyLock;

use tracing::warn;

pub mod arity;
mod chain;
mod config;
mod error;
mod expression;
mod operator;
mod placeholder;
mod template;
mod value;

pub use arity::{Append, Arguments};
pub use chain::{
    LeftInitializer, LeftOperand, LeftStatement, RightInitializer, RightOperand, RightStatement,
};
pub use config::{BuildConfig, BuildConfigBuilder};
pub use error::{CelError, CelResult, Element};
pub use expression::Expression;
pub use operator::{ComparisonOperator, LogicalOperator};
pub use placeholder::{Argument, Placeholder, Slot};
pub use value::Value;

static BUILDER: LazyLock<LeftInitializer<()>> =
    LazyLock::new(|| LeftInitializer::from_template(template::Template::root()));

/// The shared starting node for every expression.
///
/// The node is immutable; every step copies it, so all callers can start
/// from the same instance.
pub fn builder() -> &'static LeftInitializer<()> {
    &BUILDER
}

/// Wrap arbitrary text as an [`Expression`] without any checks or quoting.
#[deprecated(note = "unchecked and unquoted; build expressions with `builder()` instead")]
pub fn raw(text: impl Into<String>) -> Expression {
    warn!("creating an unchecked raw expression");
    Expression::new(text.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_is_a_singleton() {
        assert!(std::ptr::eq(builder(), builder()));
        assert_eq!(builder().arity(), 0);
    }

    #[test]
    fn test_builder_is_not_modified_by_use() {
        let _ = builder().a_value(1).is_equal().a_value(2);
        let expr = builder().a_value(3).is_less().a_value(4).build(()).unwrap();
        assert_eq!(expr.as_str(), "3 < 4");
    }

    #[test]
    #[allow(deprecated)]
    fn test_raw_is_verbatim() {
        assert_eq!(raw("foo == bar").to_string(), "foo == bar");
        assert_eq!(raw(String::new()).as_str(), "");
    }

    #[test]
    fn test_nodes_are_send_and_sync() {
        fn assert_send_sync<X: Send + Sync>() {}
        assert_send_sync::<LeftInitializer<()>>();
        assert_send_sync::<RightOperand<(std::rc::Rc<i32>,)>>();
        assert_send_sync::<Expression>();
    }

    #[test]
    fn test_public_api_accessible() {
        let _: Option<CelResult<Expression>> = None;
        let _: Option<Placeholder> = None;
        let _: Option<Argument> = None;
        let _: Slot = Slot::default();
        let _: BuildConfig = BuildConfig::default();
    }
}
