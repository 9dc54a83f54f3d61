//! The grammar chain.
//!
//! Six node types model the positions of the expression grammar:
//!
//! ```text
//! LeftInitializer  --a/a_value----------> LeftOperand
//! LeftInitializer  --the/the_deferred---> LeftStatement --s/s_deferred--> LeftStatement
//! LeftOperand      --is_*/compare-------> RightInitializer
//! RightInitializer --a/a_value----------> RightOperand
//! RightInitializer --the/the_deferred---> RightStatement --s/s_deferred--> RightStatement
//! RightOperand     --and/or/connect-----> LeftInitializer
//! RightOperand     --build--------------> Expression
//! ```
//!
//! A statement accepts everything its operand accepts, plus `s`.
//!
//! Every step takes `&self` and returns a fresh node, so any node can be
//! kept and branched from. The type parameter `T` is the tuple of values
//! still owed to `build`; see [`crate::arity`].
//!
//! Operand slots (`a`) default to deferred and take the value with
//! `a_value`. Name slots (`the`, `s`) default to immediate and defer with
//! `the_deferred` / `s_deferred`.

use std::fmt;
use std::marker::PhantomData;

use crate::arity::{Append, Arguments};
use crate::config::BuildConfig;
use crate::error::CelResult;
use crate::expression::Expression;
use crate::operator::{ComparisonOperator, LogicalOperator};
use crate::placeholder::Container;
use crate::template::{Binding, Template};
use crate::value::Value;

/// Type-level successor of `T` after one deferred step.
type Next<T, A> = <T as Append<A>>::Output;

macro_rules! chain_node {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<T> {
            template: Template,
            _arity: PhantomData<fn() -> T>,
        }

        impl<T> $name<T> {
            pub(crate) fn from_template(template: Template) -> Self {
                Self {
                    template,
                    _arity: PhantomData,
                }
            }

            /// Number of values still owed to `build`.
            pub fn arity(&self) -> usize {
                self.template.arity()
            }

            #[cfg(test)]
            pub(crate) fn template(&self) -> &Template {
                &self.template
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                Self::from_template(self.template.clone())
            }
        }

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("template", &self.template)
                    .finish()
            }
        }
    };
}

chain_node! {
    /// Start of a clause: expects the left operand.
    LeftInitializer
}

chain_node! {
    /// A left operand is in place: expects a comparison operator.
    LeftOperand
}

chain_node! {
    /// A left property path: expects another segment or a comparison.
    LeftStatement
}

chain_node! {
    /// A comparison operator is in place: expects the right operand.
    RightInitializer
}

chain_node! {
    /// A complete comparison: expects a connector or `build`.
    RightOperand
}

chain_node! {
    /// A right property path: expects another segment, a connector or `build`.
    RightStatement
}

// =============================================================================
// Initializers
// =============================================================================

macro_rules! initializer_steps {
    ($name:ident => $operand:ident, $statement:ident) => {
        impl<T> $name<T> {
            /// Operand whose value is supplied to `build`.
            pub fn a<A>(&self) -> $operand<Next<T, A>>
            where
                T: Append<A>,
            {
                $operand::from_template(
                    self.template
                        .concat(Container::argument(), Binding::Deferred),
                )
            }

            /// Operand with a value known now. Strings are quoted.
            pub fn a_value(&self, value: impl Into<Value>) -> $operand<T> {
                $operand::from_template(
                    self.template
                        .concat(Container::argument(), Binding::immediate(value)),
                )
            }

            /// Root of a property path, emitted verbatim.
            pub fn the(&self, name: impl Into<String>) -> $statement<T> {
                let name: String = name.into();
                $statement::from_template(
                    self.template
                        .concat(Container::placeholder(), Binding::immediate(name)),
                )
            }

            /// Root of a property path whose name is supplied to `build`.
            pub fn the_deferred<A: Into<String>>(&self) -> $statement<Next<T, A>>
            where
                T: Append<A>,
            {
                $statement::from_template(
                    self.template
                        .concat(Container::placeholder(), Binding::Deferred),
                )
            }
        }
    };
}

initializer_steps!(LeftInitializer => LeftOperand, LeftStatement);
initializer_steps!(RightInitializer => RightOperand, RightStatement);

// =============================================================================
// Statements
// =============================================================================

macro_rules! statement_steps {
    ($name:ident) => {
        impl<T> $name<T> {
            /// Property access: emits `.name`.
            pub fn s(&self, name: impl Into<String>) -> $name<T> {
                let name: String = name.into();
                let segment = format!(".{}", name);
                $name::from_template(
                    self.template
                        .concat(Container::placeholder(), Binding::immediate(segment)),
                )
            }

            /// Property access whose segment name is supplied to `build`.
            ///
            /// The `.` is emitted now; only the name is deferred.
            pub fn s_deferred<A: Into<String>>(&self) -> $name<Next<T, A>>
            where
                T: Append<A>,
            {
                $name::from_template(self.template.concat_after(
                    ".",
                    Container::placeholder(),
                    Binding::Deferred,
                ))
            }
        }
    };
}

statement_steps!(LeftStatement);
statement_steps!(RightStatement);

// =============================================================================
// Comparisons
// =============================================================================

macro_rules! comparison_steps {
    ($name:ident) => {
        impl<T> $name<T> {
            /// Append a comparison operator.
            pub fn compare(&self, operator: ComparisonOperator) -> RightInitializer<T> {
                RightInitializer::from_template(
                    self.template
                        .concat(Container::placeholder(), Binding::immediate(operator.spaced())),
                )
            }

            /// ` == `
            pub fn is_equal(&self) -> RightInitializer<T> {
                self.compare(ComparisonOperator::Equal)
            }

            /// ` != `
            pub fn is_not_equal(&self) -> RightInitializer<T> {
                self.compare(ComparisonOperator::NotEqual)
            }

            /// ` < `
            pub fn is_less(&self) -> RightInitializer<T> {
                self.compare(ComparisonOperator::Less)
            }

            /// ` <= `
            pub fn is_less_or_equal(&self) -> RightInitializer<T> {
                self.compare(ComparisonOperator::LessOrEqual)
            }

            /// ` > `
            pub fn is_greater(&self) -> RightInitializer<T> {
                self.compare(ComparisonOperator::Greater)
            }

            /// ` >= `
            pub fn is_greater_or_equal(&self) -> RightInitializer<T> {
                self.compare(ComparisonOperator::GreaterOrEqual)
            }
        }
    };
}

comparison_steps!(LeftOperand);
comparison_steps!(LeftStatement);

// =============================================================================
// Connectors and build
// =============================================================================

macro_rules! terminal_steps {
    ($name:ident) => {
        impl<T> $name<T> {
            /// Append a logical connector and start the next clause.
            pub fn connect(&self, operator: LogicalOperator) -> LeftInitializer<T> {
                LeftInitializer::from_template(
                    self.template
                        .concat(Container::placeholder(), Binding::immediate(operator.spaced())),
                )
            }

            /// ` && `
            pub fn and(&self) -> LeftInitializer<T> {
                self.connect(LogicalOperator::And)
            }

            /// ` || `
            pub fn or(&self) -> LeftInitializer<T> {
                self.connect(LogicalOperator::Or)
            }

            /// Fill the deferred slots in order and render the expression.
            ///
            /// The argument count and types are fixed by `T`. The node is
            /// not consumed and can be built again.
            pub fn build(&self, args: T) -> CelResult<Expression>
            where
                T: Arguments,
            {
                self.template
                    .assemble(args.into_values(), &BuildConfig::default())
            }

            /// Like [`build`](Self::build), with the values checked at
            /// runtime. Surplus values are ignored.
            pub fn build_values<I>(&self, args: I) -> CelResult<Expression>
            where
                I: IntoIterator,
                I::Item: Into<Value>,
            {
                self.build_with(args, &BuildConfig::default())
            }

            /// Runtime-checked build with explicit options.
            pub fn build_with<I>(&self, args: I, config: &BuildConfig) -> CelResult<Expression>
            where
                I: IntoIterator,
                I::Item: Into<Value>,
            {
                let values = args.into_iter().map(Into::into).collect();
                self.template.assemble(values, config)
            }
        }
    };
}

terminal_steps!(RightOperand);
terminal_steps!(RightStatement);

impl<T> From<LeftStatement<T>> for LeftOperand<T> {
    fn from(statement: LeftStatement<T>) -> Self {
        LeftOperand::from_template(statement.template)
    }
}

impl<T> From<RightStatement<T>> for RightOperand<T> {
    fn from(statement: RightStatement<T>) -> Self {
        RightOperand::from_template(statement.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CelError;

    fn start() -> LeftInitializer<()> {
        LeftInitializer::from_template(Template::root())
    }

    fn holds_invariant(template: &Template) -> bool {
        template.literals().len() == template.arity() + 1
    }

    #[test]
    fn test_invariant_after_every_step() {
        let s0 = start();
        let s1 = s0.the("user");
        let s2 = s1.s_deferred::<&str>();
        let s3 = s2.is_equal();
        let s4 = s3.a::<i32>();
        let s5 = s4.or();
        let s6 = s5.a_value(1);
        let s7 = s6.is_less();
        let s8 = s7.the_deferred::<String>();
        assert!(holds_invariant(s0.template()));
        assert!(holds_invariant(s1.template()));
        assert!(holds_invariant(s2.template()));
        assert!(holds_invariant(s3.template()));
        assert!(holds_invariant(s4.template()));
        assert!(holds_invariant(s5.template()));
        assert!(holds_invariant(s6.template()));
        assert!(holds_invariant(s7.template()));
        assert!(holds_invariant(s8.template()));
        assert_eq!(s8.arity(), 3);
    }

    #[test]
    fn test_arity_tracks_deferred_steps_only() {
        let node = start().a::<i32>().is_equal().a_value("x");
        assert_eq!(node.arity(), 1);
        let node = start().the("a").s("b").is_equal().the("c").s("d");
        assert_eq!(node.arity(), 0);
    }

    #[test]
    fn test_branching_is_independent() {
        let left = start().the("age");
        let ge = left.is_greater_or_equal().a_value(18).build(()).unwrap();
        let lt = left.is_less().a_value(65).build(()).unwrap();
        assert_eq!(ge.as_str(), "age >= 18");
        assert_eq!(lt.as_str(), "age < 65");
        assert_eq!(left.template().literals(), &["age".to_string()]);
    }

    #[test]
    fn test_build_is_repeatable() {
        let node = start().a().is_equal().a();
        let first = node.build((1, 2)).unwrap();
        let second = node.build((3, 4)).unwrap();
        assert_eq!(first.as_str(), "1 == 2");
        assert_eq!(second.as_str(), "3 == 4");
    }

    #[test]
    fn test_compare_matches_named_methods() {
        let left = start().the("x");
        for op in ComparisonOperator::ALL {
            let expr = left.compare(op).a_value(1).build(()).unwrap();
            assert_eq!(expr.as_str(), format!("x {} 1", op.symbol()));
        }
        assert_eq!(
            left.is_not_equal().a_value(1).build(()).unwrap(),
            left.compare(ComparisonOperator::NotEqual)
                .a_value(1)
                .build(())
                .unwrap()
        );
    }

    #[test]
    fn test_statement_converts_to_operand() {
        let statement = start().the("user").s("id");
        let operand: LeftOperand<()> = statement.into();
        let expr = operand.is_equal().a_value(7).build(()).unwrap();
        assert_eq!(expr.as_str(), "user.id == 7");

        let right: RightOperand<()> = start().a_value(7).is_equal().the("user").s("id").into();
        assert_eq!(right.build(()).unwrap().as_str(), "7 == user.id");
    }

    #[test]
    fn test_deferred_names() {
        let expr = start()
            .the_deferred()
            .s_deferred()
            .is_equal()
            .the("other")
            .s_deferred()
            .build(("user", "name", String::from("alias")))
            .unwrap();
        assert_eq!(expr.as_str(), "user.name == other.alias");
    }

    #[test]
    fn test_deferred_names_render_unquoted() {
        let expr = start()
            .a()
            .is_equal()
            .the_deferred()
            .build(("literal", "path"))
            .unwrap();
        assert_eq!(expr.as_str(), "\"literal\" == path");
    }

    #[test]
    fn test_connect() {
        let expr = start()
            .a_value(1)
            .is_equal()
            .a_value(1)
            .connect(LogicalOperator::Or)
            .a_value(2)
            .is_equal()
            .a_value(2)
            .build(())
            .unwrap();
        assert_eq!(expr.as_str(), "1 == 1 || 2 == 2");
    }

    #[test]
    fn test_build_values_runtime_checks() {
        let node = start().a::<i32>().is_equal().a::<i32>();
        assert_eq!(
            node.build_values([1]).unwrap_err(),
            CelError::MissingBuildArgument {
                index: 1,
                expected: 2
            }
        );
        assert_eq!(node.build_values([1, 2, 3]).unwrap().as_str(), "1 == 2");
        assert_eq!(
            node.build_with([1, 2, 3], &BuildConfig::strict())
                .unwrap_err(),
            CelError::SurplusBuildArguments {
                expected: 2,
                supplied: 3
            }
        );
    }

    #[test]
    fn test_debug_names_node() {
        let debug = format!("{:?}", start().a_value(1));
        assert!(debug.starts_with("LeftOperand"));
    }
}
