//! Type-level tracking of deferred arguments.
//!
//! Each chain node carries a tuple type `T` listing the types of the values
//! still owed to `build`. A deferred step appends one type with [`Append`],
//! an immediate step leaves `T` unchanged, and `build` accepts exactly a
//! value of type `T` through [`Arguments`].
//!
//! Tuples up to 16 elements are supported.

use crate::value::Value;

/// Appends `A` to a tuple type.
pub trait Append<A> {
    /// The tuple with `A` appended.
    type Output;
}

/// A tuple of values that can be handed to `build`.
pub trait Arguments {
    /// Number of values in the tuple.
    const LEN: usize;

    /// Convert every element, in order.
    fn into_values(self) -> Vec<Value>;
}

impl<A> Append<A> for () {
    type Output = (A,);
}

macro_rules! impl_append {
    ($($T:ident),+) => {
        impl<$($T,)+ A> Append<A> for ($($T,)+) {
            type Output = ($($T,)+ A,);
        }
    };
}

impl_append!(T1);
impl_append!(T1, T2);
impl_append!(T1, T2, T3);
impl_append!(T1, T2, T3, T4);
impl_append!(T1, T2, T3, T4, T5);
impl_append!(T1, T2, T3, T4, T5, T6);
impl_append!(T1, T2, T3, T4, T5, T6, T7);
impl_append!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_append!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_append!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_append!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_append!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);
impl_append!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13);
impl_append!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14);
impl_append!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15);

impl Arguments for () {
    const LEN: usize = 0;

    fn into_values(self) -> Vec<Value> {
        Vec::new()
    }
}

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

macro_rules! impl_arguments {
    ($($T:ident),+) => {
        impl<$($T: Into<Value>),+> Arguments for ($($T,)+) {
            const LEN: usize = count!($($T)+);

            #[allow(non_snake_case)]
            fn into_values(self) -> Vec<Value> {
                let ($($T,)+) = self;
                vec![$($T.into()),+]
            }
        }
    };
}

impl_arguments!(T1);
impl_arguments!(T1, T2);
impl_arguments!(T1, T2, T3);
impl_arguments!(T1, T2, T3, T4);
impl_arguments!(T1, T2, T3, T4, T5);
impl_arguments!(T1, T2, T3, T4, T5, T6);
impl_arguments!(T1, T2, T3, T4, T5, T6, T7);
impl_arguments!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_arguments!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_arguments!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_arguments!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_arguments!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);
impl_arguments!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13);
impl_arguments!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14);
impl_arguments!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15);
impl_arguments!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16);
