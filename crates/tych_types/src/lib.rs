//! Tych Types - composable type descriptors.
//!
//! A descriptor answers two questions about a runtime [`Value`]:
//! does the value conform, and how should the expected type be named in an
//! error message. Three descriptors ship with the crate:
//!
//! | Descriptor  | Accepts                                   | Renders as              |
//! |-------------|-------------------------------------------|-------------------------|
//! | `Primitive` | instances of one [`Class`]                | `int`                   |
//! | `OptionTy`  | `None`, or whatever the inner accepts     | `OptionTy(int)`         |
//! | `UnionTy`   | whatever any member accepts               | `UnionTy([int, str])`   |
//!
//! Descriptors nest without limit and are immutable once built. New
//! descriptors are added by implementing [`TypeDescriptor`] and wrapping the
//! result in a [`Ty`]; nothing that consumes a `Ty` needs to change.
//!
//! # Bare classes
//!
//! Anywhere a descriptor is expected a bare [`Class`] may be used instead.
//! [`Annotation`] records which form was written and resolves bare classes
//! into `Primitive` once, at construction time.

mod descriptor;
mod stack;

pub use descriptor::{Annotation, OptionTy, Primitive, Ty, TypeDescriptor, UnionTy};
pub use stack::ensure_sufficient_stack;

// Re-export the value model so descriptor users need only one import
pub use tych_value::{Builtin, Class, Value};

/// Build a [`UnionTy`] from one or more descriptors or bare classes.
///
/// ```text
/// let num = union_ty!(Class::int(), Class::float());
/// let maybe = union_ty!(OptionTy::new(Class::int()), Class::str());
/// ```
///
/// An empty union does not match any arm and fails to compile.
#[macro_export]
macro_rules! union_ty {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::UnionTy::new(
            $first,
            ::std::vec::Vec::<$crate::Ty>::from([$($crate::Ty::from($rest)),*]),
        )
    };
}
