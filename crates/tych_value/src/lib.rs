//! Tych Value - runtime values and classifiers for tychonov.
//!
//! This crate provides the dynamic side of runtime type checking:
//! - `Value`: the runtime values passed to and returned from checked callables
//! - `Class`: classifiers that values are tested against
//! - `Value::is_instance`: the instance-of check every descriptor bottoms out in
//!
//! # Absence
//!
//! `Value::None` is the designated "no value" marker. It is an instance of
//! `NoneType` (and of `object`), and it is what a callable without a declared
//! return type must produce.
//!
//! # Thread Safety
//!
//! Heap payloads are reference counted with `Arc`, and classes are immutable
//! once created, so values and classes can be shared freely across threads.

mod class;
mod value;

pub use class::{Ancestors, Builtin, Class};
pub use value::{Heap, Object, Value};
