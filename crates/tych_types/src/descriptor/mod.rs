//! The descriptor interface and its shared handle.

mod option;
mod primitive;
mod union;

use std::fmt;
use std::sync::Arc;

use tych_value::{Builtin, Class, Value};

use crate::stack::ensure_sufficient_stack;

pub use option::OptionTy;
pub use primitive::Primitive;
pub use union::UnionTy;

/// A description of acceptable values.
///
/// Implementations must be pure: `conforms` may not mutate anything, and
/// `describe` must return the same text every time it is called on the same
/// descriptor. Both methods are required; there is no fallback behavior.
pub trait TypeDescriptor: fmt::Debug + Send + Sync {
    /// Whether `value` satisfies this descriptor.
    fn conforms(&self, value: &Value) -> bool;

    /// Human-readable name of the expected type, used in error messages.
    fn describe(&self) -> String;
}

/// Shared, immutable handle to a descriptor.
///
/// `Ty` is what combinators hold as children and what contracts store per
/// parameter. Cloning is a reference count bump. Recursion through a `Ty`
/// is stack-safe at any nesting depth.
#[derive(Clone)]
pub struct Ty(Arc<dyn TypeDescriptor>);

impl Ty {
    /// Wrap any descriptor, including ones defined outside this crate.
    pub fn new<D: TypeDescriptor + 'static>(descriptor: D) -> Self {
        Ty(Arc::new(descriptor))
    }

    pub fn conforms(&self, value: &Value) -> bool {
        let ok = ensure_sufficient_stack(|| self.0.conforms(value));
        tracing::trace!(%value, conforms = ok, "descriptor check");
        ok
    }

    pub fn describe(&self) -> String {
        ensure_sufficient_stack(|| self.0.describe())
    }

    /// Borrow the underlying descriptor.
    pub fn descriptor(&self) -> &dyn TypeDescriptor {
        &*self.0
    }

    /// Whether two handles point at the same descriptor instance.
    pub fn ptr_eq(a: &Ty, b: &Ty) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// A type annotation as written: a descriptor, or a bare class.
///
/// Bare classes are resolved to [`Primitive`] by [`Annotation::resolve`] so
/// that checking never needs to ask which form it was given.
#[derive(Clone, Debug)]
pub enum Annotation {
    Descriptor(Ty),
    Bare(Class),
}

impl Annotation {
    /// Resolve into a uniform descriptor handle.
    pub fn resolve(self) -> Ty {
        match self {
            Annotation::Descriptor(ty) => ty,
            Annotation::Bare(class) => Ty::new(Primitive::new(class)),
        }
    }
}

impl From<Ty> for Annotation {
    fn from(ty: Ty) -> Self {
        Annotation::Descriptor(ty)
    }
}

impl From<Class> for Annotation {
    fn from(class: Class) -> Self {
        Annotation::Bare(class)
    }
}

impl From<Builtin> for Annotation {
    fn from(builtin: Builtin) -> Self {
        Annotation::Bare(Class::builtin(builtin))
    }
}

impl From<Annotation> for Ty {
    fn from(annotation: Annotation) -> Self {
        annotation.resolve()
    }
}

impl From<Class> for Ty {
    fn from(class: Class) -> Self {
        Annotation::Bare(class).resolve()
    }
}

impl From<Builtin> for Ty {
    fn from(builtin: Builtin) -> Self {
        Annotation::from(builtin).resolve()
    }
}

/// Conversions for the concrete descriptors shipped with this crate.
macro_rules! impl_descriptor_conversions {
    ($($descriptor:ty),* $(,)?) => {
        $(
            impl From<$descriptor> for Ty {
                fn from(descriptor: $descriptor) -> Self {
                    Ty::new(descriptor)
                }
            }

            impl From<$descriptor> for Annotation {
                fn from(descriptor: $descriptor) -> Self {
                    Annotation::Descriptor(Ty::new(descriptor))
                }
            }
        )*
    };
}

impl_descriptor_conversions!(Primitive, OptionTy, UnionTy);
