//! Classifiers for runtime values.
//!
//! A `Class` is anything a value can be tested against with an instance-of
//! check. Built-in classes are plain tags; user classes are reference counted
//! and compared by identity, so two classes that share a name are still
//! distinct classifiers.
//!
//! # Hierarchy
//!
//! ```text
//! object
//! ├── NoneType
//! ├── int
//! │   └── bool
//! ├── float, str, bytes, list, tuple, dict
//! └── <user classes>
//! ```

use std::fmt;
use std::sync::Arc;

/// Built-in classes known to every value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Object,
    NoneType,
    Bool,
    Int,
    Float,
    Str,
    Bytes,
    List,
    Tuple,
    Dict,
}

impl Builtin {
    /// Every built-in class, root first.
    pub const ALL: [Builtin; 10] = [
        Builtin::Object,
        Builtin::NoneType,
        Builtin::Bool,
        Builtin::Int,
        Builtin::Float,
        Builtin::Str,
        Builtin::Bytes,
        Builtin::List,
        Builtin::Tuple,
        Builtin::Dict,
    ];

    /// The class name as it appears in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Object => "object",
            Builtin::NoneType => "NoneType",
            Builtin::Bool => "bool",
            Builtin::Int => "int",
            Builtin::Float => "float",
            Builtin::Str => "str",
            Builtin::Bytes => "bytes",
            Builtin::List => "list",
            Builtin::Tuple => "tuple",
            Builtin::Dict => "dict",
        }
    }

    /// Direct base class. `object` is the only root.
    fn base(self) -> Option<Builtin> {
        match self {
            Builtin::Object => None,
            // bool is a subclass of int
            Builtin::Bool => Some(Builtin::Int),
            _ => Some(Builtin::Object),
        }
    }
}

/// A user-defined class: a name and a single base.
struct UserClass {
    name: String,
    base: Class,
}

#[derive(Clone)]
enum Repr {
    Builtin(Builtin),
    User(Arc<UserClass>),
}

/// A classifier that values can be tested against.
///
/// Cloning a `Class` is cheap; clones of a user class keep its identity.
#[derive(Clone)]
pub struct Class(Repr);

impl Class {
    /// Create a user class deriving directly from `object`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::subclass(name, &Class::object())
    }

    /// Create a user class deriving from `base`.
    pub fn subclass(name: impl Into<String>, base: &Class) -> Self {
        Class(Repr::User(Arc::new(UserClass {
            name: name.into(),
            base: base.clone(),
        })))
    }

    #[inline]
    pub const fn builtin(builtin: Builtin) -> Self {
        Class(Repr::Builtin(builtin))
    }

    #[inline]
    pub const fn object() -> Self {
        Self::builtin(Builtin::Object)
    }

    #[inline]
    pub const fn none_type() -> Self {
        Self::builtin(Builtin::NoneType)
    }

    #[inline]
    pub const fn bool() -> Self {
        Self::builtin(Builtin::Bool)
    }

    #[inline]
    pub const fn int() -> Self {
        Self::builtin(Builtin::Int)
    }

    #[inline]
    pub const fn float() -> Self {
        Self::builtin(Builtin::Float)
    }

    #[inline]
    pub const fn str() -> Self {
        Self::builtin(Builtin::Str)
    }

    #[inline]
    pub const fn bytes() -> Self {
        Self::builtin(Builtin::Bytes)
    }

    #[inline]
    pub const fn list() -> Self {
        Self::builtin(Builtin::List)
    }

    #[inline]
    pub const fn tuple() -> Self {
        Self::builtin(Builtin::Tuple)
    }

    #[inline]
    pub const fn dict() -> Self {
        Self::builtin(Builtin::Dict)
    }

    /// The class's own name.
    pub fn name(&self) -> &str {
        match &self.0 {
            Repr::Builtin(b) => b.name(),
            Repr::User(u) => &u.name,
        }
    }

    /// The built-in tag, if this is a built-in class.
    pub fn as_builtin(&self) -> Option<Builtin> {
        match &self.0 {
            Repr::Builtin(b) => Some(*b),
            Repr::User(_) => None,
        }
    }

    /// Direct base class, or `None` for `object`.
    pub fn base(&self) -> Option<Class> {
        match &self.0 {
            Repr::Builtin(b) => b.base().map(Class::builtin),
            Repr::User(u) => Some(u.base.clone()),
        }
    }

    /// Walk this class and its bases, most derived first, ending at `object`.
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: Some(self.clone()),
        }
    }

    /// Whether this class is `other` or derives from it.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        if matches!(other.0, Repr::Builtin(Builtin::Object)) {
            return true;
        }
        self.ancestors().any(|class| class == *other)
    }
}

/// Iterator over a class and its bases. See [`Class::ancestors`].
pub struct Ancestors {
    next: Option<Class>,
}

impl Iterator for Ancestors {
    type Item = Class;

    fn next(&mut self) -> Option<Class> {
        let current = self.next.take()?;
        self.next = current.base();
        Some(current)
    }
}

impl From<Builtin> for Class {
    fn from(builtin: Builtin) -> Self {
        Class::builtin(builtin)
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Repr::Builtin(a), Repr::Builtin(b)) => a == b,
            // User classes are equal only to themselves
            (Repr::User(a), Repr::User(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<class '{}'>", self.name())
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
