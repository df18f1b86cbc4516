//! Runtime values checked by descriptors.
//!
//! All heap allocations go through factory methods on `Value`:
//!
//! ```text
//! let s = Value::string("hello");        // OK
//! let xs = Value::list(vec![]);          // OK
//! let s = Value::Str(Heap::new(...));    // ERROR: Heap::new is private
//! ```

mod heap;

use std::fmt;

use rustc_hash::FxHashMap;

use crate::class::{Builtin, Class};

pub use heap::Heap;

/// An instance of a user class.
#[derive(Clone, Debug)]
pub struct Object {
    pub class: Class,
    pub fields: FxHashMap<String, Value>,
}

impl Object {
    pub fn new(class: Class) -> Self {
        Object {
            class,
            fields: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    /// The absence-of-value marker.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),

    Str(Heap<String>),
    Bytes(Heap<Vec<u8>>),
    List(Heap<Vec<Value>>),
    Tuple(Heap<Vec<Value>>),
    /// String-keyed mapping, in insertion order.
    Dict(Heap<Vec<(String, Value)>>),
    /// Instance of a user class.
    Object(Heap<Object>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(Heap::new(b.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    /// Create a dict value. Later duplicate keys replace earlier ones in place.
    pub fn dict(entries: impl IntoIterator<Item = (String, Value)>) -> Self {
        let mut out: Vec<(String, Value)> = Vec::new();
        for (key, value) in entries {
            match out.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => out.push((key, value)),
            }
        }
        Value::Dict(Heap::new(out))
    }

    #[inline]
    pub fn object(object: Object) -> Self {
        Value::Object(Heap::new(object))
    }
}

// Value Methods

impl Value {
    /// Whether this is the absence-of-value marker.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// The value's concrete class.
    pub fn class(&self) -> Class {
        match self {
            Value::Object(obj) => obj.class.clone(),
            _ => Class::builtin(self.builtin_class()),
        }
    }

    /// Instance-of check: the value's class is `class` or derives from it.
    pub fn is_instance(&self, class: &Class) -> bool {
        match (self, class.as_builtin()) {
            (_, Some(Builtin::Object)) => true,
            // Built-in values never have user classes in their ancestry
            (Value::Object(_), _) | (_, Some(_)) => self.class().is_subclass_of(class),
            (_, None) => false,
        }
    }

    /// Name of the value's concrete class.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Object(obj) => obj.class.name(),
            _ => self.builtin_class().name(),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Truthiness: empty, zero and absent values are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Bytes(b) => !b.is_empty(),
            Value::List(items) | Value::Tuple(items) => !items.is_empty(),
            Value::Dict(entries) => !entries.is_empty(),
            Value::Object(_) => true,
        }
    }

    fn builtin_class(&self) -> Builtin {
        match self {
            Value::None => Builtin::NoneType,
            Value::Bool(_) => Builtin::Bool,
            Value::Int(_) => Builtin::Int,
            Value::Float(_) => Builtin::Float,
            Value::Str(_) => Builtin::Str,
            Value::Bytes(_) => Builtin::Bytes,
            Value::List(_) => Builtin::List,
            Value::Tuple(_) => Builtin::Tuple,
            Value::Dict(_) => Builtin::Dict,
            Value::Object(_) => Builtin::Object,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::None, Into::into)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::Bytes(a), Value::Bytes(b)) => **a == **b,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => **a == **b,
            (Value::Dict(a), Value::Dict(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(k, v)| {
                        b.iter().any(|(k2, v2)| k == k2 && v == v2)
                    })
            }
            // Objects compare by identity
            (Value::Object(a), Value::Object(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Bytes(b) => write!(f, "Bytes({:?})", &**b),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Tuple(items) => write!(f, "Tuple({:?})", &**items),
            Value::Dict(entries) => write!(f, "Dict({:?})", &**entries),
            Value::Object(obj) => write!(f, "Object({})", obj.class.name()),
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{:?}", &**s),
            Value::Bytes(b) => {
                write!(f, "b\"")?;
                for byte in b.iter() {
                    write!(f, "{}", std::ascii::escape_default(*byte))?;
                }
                write!(f, "\"")
            }
            Value::List(items) => {
                write!(f, "[")?;
                write_seq(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_seq(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Object(obj) => write!(f, "<{} object>", obj.class.name()),
        }
    }
}

#[cfg(test)]
mod tests;
