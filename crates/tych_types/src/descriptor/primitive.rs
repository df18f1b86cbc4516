use tych_value::{Class, Value};

use super::TypeDescriptor;

/// Accepts instances of a single class (and of its subclasses).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Primitive {
    class: Class,
}

impl Primitive {
    pub fn new(class: impl Into<Class>) -> Self {
        Primitive {
            class: class.into(),
        }
    }

    pub fn class(&self) -> &Class {
        &self.class
    }
}

impl TypeDescriptor for Primitive {
    fn conforms(&self, value: &Value) -> bool {
        value.is_instance(&self.class)
    }

    fn describe(&self) -> String {
        self.class.name().to_string()
    }
}
