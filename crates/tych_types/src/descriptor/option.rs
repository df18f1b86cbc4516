use tych_value::Value;

use super::{Ty, TypeDescriptor};

/// Accepts `None` in addition to whatever the inner descriptor accepts.
///
/// Nesting is harmless: `OptionTy(OptionTy(int))` accepts exactly what
/// `OptionTy(int)` accepts.
#[derive(Clone, Debug)]
pub struct OptionTy {
    inner: Ty,
}

impl OptionTy {
    pub fn new(inner: impl Into<Ty>) -> Self {
        OptionTy {
            inner: inner.into(),
        }
    }

    pub fn inner(&self) -> &Ty {
        &self.inner
    }
}

impl TypeDescriptor for OptionTy {
    fn conforms(&self, value: &Value) -> bool {
        value.is_none() || self.inner.conforms(value)
    }

    fn describe(&self) -> String {
        format!("OptionTy({})", self.inner.describe())
    }
}
