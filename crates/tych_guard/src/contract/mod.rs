//! Invocation contracts: which parameters are checked, and against what.

use smallvec::SmallVec;
use tych_types::{Annotation, Ty};
use tych_value::Value;

use crate::errors::{SignatureError, TypeMismatch};
use crate::signature::{BoundArguments, Signature};

/// Type annotations as declared on a callable.
///
/// Parameters without an annotation are unconstrained. A missing return
/// annotation means the callable must return `None`.
#[derive(Clone, Debug, Default)]
pub struct Annotations {
    params: Vec<(String, Annotation)>,
    returns: Option<Annotation>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotate a parameter. A later annotation for the same name replaces
    /// the earlier one.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, annotation: impl Into<Annotation>) -> Self {
        self.set_param(name.into(), annotation.into());
        self
    }

    #[must_use]
    pub fn returns(mut self, annotation: impl Into<Annotation>) -> Self {
        self.returns = Some(annotation.into());
        self
    }

    pub(crate) fn set_param(&mut self, name: String, annotation: Annotation) {
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = annotation,
            None => self.params.push((name, annotation)),
        }
    }

    pub(crate) fn set_returns(&mut self, annotation: Annotation) {
        self.returns = Some(annotation);
    }

    pub fn params(&self) -> impl Iterator<Item = (&str, &Annotation)> {
        self.params.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn return_annotation(&self) -> Option<&Annotation> {
        self.returns.as_ref()
    }
}

/// Resolved descriptors for one callable, in parameter declaration order.
///
/// Built once at wrap time and shared read-only by every call.
#[derive(Clone, Debug, Default)]
pub struct Contract {
    params: SmallVec<[(String, Ty); 4]>,
    returns: Option<Ty>,
}

impl Contract {
    /// Resolve a callable's annotations against its signature.
    ///
    /// Every annotated name must be a declared parameter.
    pub fn from_annotations(
        func: &str,
        signature: &Signature,
        annotations: &Annotations,
    ) -> Result<Self, SignatureError> {
        for (name, _) in annotations.params() {
            if signature.param(name).is_none() {
                return Err(SignatureError::UnknownAnnotation {
                    func: func.to_string(),
                    param: name.to_string(),
                });
            }
        }

        let params = signature
            .params()
            .iter()
            .filter_map(|param| {
                annotations
                    .params()
                    .find(|(name, _)| *name == param.name)
                    .map(|(name, annotation)| (name.to_string(), annotation.clone().resolve()))
            })
            .collect();
        let returns = annotations.return_annotation().cloned().map(Annotation::resolve);

        Ok(Contract { params, returns })
    }

    pub fn param(&self, name: &str) -> Option<&Ty> {
        self.params
            .iter()
            .find_map(|(n, ty)| (n == name).then_some(ty))
    }

    pub fn params(&self) -> impl Iterator<Item = (&str, &Ty)> {
        self.params.iter().map(|(n, ty)| (n.as_str(), ty))
    }

    pub fn returns(&self) -> Option<&Ty> {
        self.returns.as_ref()
    }

    /// Check every bound argument that has a descriptor, in declaration order.
    pub fn check_params(&self, func: &str, bound: &BoundArguments) -> Result<(), TypeMismatch> {
        for (name, value) in bound.iter() {
            let Some(ty) = self.param(name) else {
                continue;
            };
            if !ty.conforms(value) {
                return Err(TypeMismatch::Parameter {
                    param: name.to_string(),
                    func: func.to_string(),
                    expected: ty.describe(),
                });
            }
        }
        Ok(())
    }

    /// Check a result against the declared return type, or against `None`
    /// when no return type is declared.
    pub fn check_return(&self, func: &str, value: &Value) -> Result<(), TypeMismatch> {
        match &self.returns {
            None if !value.is_none() => Err(TypeMismatch::ReturnNone {
                func: func.to_string(),
            }),
            Some(ty) if !ty.conforms(value) => Err(TypeMismatch::Return {
                func: func.to_string(),
                expected: ty.describe(),
            }),
            _ => Ok(()),
        }
    }
}
