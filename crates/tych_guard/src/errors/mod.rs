//! Error types for guarded calls.
//!
//! # Structured Error Categories
//!
//! Each failure a guard can report has its own type with structured fields,
//! so callers can match on what went wrong instead of parsing messages. The
//! `Display` output of each variant is fixed and forms part of the public
//! contract.
//!
//! | Type             | Raised when                                   | Phase            |
//! |------------------|-----------------------------------------------|------------------|
//! | `SignatureError` | a signature or contract cannot be built       | wrap time        |
//! | `BindingError`   | call arguments do not fit the signature       | `Binding`        |
//! | `TypeMismatch`   | a parameter or the result fails its type      | `ParamChecking` / `ReturnChecking` |
//! | `GuardError::Raised` | the wrapped callable itself failed        | `Invoking`       |

use std::error::Error as StdError;

use thiserror::Error;

use crate::signature::ParamKind;

/// Steps of a single guarded call, in order.
///
/// A call moves `Idle → Binding → ParamChecking → Invoking → ReturnChecking
/// → Done`, or stops at the first step that fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CallPhase {
    Idle,
    Binding,
    ParamChecking,
    Invoking,
    ReturnChecking,
    Done,
}

/// Call arguments that cannot be matched against a signature.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("too many positional arguments")]
    TooManyPositional,
    #[error("missing a required argument: '{name}'")]
    MissingArgument { name: String },
    #[error("multiple values for argument '{name}'")]
    MultipleValues { name: String },
    #[error("got an unexpected keyword argument '{name}'")]
    UnexpectedKeyword { name: String },
    #[error("'{name}' parameter is positional only, but was passed as a keyword")]
    PositionalOnlyAsKeyword { name: String },
    #[error("keyword argument repeated: '{name}'")]
    RepeatedKeyword { name: String },
}

/// A value that does not satisfy its declared type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeMismatch {
    #[error("parameter '{param}' of function '{func}' should have type {expected}")]
    Parameter {
        param: String,
        func: String,
        expected: String,
    },
    #[error("function '{func}' should return None")]
    ReturnNone { func: String },
    #[error("function '{func}' should have return type {expected}")]
    Return { func: String, expected: String },
}

impl TypeMismatch {
    /// Name of the function whose contract was violated.
    pub fn func(&self) -> &str {
        match self {
            TypeMismatch::Parameter { func, .. }
            | TypeMismatch::ReturnNone { func }
            | TypeMismatch::Return { func, .. } => func,
        }
    }

    pub fn phase(&self) -> CallPhase {
        match self {
            TypeMismatch::Parameter { .. } => CallPhase::ParamChecking,
            TypeMismatch::ReturnNone { .. } | TypeMismatch::Return { .. } => {
                CallPhase::ReturnChecking
            }
        }
    }
}

/// A signature or contract that cannot be constructed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("duplicate parameter name: '{name}'")]
    DuplicateName { name: String },
    #[error("wrong parameter order: {kind} parameter '{name}' follows a {after} parameter")]
    WrongOrder {
        name: String,
        kind: ParamKind,
        after: ParamKind,
    },
    #[error("more than one {kind} parameter: '{name}'")]
    DuplicateVariadic { name: String, kind: ParamKind },
    #[error("non-default argument '{name}' follows default argument")]
    NonDefaultAfterDefault { name: String },
    #[error("{kind} parameter '{name}' cannot have a default value")]
    VariadicDefault { name: String, kind: ParamKind },
    #[error("annotation for '{param}' of function '{func}' names no parameter")]
    UnknownAnnotation { func: String, param: String },
}

/// Any failure of a guarded call.
#[derive(Debug, Error)]
pub enum GuardError {
    #[error(transparent)]
    Binding(#[from] BindingError),
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),
    /// The wrapped callable failed on its own; passed through unchanged.
    #[error(transparent)]
    Raised(Box<dyn StdError + Send + Sync>),
}

impl GuardError {
    /// Wrap an error raised by a callable body.
    pub fn raised(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        GuardError::Raised(err.into())
    }

    /// The call phase of the check that produced this error.
    ///
    /// Errors returned by a wrapped callable pass through unchanged, so a
    /// binding or type error from a nested call made inside a body keeps the
    /// phase of that nested check rather than `Invoking`. Only `Raised`
    /// errors map to `Invoking`.
    pub fn phase(&self) -> CallPhase {
        match self {
            GuardError::Binding(_) => CallPhase::Binding,
            GuardError::TypeMismatch(mismatch) => mismatch.phase(),
            GuardError::Raised(_) => CallPhase::Invoking,
        }
    }

    pub fn as_type_mismatch(&self) -> Option<&TypeMismatch> {
        match self {
            GuardError::TypeMismatch(mismatch) => Some(mismatch),
            _ => None,
        }
    }

    pub fn as_binding(&self) -> Option<&BindingError> {
        match self {
            GuardError::Binding(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
