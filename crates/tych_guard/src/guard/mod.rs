//! Callables and the type-checking wrapper around them.
//!
//! [`Callable`] is the boundary between the guard and whatever produces
//! callables: it exposes a name, a signature and declared annotations, and
//! can be called. [`Function`] is the concrete callable built from a Rust
//! closure. [`Typechecked`] wraps any callable and is itself a callable with
//! the same name, signature and annotations.

use std::fmt;
use std::sync::Arc;

use tych_types::Annotation;
use tych_value::Value;

use crate::contract::{Annotations, Contract};
use crate::errors::{CallPhase, GuardError, SignatureError};
use crate::signature::{Args, BoundArguments, Param, Signature};

/// Something that can be called with [`Args`].
pub trait Callable: Send + Sync {
    /// Name reported in error messages.
    fn name(&self) -> &str;

    fn signature(&self) -> &Signature;

    fn annotations(&self) -> &Annotations;

    fn call(&self, args: &Args) -> Result<Value, GuardError>;
}

impl<C: Callable + ?Sized> Callable for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn signature(&self) -> &Signature {
        (**self).signature()
    }

    fn annotations(&self) -> &Annotations {
        (**self).annotations()
    }

    fn call(&self, args: &Args) -> Result<Value, GuardError> {
        (**self).call(args)
    }
}

impl<C: Callable + ?Sized> Callable for Arc<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn signature(&self) -> &Signature {
        (**self).signature()
    }

    fn annotations(&self) -> &Annotations {
        (**self).annotations()
    }

    fn call(&self, args: &Args) -> Result<Value, GuardError> {
        (**self).call(args)
    }
}

/// Body of a [`Function`]: receives its arguments with defaults applied.
pub type Body = dyn Fn(&BoundArguments) -> Result<Value, GuardError> + Send + Sync;

/// A named callable backed by a closure.
#[derive(Clone)]
pub struct Function {
    name: String,
    signature: Signature,
    annotations: Annotations,
    body: Arc<Body>,
}

impl Function {
    pub fn builder(name: impl Into<String>) -> FunctionBuilder {
        FunctionBuilder {
            name: name.into(),
            params: Vec::new(),
            annotations: Annotations::new(),
        }
    }
}

impl Callable for Function {
    fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    fn call(&self, args: &Args) -> Result<Value, GuardError> {
        let mut bound = self.signature.bind(args)?;
        bound.apply_defaults(&self.signature);
        (self.body)(&bound)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .field("annotations", &self.annotations)
            .finish_non_exhaustive()
    }
}

/// Declares a [`Function`] parameter by parameter.
///
/// ```text
/// let f = Function::builder("f")
///     .annotated(Param::positional("x"), Class::int())
///     .returns(Class::int())
///     .body(|args| Ok(args.value("x")))?;
/// ```
pub struct FunctionBuilder {
    name: String,
    params: Vec<Param>,
    annotations: Annotations,
}

impl FunctionBuilder {
    /// Add an unannotated parameter.
    #[must_use]
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a parameter with a declared type.
    #[must_use]
    pub fn annotated(mut self, param: Param, annotation: impl Into<Annotation>) -> Self {
        self.annotations
            .set_param(param.name.clone(), annotation.into());
        self.params.push(param);
        self
    }

    /// Declare the return type. Without one, the function must return `None`.
    #[must_use]
    pub fn returns(mut self, annotation: impl Into<Annotation>) -> Self {
        self.annotations.set_returns(annotation.into());
        self
    }

    /// Finish with the function body.
    pub fn body<F>(self, body: F) -> Result<Function, SignatureError>
    where
        F: Fn(&BoundArguments) -> Result<Value, GuardError> + Send + Sync + 'static,
    {
        Ok(Function {
            signature: Signature::new(self.params)?,
            name: self.name,
            annotations: self.annotations,
            body: Arc::new(body),
        })
    }
}

/// A callable whose arguments and result are checked on every call.
///
/// Calls run `Binding → ParamChecking → Invoking → ReturnChecking` and stop at
/// the first failure. The wrapped callable is not invoked when binding or a
/// parameter check fails, and its result is not returned when the return
/// check fails. Errors raised by the wrapped callable pass through unchanged.
pub struct Typechecked<C> {
    inner: C,
    contract: Contract,
}

impl<C: Callable> Typechecked<C> {
    /// Read the callable's annotations once and build its contract.
    pub fn new(inner: C) -> Result<Self, SignatureError> {
        let contract =
            Contract::from_annotations(inner.name(), inner.signature(), inner.annotations())?;
        tracing::debug!(
            func = inner.name(),
            checked_params = contract.params().count(),
            returns = ?contract.returns().map(tych_types::Ty::describe),
            "wrapped callable"
        );
        Ok(Typechecked { inner, contract })
    }

    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Callable> Callable for Typechecked<C> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn signature(&self) -> &Signature {
        self.inner.signature()
    }

    fn annotations(&self) -> &Annotations {
        self.inner.annotations()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(func = self.inner.name()))]
    fn call(&self, args: &Args) -> Result<Value, GuardError> {
        let func = self.inner.name();

        tracing::trace!(phase = ?CallPhase::Binding);
        let bound = self.inner.signature().bind(args)?;

        tracing::trace!(phase = ?CallPhase::ParamChecking, bound = bound.len());
        if let Err(mismatch) = self.contract.check_params(func, &bound) {
            tracing::debug!(%mismatch, "parameter check failed");
            return Err(mismatch.into());
        }

        tracing::trace!(phase = ?CallPhase::Invoking);
        let result = self.inner.call(args)?;

        tracing::trace!(phase = ?CallPhase::ReturnChecking, %result);
        if let Err(mismatch) = self.contract.check_return(func, &result) {
            tracing::debug!(%mismatch, "return check failed");
            return Err(mismatch.into());
        }

        tracing::trace!(phase = ?CallPhase::Done);
        Ok(result)
    }
}

impl<C: Callable + fmt::Debug> fmt::Debug for Typechecked<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typechecked")
            .field("inner", &self.inner)
            .field("contract", &self.contract)
            .finish()
    }
}

/// Wrap a callable so every call is checked against its declared annotations.
pub fn typecheck<C: Callable>(callable: C) -> Result<Typechecked<C>, SignatureError> {
    Typechecked::new(callable)
}
