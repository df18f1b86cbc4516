//! Tych Guard - runtime enforcement of declared parameter and return types.
//!
//! This crate provides:
//! - `Signature`, `Param`, `Args`: declared parameters and the binding of one
//!   call's arguments to them
//! - `Annotations`, `Contract`: declared types, resolved once per callable
//! - `Callable`, `Function`: callables the guard can wrap
//! - `typecheck` / `Typechecked`: the wrapper that checks every call
//!
//! # Example
//!
//! ```text
//! let f = Function::builder("f")
//!     .annotated(Param::positional("x"), Class::int())
//!     .body(|_| Ok(Value::None))?;
//! let f = typecheck(f)?;
//!
//! f.call(&Args::new().arg(5))?;                  // Ok(None)
//! f.call(&Args::new().arg("a")).unwrap_err();
//! // parameter 'x' of function 'f' should have type int
//! ```
//!
//! # Concurrency
//!
//! A `Typechecked` holds only immutable data. It can be shared across threads
//! and called concurrently whenever the wrapped callable allows it.

mod contract;
mod errors;
mod guard;
mod signature;

use std::sync::Once;

pub use contract::{Annotations, Contract};
pub use errors::{BindingError, CallPhase, GuardError, SignatureError, TypeMismatch};
pub use guard::{typecheck, Body, Callable, Function, FunctionBuilder, Typechecked};
pub use signature::{Args, BoundArguments, Param, ParamKind, Signature, SignatureBuilder};

// Re-export the descriptor and value model so most users need one import
pub use tych_types::{
    union_ty, Annotation, Builtin, Class, OptionTy, Primitive, Ty, TypeDescriptor, UnionTy, Value,
};
pub use tych_value::Object;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tych_guard=debug` or `RUST_LOG=tych_types=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
