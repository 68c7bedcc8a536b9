//! ormcheck_binder: Symbol model and call-argument binding.
//!
//! Reconciles a call site's actual arguments against the callee class's
//! initializer parameter list, producing a parameter-name to argument
//! mapping. Returning `None` means "this call site is not analyzable by
//! the plugin" and the host falls back to its default inference.

mod binder;
mod symbol;

pub use binder::{bind_call_arguments, BindingResult, BoundArg, INIT_METHOD};
pub use symbol::{Signature, Symbol, SymbolStore, SymbolTable};
