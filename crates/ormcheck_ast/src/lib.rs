//! ormcheck_ast: Host-facade value types.
//!
//! The host type checker owns the real AST and type objects. This crate
//! defines the read-only shapes it hands across the hook boundary: id
//! handles, symbol/type flags, an expression facade, and the call-site
//! description. Nothing here is retained or mutated by the analysis code.

pub mod node;
pub mod types;

pub use node::{CallSite, Expr};
pub use types::{SymbolFlags, SymbolId, TypeFlags, TypeId};
