//! Call-argument binding.
//!
//! Two passes over the call site's argument slots: positional slots are
//! zipped against the initializer's non-self parameters first, then
//! keyword slots are applied on top. A keyword argument therefore wins
//! over a positional argument for the same parameter name, matching
//! ordinary call-binding semantics.

use crate::symbol::SymbolStore;
use indexmap::IndexMap;
use ormcheck_ast::node::{CallSite, Expr};
use ormcheck_ast::types::TypeId;
use ormcheck_core::{InternedString, StringInterner};

/// Name of the initializer member looked up on the callee class.
pub const INIT_METHOD: &str = "__init__";

/// One bound argument: the first candidate expression and first candidate
/// type of the slot that supplied the parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundArg<'a> {
    pub expr: &'a Expr,
    pub ty: TypeId,
}

/// Parameter name to bound argument, in binding order. At most one entry
/// per parameter name.
pub type BindingResult<'a> = IndexMap<InternedString, BoundArg<'a>>;

/// Reconcile `site`'s actual arguments against the callee's initializer
/// parameters.
///
/// Returns `None` when the callee cannot be bound at all: the callee id is
/// stale, the class has no member table, no `__init__` member, or the
/// initializer has no known signature. That outcome is expected and the
/// caller falls back to default inference.
///
/// Slots with no candidate expression or no candidate type are skipped
/// rather than failing the whole binding; an empty positional slot still
/// consumes its parameter position. Excess positional arguments are
/// dropped, and keyword names are bound whether or not the signature
/// declares them.
pub fn bind_call_arguments<'a>(
    site: &'a CallSite,
    store: &SymbolStore,
    interner: &StringInterner,
) -> Option<BindingResult<'a>> {
    let callee = store.lookup(site.callee)?;
    let members = callee.members.as_ref()?;
    // A class whose initializer was never analyzed has no "__init__" in
    // its member table; if the name was never even interned, no class in
    // the whole session has one.
    let init_name = interner.get(INIT_METHOD)?;
    let init = store.lookup(members.get(&init_name)?)?;
    let signature = init.signature.as_ref()?;

    let slots = site
        .args
        .len()
        .min(site.arg_types.len())
        .min(site.arg_names.len());

    let mut result = BindingResult::new();

    // Pass 1: positional slots, in order, against the non-self parameters.
    let mut params = signature.bindable_params().iter();
    for i in 0..slots {
        if site.arg_names[i].is_some() {
            continue;
        }
        let param = match params.next() {
            Some(&param) => param,
            None => break,
        };
        if let Some(bound) = first_candidate(&site.args[i], &site.arg_types[i]) {
            result.insert(param, bound);
        }
    }

    // Pass 2: keyword slots overwrite any positional binding of the same
    // name.
    for i in 0..slots {
        let name = match site.arg_names[i] {
            Some(name) => name,
            None => continue,
        };
        if let Some(bound) = first_candidate(&site.args[i], &site.arg_types[i]) {
            result.insert(name, bound);
        }
    }

    Some(result)
}

fn first_candidate<'a>(exprs: &'a [Expr], types: &[TypeId]) -> Option<BoundArg<'a>> {
    match (exprs.first(), types.first()) {
        (Some(expr), Some(&ty)) => Some(BoundArg { expr, ty }),
        _ => None,
    }
}
