//! Per-call-site refinement hooks.
//!
//! The host invokes these from its own analysis hooks, one call site or
//! string literal at a time. Inputs are read-only snapshots owned by the
//! host; the only thing a hook ever creates is a type in the type table.

use crate::options::PluginOptions;
use crate::{FOREIGN_KEY_FULLNAME, ONETOONE_FIELD_FULLNAME};
use ormcheck_ast::node::CallSite;
use ormcheck_ast::types::TypeId;
use ormcheck_binder::{bind_call_arguments, BindingResult, SymbolStore};
use ormcheck_core::StringInterner;
use ormcheck_module::{resolve_model_reference_in, ModuleTable};
use ormcheck_types::TypeTable;

/// Keyword naming the relation target in a field constructor.
pub const TO_ARG: &str = "to";
/// Keyword marking a field as nullable.
pub const NULL_ARG: &str = "null";

/// Whether a callee fullname is a relation field the plugin refines.
pub fn refines_relation_field(fullname: &str) -> bool {
    matches!(fullname, FOREIGN_KEY_FULLNAME | ONETOONE_FIELD_FULLNAME)
}

/// Bind the arguments of a model constructor call.
///
/// Returns the parameter-name to argument mapping used by downstream
/// per-field checks, or `None` when the callee is not a class with a
/// resolvable initializer.
pub fn check_model_init<'a>(
    site: &'a CallSite,
    store: &SymbolStore,
    interner: &StringInterner,
) -> Option<BindingResult<'a>> {
    if !store.lookup(site.callee)?.is_class_like() {
        return None;
    }
    bind_call_arguments(site, store, interner)
}

/// Resolve a string literal `"app.Model"` into the model's instance type.
pub fn model_type_from_literal(
    raw: &str,
    modules: &ModuleTable,
    store: &SymbolStore,
    types: &mut TypeTable,
    interner: &StringInterner,
    options: &PluginOptions,
) -> Option<TypeId> {
    let class =
        resolve_model_reference_in(raw, modules, store, interner, &options.models_submodule)?;
    Some(types.instance_of(class))
}

/// Infer the value type of a relation field constructor call such as
/// `ForeignKey("blog.Post", null=True)`.
///
/// Binds the call's arguments, resolves a string-literal `to` target into
/// the model class it names, and returns that model's instance type, made
/// optional when the field is nullable. Targets passed as anything other
/// than a string literal are left to the host's default inference.
pub fn foreign_key_target(
    site: &CallSite,
    store: &SymbolStore,
    modules: &ModuleTable,
    types: &mut TypeTable,
    interner: &StringInterner,
    options: &PluginOptions,
) -> Option<TypeId> {
    let bindings = bind_call_arguments(site, store, interner)?;

    let to = bindings.get(&interner.get(TO_ARG)?)?;
    let raw = to.expr.as_string_literal()?;
    let target = model_type_from_literal(raw, modules, store, types, interner, options)?;

    let nullable = options.implicit_nullable_relations
        || interner
            .get(NULL_ARG)
            .and_then(|null| bindings.get(&null))
            .is_some_and(|arg| arg.expr.is_true_literal());

    if nullable {
        Some(types.make_optional(target))
    } else {
        Some(target)
    }
}
