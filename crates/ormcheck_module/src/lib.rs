//! ormcheck_module: Analyzed-module table and string model resolution.
//!
//! Resolves references of the form `"app.Model"` against the table of
//! modules the host has already analyzed, scoped to the app's conventional
//! models submodule. "Not found" is a normal outcome: analysis order means
//! many legitimate references resolve to nothing on a given pass, and the
//! host simply keeps its default inference.

use ormcheck_ast::types::SymbolId;
use ormcheck_binder::{SymbolStore, SymbolTable};
use ormcheck_core::StringInterner;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Conventional submodule that holds an app's model declarations.
pub const MODELS_SUBMODULE: &str = "models";

/// A malformed model reference. Only surfaced by [`QualifiedRef::parse`];
/// the resolution entry points fail closed instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RefError {
    #[error("model reference must look like \"app.Model\", got {0:?}")]
    Malformed(String),
}

/// A parsed two-part model reference: `"blog.Post"` is app `blog`, model
/// `Post`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedRef<'a> {
    pub app: &'a str,
    pub model: &'a str,
}

impl<'a> QualifiedRef<'a> {
    /// Parse `raw` into its two components. Exactly one dot separating two
    /// non-empty parts is required; anything else is malformed.
    pub fn parse(raw: &'a str) -> Result<Self, RefError> {
        match raw.split_once('.') {
            Some((app, model))
                if !app.is_empty() && !model.is_empty() && !model.contains('.') =>
            {
                Ok(Self { app, model })
            }
            _ => Err(RefError::Malformed(raw.to_string())),
        }
    }
}

/// One analyzed module: its dotted path and its top-level names.
#[derive(Debug, Clone)]
pub struct ModuleFile {
    /// Fully-qualified dotted module path, e.g. `blog.models`.
    pub path: String,
    /// Top-level declarations of the module.
    pub names: SymbolTable,
}

impl ModuleFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            names: SymbolTable::new(),
        }
    }
}

/// The table of all modules analyzed so far, keyed by dotted path.
///
/// The host grows this as analysis proceeds across the codebase; the
/// plugin treats it as a read-only snapshot at call time and never assumes
/// it is complete.
#[derive(Debug, Clone, Default)]
pub struct ModuleTable {
    modules: FxHashMap<String, ModuleFile>,
}

impl ModuleTable {
    pub fn new() -> Self {
        Self {
            modules: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, module: ModuleFile) {
        self.modules.insert(module.path.clone(), module);
    }

    pub fn get(&self, path: &str) -> Option<&ModuleFile> {
        self.modules.get(path)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut ModuleFile> {
        self.modules.get_mut(path)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Look up the submodule `<app>.<segment>` if it has been analyzed.
pub fn submodule_of<'t>(
    table: &'t ModuleTable,
    app: &str,
    segment: &str,
) -> Option<&'t ModuleFile> {
    table.get(&format!("{}.{}", app, segment))
}

/// Look up `<app>.models` if it has been analyzed.
pub fn models_module_of<'t>(table: &'t ModuleTable, app: &str) -> Option<&'t ModuleFile> {
    submodule_of(table, app, MODELS_SUBMODULE)
}

/// Resolve `"app.Model"` to a class-like declaration, searching the app's
/// `segment` submodule.
///
/// Fails closed: malformed references, unanalyzed modules, unknown names,
/// and non-class symbols all yield `None`.
pub fn resolve_model_reference_in(
    raw: &str,
    table: &ModuleTable,
    store: &SymbolStore,
    interner: &StringInterner,
    segment: &str,
) -> Option<SymbolId> {
    let qref = QualifiedRef::parse(raw).ok()?;
    let module = submodule_of(table, qref.app, segment)?;
    // A name never interned in this session cannot be declared anywhere.
    let name = interner.get(qref.model)?;
    let symbol_id = module.names.get(&name)?;
    let symbol = store.lookup(symbol_id)?;
    if !symbol.is_class_like() {
        return None;
    }
    Some(symbol_id)
}

/// Resolve `"app.Model"` against the conventional models submodule.
pub fn resolve_model_reference(
    raw: &str,
    table: &ModuleTable,
    store: &SymbolStore,
    interner: &StringInterner,
) -> Option<SymbolId> {
    resolve_model_reference_in(raw, table, store, interner, MODELS_SUBMODULE)
}
