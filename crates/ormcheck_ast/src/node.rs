//! Expression facade and call-site description.
//!
//! The host hands each hook a snapshot of the call site being checked:
//! per-argument candidate expressions and candidate types (overload
//! resolution may leave more than one candidate per slot), the keyword
//! names, and the callee symbol. The snapshot is borrowed for the duration
//! of one hook call and never mutated.

use crate::types::{SymbolId, TypeId};
use ormcheck_core::InternedString;

/// Read-only view of a host expression. Only the shapes the plugin ever
/// inspects are distinguished; everything else is `Opaque`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// String literal, e.g. `"blog.Post"`.
    StringLiteral { value: String },
    /// Integer literal.
    IntegerLiteral { value: i64 },
    /// Boolean literal (`True` / `False`).
    BooleanLiteral { value: bool },
    /// A bare name reference.
    NameReference { name: InternedString },
    /// Any expression the plugin has no reason to look inside.
    Opaque,
}

impl Expr {
    /// The literal text if this is a string literal.
    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Expr::StringLiteral { value } => Some(value),
            _ => None,
        }
    }

    /// True exactly for the `True` literal.
    pub fn is_true_literal(&self) -> bool {
        matches!(self, Expr::BooleanLiteral { value: true })
    }
}

/// One call site, as supplied by the host's per-call hook.
///
/// The three sequences are parallel: slot `i` of `args` holds the candidate
/// expressions for argument `i`, slot `i` of `arg_types` the candidate
/// types, and slot `i` of `arg_names` the keyword name (`None` for a
/// positional argument). A slot may be empty in either candidate dimension
/// when the host already failed to analyze that argument.
#[derive(Debug, Clone)]
pub struct CallSite {
    /// Candidate expressions per argument slot.
    pub args: Vec<Vec<Expr>>,
    /// Candidate inferred types per argument slot.
    pub arg_types: Vec<Vec<TypeId>>,
    /// Keyword name per slot; `None` means positional.
    pub arg_names: Vec<Option<InternedString>>,
    /// The class being constructed (or callable being called).
    pub callee: SymbolId,
}

impl CallSite {
    pub fn new(callee: SymbolId) -> Self {
        Self {
            args: Vec::new(),
            arg_types: Vec::new(),
            arg_names: Vec::new(),
            callee,
        }
    }

    /// Append a positional argument slot.
    pub fn push_positional(&mut self, exprs: Vec<Expr>, types: Vec<TypeId>) {
        self.args.push(exprs);
        self.arg_types.push(types);
        self.arg_names.push(None);
    }

    /// Append a keyword argument slot.
    pub fn push_keyword(&mut self, name: InternedString, exprs: Vec<Expr>, types: Vec<TypeId>) {
        self.args.push(exprs);
        self.arg_types.push(types);
        self.arg_names.push(Some(name));
    }

    /// Number of argument slots.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ormcheck_core::StringInterner;

    #[test]
    fn test_push_keeps_sequences_parallel() {
        let interner = StringInterner::new();
        let mut site = CallSite::new(SymbolId(0));
        site.push_positional(vec![Expr::Opaque], vec![TypeId(0)]);
        site.push_keyword(
            interner.intern("null"),
            vec![Expr::BooleanLiteral { value: true }],
            vec![TypeId(1)],
        );

        assert_eq!(site.len(), 2);
        assert_eq!(site.arg_names[0], None);
        assert!(site.arg_names[1].is_some());
        assert_eq!(site.arg_types[1], vec![TypeId(1)]);
    }

    #[test]
    fn test_expr_accessors() {
        let lit = Expr::StringLiteral { value: "blog.Post".into() };
        assert_eq!(lit.as_string_literal(), Some("blog.Post"));
        assert!(!lit.is_true_literal());
        assert!(Expr::BooleanLiteral { value: true }.is_true_literal());
        assert!(!Expr::BooleanLiteral { value: false }.is_true_literal());
    }
}
