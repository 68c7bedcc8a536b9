//! Type system representation.
//!
//! Types are stored in a TypeTable and referenced by TypeId. This avoids
//! lifetime issues with recursive type structures and keeps every type the
//! plugin constructs visible to the host through a plain integer handle.

use ormcheck_ast::types::{SymbolId, TypeFlags, TypeId};

/// A type known to the plugin.
#[derive(Debug, Clone)]
pub struct Type {
    /// Unique identifier.
    pub id: TypeId,
    /// Type flags describing what kind of type this is.
    pub flags: TypeFlags,
    /// The specific kind of type.
    pub kind: TypeKind,
}

/// The specific data for each type kind.
#[derive(Debug, Clone)]
pub enum TypeKind {
    /// Intrinsic types: any, None, never, str, int, bool.
    Intrinsic { name: &'static str },
    /// Instance of a class declaration.
    Instance { class: SymbolId },
    /// Union type (A | B | C).
    Union { types: Vec<TypeId> },
}

/// The type table stores all types and provides access by TypeId.
#[derive(Debug)]
pub struct TypeTable {
    types: Vec<Type>,
    // Well-known types
    pub any_type: TypeId,
    pub none_type: TypeId,
    pub never_type: TypeId,
    pub str_type: TypeId,
    pub int_type: TypeId,
    pub bool_type: TypeId,
}

impl TypeTable {
    pub fn new() -> Self {
        let mut table = Self {
            types: Vec::with_capacity(64),
            any_type: TypeId(0),
            none_type: TypeId(1),
            never_type: TypeId(2),
            str_type: TypeId(3),
            int_type: TypeId(4),
            bool_type: TypeId(5),
        };

        table.create_intrinsic(TypeFlags::ANY, "any");
        table.create_intrinsic(TypeFlags::NONE_TYPE, "None");
        table.create_intrinsic(TypeFlags::NEVER, "never");
        table.create_intrinsic(TypeFlags::STR, "str");
        table.create_intrinsic(TypeFlags::INT, "int");
        table.create_intrinsic(TypeFlags::BOOL, "bool");

        table
    }

    fn create_intrinsic(&mut self, flags: TypeFlags, name: &'static str) -> TypeId {
        self.add_type(flags, TypeKind::Intrinsic { name })
    }

    /// Add a new type to the table and return its ID.
    pub fn add_type(&mut self, flags: TypeFlags, kind: TypeKind) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(Type { id, flags, kind });
        id
    }

    /// Get a type by its ID.
    pub fn get(&self, id: TypeId) -> &Type {
        &self.types[id.index()]
    }

    /// Create (or reuse) the instance type for a class declaration.
    pub fn instance_of(&mut self, class: SymbolId) -> TypeId {
        let existing = self.types.iter().find(|t| {
            matches!(t.kind, TypeKind::Instance { class: c } if c == class)
        });
        if let Some(t) = existing {
            return t.id;
        }
        self.add_type(TypeFlags::INSTANCE, TypeKind::Instance { class })
    }

    /// Build a simplified union of `members`: nested unions are flattened,
    /// duplicates and `never` members are dropped, and a singleton
    /// collapses to its sole member. An empty member list yields `never`.
    pub fn union_of(&mut self, members: &[TypeId]) -> TypeId {
        let mut flat: Vec<TypeId> = Vec::with_capacity(members.len());
        for &member in members {
            match &self.get(member).kind {
                TypeKind::Union { types } => {
                    for &inner in types {
                        if inner != self.never_type && !flat.contains(&inner) {
                            flat.push(inner);
                        }
                    }
                }
                _ => {
                    if member != self.never_type && !flat.contains(&member) {
                        flat.push(member);
                    }
                }
            }
        }

        match flat.len() {
            0 => self.never_type,
            1 => flat[0],
            _ => {
                // Reuse an input union that already has exactly this shape.
                for &member in members {
                    if let TypeKind::Union { types } = &self.get(member).kind {
                        if *types == flat {
                            return member;
                        }
                    }
                }
                self.add_type(TypeFlags::UNION, TypeKind::Union { types: flat })
            }
        }
    }

    /// `T` -> `T | None`, simplified. Idempotent: applying it to a type
    /// that already admits `None` returns that type unchanged.
    pub fn make_optional(&mut self, typ: TypeId) -> TypeId {
        self.union_of(&[typ, self.none_type])
    }

    /// Strip the `None` marker from a union. Non-union types are returned
    /// unchanged; a union that was exactly `None` collapses to `never`.
    pub fn make_required(&mut self, typ: TypeId) -> TypeId {
        let none_type = self.none_type;
        let members = match &self.get(typ).kind {
            TypeKind::Union { types } => types.clone(),
            _ => return typ,
        };
        let required: Vec<TypeId> =
            members.into_iter().filter(|&t| t != none_type).collect();
        self.union_of(&required)
    }

    /// Whether `typ` admits `None` (is the marker itself or a union
    /// containing it).
    pub fn is_optional(&self, typ: TypeId) -> bool {
        if typ == self.none_type {
            return true;
        }
        match &self.get(typ).kind {
            TypeKind::Union { types } => types.contains(&self.none_type),
            _ => false,
        }
    }

    /// Get the total number of types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_optional_non_union() {
        let mut table = TypeTable::new();
        let opt = table.make_optional(table.int_type);
        match &table.get(opt).kind {
            TypeKind::Union { types } => {
                assert_eq!(types, &vec![table.int_type, table.none_type]);
            }
            other => panic!("expected union, got {:?}", other),
        }
    }

    #[test]
    fn test_make_optional_is_idempotent() {
        let mut table = TypeTable::new();
        let once = table.make_optional(table.str_type);
        let twice = table.make_optional(once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_make_optional_of_none_is_none() {
        let mut table = TypeTable::new();
        assert_eq!(table.make_optional(table.none_type), table.none_type);
    }

    #[test]
    fn test_required_round_trip() {
        let mut table = TypeTable::new();
        let inst = table.instance_of(SymbolId(7));
        let opt = table.make_optional(inst);
        assert_eq!(table.make_required(opt), inst);
    }

    #[test]
    fn test_make_required_non_union_unchanged() {
        let mut table = TypeTable::new();
        assert_eq!(table.make_required(table.bool_type), table.bool_type);
    }

    #[test]
    fn test_make_required_keeps_wide_unions() {
        let mut table = TypeTable::new();
        let wide = table.union_of(&[table.int_type, table.str_type, table.none_type]);
        let required = table.make_required(wide);
        match &table.get(required).kind {
            TypeKind::Union { types } => {
                assert_eq!(types, &vec![table.int_type, table.str_type]);
            }
            other => panic!("expected union, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_unions() {
        let mut table = TypeTable::new();
        // A union of exactly [None] collapses to the bare marker before it
        // is ever stored, so make_required sees a non-union and returns it.
        let none_only = table.union_of(&[table.none_type]);
        assert_eq!(none_only, table.none_type);
        assert_eq!(table.make_required(none_only), table.none_type);
        // The empty union is never.
        assert_eq!(table.union_of(&[]), table.never_type);
    }

    #[test]
    fn test_instance_of_reuses_ids() {
        let mut table = TypeTable::new();
        let a = table.instance_of(SymbolId(1));
        let b = table.instance_of(SymbolId(1));
        let c = table.instance_of(SymbolId(2));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_union_flattens_nested() {
        let mut table = TypeTable::new();
        let inner = table.union_of(&[table.int_type, table.str_type]);
        let outer = table.union_of(&[inner, table.bool_type]);
        match &table.get(outer).kind {
            TypeKind::Union { types } => {
                assert_eq!(
                    types,
                    &vec![table.int_type, table.str_type, table.bool_type]
                );
            }
            other => panic!("expected union, got {:?}", other),
        }
    }

    #[test]
    fn test_is_optional() {
        let mut table = TypeTable::new();
        let opt = table.make_optional(table.int_type);
        assert!(table.is_optional(opt));
        assert!(table.is_optional(table.none_type));
        assert!(!table.is_optional(table.int_type));
    }
}
