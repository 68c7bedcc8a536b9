//! Flag types and id handles shared across the analysis crates.

use std::fmt;

bitflags::bitflags! {
    /// Flags describing what kind of entity a symbol is.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SymbolFlags: u32 {
        const NONE       = 0;
        const CLASS      = 1 << 0;
        const FUNCTION   = 1 << 1;
        const VARIABLE   = 1 << 2;
        const TYPE_ALIAS = 1 << 3;
        const MODULE     = 1 << 4;
        /// Class known to derive from the ORM model base class.
        const MODEL      = 1 << 5;

        /// Symbols a string model reference is allowed to resolve to.
        const CLASS_LIKE = Self::CLASS.bits() | Self::MODEL.bits();
    }
}

bitflags::bitflags! {
    /// Flags describing what kind of type a type-table entry is.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        const NONE_FLAGS = 0;
        const ANY        = 1 << 0;
        /// The "may be absent" marker type.
        const NONE_TYPE  = 1 << 1;
        const NEVER      = 1 << 2;
        const STR        = 1 << 3;
        const INT        = 1 << 4;
        const BOOL       = 1 << 5;
        const INSTANCE   = 1 << 6;
        const UNION      = 1 << 7;
    }
}

/// Lightweight handle to a type stored in the type table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const INVALID: TypeId = TypeId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// Lightweight handle to a symbol in the symbol store.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SymbolId(pub u32);

impl SymbolId {
    pub const INVALID: SymbolId = SymbolId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}
