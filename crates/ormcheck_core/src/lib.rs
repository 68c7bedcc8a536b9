//! ormcheck_core: Core utilities for the ormcheck plugin primitives.
//!
//! Provides string interning shared by every analysis table in the
//! workspace. Parameter names, symbol names, and attribute names are
//! interned so table lookups and name comparisons are integer ops.

pub mod intern;

pub use intern::{InternedString, StringInterner};
