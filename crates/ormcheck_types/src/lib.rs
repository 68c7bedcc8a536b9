//! ormcheck_types: Type table and optionality algebra.
//!
//! Types are stored in a table (type arena) and referenced by `TypeId`,
//! mirroring how the host checker hands types across the hook boundary.
//! The operations the plugin needs are small: build simplified unions,
//! add the `None` marker to a type, and strip it again.

mod types;

pub use types::{Type, TypeKind, TypeTable};
