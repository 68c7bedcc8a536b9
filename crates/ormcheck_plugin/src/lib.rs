//! ormcheck_plugin: The hook layer a host type checker calls into.
//!
//! Composes the argument binder, the string model resolver, and the
//! optionality algebra into the per-call-site refinements the plugin
//! offers. Every hook is a pure function returning `Option`: `None` means
//! "no opinion", and the host proceeds with its own default inference.

pub mod hooks;
pub mod options;

pub use hooks::{
    check_model_init, foreign_key_target, model_type_from_literal, refines_relation_field,
};
pub use options::PluginOptions;

/// Fully-qualified names of the ORM declarations the plugin special-cases.
pub const MODEL_CLASS_FULLNAME: &str = "django.db.models.base.Model";
pub const QUERYSET_CLASS_FULLNAME: &str = "django.db.models.query.QuerySet";
pub const FOREIGN_KEY_FULLNAME: &str = "django.db.models.fields.related.ForeignKey";
pub const ONETOONE_FIELD_FULLNAME: &str = "django.db.models.fields.related.OneToOneField";
pub const DUMMY_SETTINGS_BASE_CLASS: &str = "django.conf._DjangoConfLazyObject";
