//! Read-driven validation of preset identity.
//!
//! Diagnostics are plain messages meant to be re-evaluated continuously
//! (e.g. while a name is being typed); nothing here aborts a mutation.

use thiserror::Error;

use crate::engine::core::Preset;

/// Character that may not appear in a preset name.
pub const ILLEGAL_NAME_CHAR: char = ';';

/// Answers how many known presets carry a given name.
///
/// Supplied by the host at validation time; the preset under validation is
/// expected to be counted too, so a count above one means a clash.
pub trait NameRegistry {
    fn count_named(&self, name: &str) -> usize;
}

impl<F> NameRegistry for F
where
    F: Fn(&str) -> usize,
{
    fn count_named(&self, name: &str) -> usize {
        self(name)
    }
}

/// Sibling presets held by the host, the preset being validated included.
#[derive(Debug, Clone, Copy)]
pub struct Siblings<'a>(pub &'a [Preset]);

impl NameRegistry for Siblings<'_> {
    fn count_named(&self, name: &str) -> usize {
        self.0.iter().filter(|p| p.name() == name).count()
    }
}

/// Registry for a preset that has no siblings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSiblings;

impl NameRegistry for NoSiblings {
    fn count_named(&self, _name: &str) -> usize {
        0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("A name is required")]
    Missing,

    #[error("The name contains the illegal character ';'")]
    IllegalCharacter,

    #[error("Duplicate name: a preset named '{0}' already exists")]
    Duplicate(String),
}

/// Check a preset name. The first failing rule wins.
pub fn validate_name(name: &str, registry: &dyn NameRegistry) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Missing);
    }
    if name.contains(ILLEGAL_NAME_CHAR) {
        return Err(NameError::IllegalCharacter);
    }
    if registry.count_named(name) > 1 {
        return Err(NameError::Duplicate(name.to_string()));
    }
    Ok(())
}

/// Message for `field` on `preset`, `None` when valid or when the field has
/// no rules.
pub fn validate_field(
    preset: &Preset,
    field: &str,
    registry: &dyn NameRegistry,
) -> Option<String> {
    match field {
        "Name" => validate_name(preset.name(), registry)
            .err()
            .map(|e| e.to_string()),
        _ => None,
    }
}
