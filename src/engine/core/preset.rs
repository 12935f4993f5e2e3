use tracing::{debug, trace};

use super::format::{OutputFormat, SymbolicEnum};
use super::policy;
use super::settings::{SettingValue, SettingsStore};
use crate::engine::error::{PresetError, Result};
use crate::engine::notify::{ChangeNotifier, ListenerId, PresetField};
use crate::engine::validate::{self, NameRegistry};

/// Name given to presets created without one.
pub const DEFAULT_PRESET_NAME: &str = "New Preset";

/// A named conversion preset: target format, accepted inputs and the
/// format-specific settings.
#[derive(Debug)]
pub struct Preset {
    name: String,
    output_format: Option<OutputFormat>,
    input_types: Vec<String>,
    settings: SettingsStore,
    notifier: ChangeNotifier,
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            name: DEFAULT_PRESET_NAME.to_string(),
            output_format: None,
            input_types: Vec::new(),
            settings: SettingsStore::new(),
            notifier: ChangeNotifier::new(),
        }
    }
}

/// Copies identity and settings. Listeners stay with the original.
impl Clone for Preset {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            output_format: self.output_format,
            input_types: self.input_types.clone(),
            settings: self.settings.clone(),
            notifier: ChangeNotifier::new(),
        }
    }
}

impl Preset {
    /// Preset named "New Preset" with no format and no settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset with explicit identity; the format's defaults are seeded.
    pub fn with_format(
        name: impl Into<String>,
        format: OutputFormat,
        input_types: Vec<String>,
    ) -> Self {
        let mut preset = Self {
            name: name.into(),
            input_types,
            ..Self::default()
        };
        preset.set_output_format(format);
        preset
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output_format
    }

    pub fn input_types(&self) -> &[String] {
        &self.input_types
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Stored verbatim; see [`Preset::validate_field`] for the rules.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.notifier.notify(PresetField::Name);
    }

    /// Switch format and seed its defaults for keys not yet present.
    ///
    /// Existing values are never overwritten and keys from earlier formats
    /// are kept. `Settings` is announced even when nothing was added.
    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output_format = Some(format);

        for default in policy::default_settings(format) {
            if self.settings.contains_key(default.key) {
                continue;
            }
            debug!(
                format = format.symbol(),
                key = default.key,
                value = default.value,
                "seeding default setting"
            );
            if let Err(e) = self.settings.set(default.key, default.value) {
                debug!(error = %e, "skipped default setting");
            }
        }

        self.notifier.notify(PresetField::Settings);
    }

    /// Write a setting if the current format considers it relevant.
    ///
    /// Empty arguments fail with `InvalidArgument`. Irrelevant keys, or any
    /// key while no format is set, are ignored without error or
    /// notification.
    pub fn set_setting_value(&mut self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() {
            return Err(PresetError::InvalidArgument("key"));
        }
        if value.is_empty() {
            return Err(PresetError::InvalidArgument("value"));
        }

        let relevant = self
            .output_format
            .is_some_and(|format| policy::is_relevant_setting(format, key));
        if !relevant {
            trace!(key, format = ?self.output_format, "ignoring irrelevant setting");
            return Ok(());
        }

        self.settings.set(key, value)?;
        debug!(key, value, "setting updated");
        self.notifier.notify(PresetField::Settings);
        Ok(())
    }

    pub fn set_input_types(&mut self, values: Vec<String>) {
        self.input_types = values;
        self.notifier.notify(PresetField::InputTypes);
    }

    pub fn setting_value(&self, key: &str) -> Option<&str> {
        self.settings.get(key)
    }

    pub fn setting_i64(&self, key: &str) -> Result<i64> {
        self.settings.get_i64(key)
    }

    pub fn setting_u32(&self, key: &str) -> Result<u32> {
        self.settings.get_u32(key)
    }

    pub fn setting_f64(&self, key: &str) -> Result<f64> {
        self.settings.get_f64(key)
    }

    pub fn setting_enum<E: SymbolicEnum>(&self, key: &str) -> Result<E> {
        self.settings.get_enum(key)
    }

    pub fn setting_as(&self, key: &str, type_name: &str) -> Result<SettingValue> {
        self.settings.get_as(key, type_name)
    }

    /// Stored settings the current format understands, in store order.
    ///
    /// Keys left behind by an earlier format are skipped but not removed.
    pub fn relevant_settings(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let format = self.output_format;
        self.settings.iter().filter(move |(key, _)| {
            format.is_some_and(|f| policy::is_relevant_setting(f, key))
        })
    }

    /// Case-insensitive extension check; a leading dot is ignored.
    pub fn accepts_input(&self, extension: &str) -> bool {
        let ext = extension.trim_start_matches('.');
        self.input_types
            .iter()
            .any(|t| t.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }

    /// Diagnostic for one field, or `None` when it is valid.
    ///
    /// Only `"Name"` has rules; every other field name is valid.
    pub fn validate_field(&self, field: &str, registry: &dyn NameRegistry) -> Option<String> {
        validate::validate_field(self, field, registry)
    }

    /// Overall diagnostic for the preset (currently the name).
    pub fn error(&self, registry: &dyn NameRegistry) -> Option<String> {
        self.validate_field(PresetField::Name.as_str(), registry)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(PresetField) + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
