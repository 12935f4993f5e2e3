//! Flat serialized shape of a preset.
//!
//! The document is what a host's structured serializer reads and writes:
//! `Name` and `OutputType` attributes, an `InputTypes` list and a `Settings`
//! list of `Key`/`Value` pairs in store order.

use serde::{Deserialize, Serialize};

use super::format::OutputFormat;
use super::policy;
use super::preset::{DEFAULT_PRESET_NAME, Preset};
use crate::engine::error::Result;

fn default_name() -> String {
    DEFAULT_PRESET_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetDocument {
    #[serde(rename = "Name", default = "default_name")]
    pub name: String,

    #[serde(rename = "OutputType", default, skip_serializing_if = "Option::is_none")]
    pub output_type: Option<OutputFormat>,

    #[serde(rename = "InputTypes", default)]
    pub input_types: Vec<String>,

    #[serde(rename = "Settings", default)]
    pub settings: Vec<SettingEntry>,
}

impl PresetDocument {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pairs that [`Preset::from_document`] will drop because the document's
    /// output type does not use them. With no output type, that is all of
    /// them.
    pub fn irrelevant_entries(&self) -> impl Iterator<Item = &SettingEntry> + '_ {
        let format = self.output_type;
        self.settings.iter().filter(move |entry| {
            !format.is_some_and(|f| policy::is_relevant_setting(f, &entry.key))
        })
    }
}

impl Preset {
    pub fn to_document(&self) -> PresetDocument {
        PresetDocument {
            name: self.name().to_string(),
            output_type: self.output_format(),
            input_types: self.input_types().to_vec(),
            settings: self
                .settings()
                .iter()
                .map(|(key, value)| SettingEntry {
                    key: key.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    /// Rebuild a preset the way a host deserializer would: name, format
    /// (seeding defaults), input types, then each stored pair replayed
    /// through [`Preset::set_setting_value`].
    ///
    /// Pairs the loaded format does not consider relevant are dropped.
    pub fn from_document(doc: &PresetDocument) -> Result<Self> {
        let mut preset = Preset::new();
        preset.set_name(doc.name.clone());
        if let Some(format) = doc.output_type {
            preset.set_output_format(format);
        }
        preset.set_input_types(doc.input_types.clone());

        for entry in &doc.settings {
            preset.set_setting_value(&entry.key, &entry.value)?;
        }

        Ok(preset)
    }
}
