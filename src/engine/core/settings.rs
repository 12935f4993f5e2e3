//! Ordered string settings with typed read-back.

use super::format::{Mp3Encoding, OutputFormat, SymbolicEnum};
use crate::engine::error::{PresetError, Result};

/// A setting decoded by [`SettingsStore::get_as`].
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Text(String),
    Integer(i64),
    Unsigned(u32),
    Real(f64),
    Encoding(Mp3Encoding),
    Format(OutputFormat),
}

/// Key/value map that remembers insertion order.
///
/// Keys and values are never empty. Overwriting a key keeps its original
/// position so serialized output stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsStore {
    entries: Vec<(String, String)>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() {
            return Err(PresetError::InvalidArgument("key"));
        }
        if value.is_empty() {
            return Err(PresetError::InvalidArgument("value"));
        }

        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Owned copy of the pairs in insertion order, for serialization.
    pub fn enumerate(&self) -> Vec<(String, String)> {
        self.entries.clone()
    }

    fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| PresetError::MissingSetting(key.to_string()))
    }

    /// Stored text, unchanged.
    pub fn get_str(&self, key: &str) -> Result<&str> {
        self.require(key)
    }

    /// Signed decimal integer. Fails with `Format` on anything else.
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        let raw = self.require(key)?;
        raw.parse::<i64>()
            .map_err(|_| format_error(key, raw, "integer"))
    }

    /// Unsigned 32-bit decimal integer (bitrates, sample counts).
    pub fn get_u32(&self, key: &str) -> Result<u32> {
        let raw = self.require(key)?;
        raw.parse::<u32>()
            .map_err(|_| format_error(key, raw, "unsigned integer"))
    }

    /// Finite decimal real number. `NaN` and infinities are rejected.
    pub fn get_f64(&self, key: &str) -> Result<f64> {
        let raw = self.require(key)?;
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(format_error(key, raw, "real number")),
        }
    }

    /// Enum parsed by its case-sensitive symbolic name.
    pub fn get_enum<E: SymbolicEnum>(&self, key: &str) -> Result<E> {
        let raw = self.require(key)?;
        E::from_symbol(raw).ok_or_else(|| format_error(key, raw, E::TYPE_NAME))
    }

    /// Decode by a type name chosen at runtime (e.g. by a UI binding).
    ///
    /// Accepted names: `string`, `integer`, `unsigned`, `real`, and the
    /// enum type names `Mp3Encoding` and `OutputFormat`. Anything else is
    /// `UnsupportedType`, reported before the key is looked up.
    pub fn get_as(&self, key: &str, type_name: &str) -> Result<SettingValue> {
        match type_name {
            "string" => self.get_str(key).map(|s| SettingValue::Text(s.to_string())),
            "integer" => self.get_i64(key).map(SettingValue::Integer),
            "unsigned" => self.get_u32(key).map(SettingValue::Unsigned),
            "real" => self.get_f64(key).map(SettingValue::Real),
            name if name == Mp3Encoding::TYPE_NAME => {
                self.get_enum(key).map(SettingValue::Encoding)
            }
            name if name == OutputFormat::TYPE_NAME => {
                self.get_enum(key).map(SettingValue::Format)
            }
            other => Err(PresetError::UnsupportedType(other.to_string())),
        }
    }
}

fn format_error(key: &str, value: &str, expected: &'static str) -> PresetError {
    PresetError::Format {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
}
