mod document;
mod format;
pub mod policy;
mod preset;
mod settings;

pub use document::{PresetDocument, SettingEntry};
pub use format::{Mp3Encoding, OutputFormat, SymbolicEnum};
pub use policy::{SettingDefault, default_settings, is_relevant_setting, keys, relevant_keys};
pub use preset::{DEFAULT_PRESET_NAME, Preset};
pub use settings::{SettingValue, SettingsStore};
