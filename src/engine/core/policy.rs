//! Per-format setting policy.
//!
//! A single static table lists, for each output format, the setting keys
//! that format understands and the value each key is seeded with. Relevancy
//! and defaulting are both read from it.

use super::format::OutputFormat;

/// Setting key names understood by at least one format.
pub mod keys {
    pub const ENCODING: &str = "Encoding";
    pub const BITRATE: &str = "Bitrate";
}

/// A relevant setting key and the value it is seeded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDefault {
    pub key: &'static str,
    pub value: &'static str,
}

const fn default(key: &'static str, value: &'static str) -> SettingDefault {
    SettingDefault { key, value }
}

const MP3_SETTINGS: &[SettingDefault] = &[
    default(keys::ENCODING, "VBR-default-name"),
    default(keys::BITRATE, "190"),
];

const OGG_SETTINGS: &[SettingDefault] = &[default(keys::BITRATE, "160")];

/// Ordered defaults for a format. Formats without an entry get none.
pub fn default_settings(format: OutputFormat) -> &'static [SettingDefault] {
    match format {
        OutputFormat::Mp3 => MP3_SETTINGS,
        OutputFormat::Ogg => OGG_SETTINGS,
        OutputFormat::Flac | OutputFormat::Wav | OutputFormat::Aac => &[],
    }
}

/// Whether `key` is meaningful for `format` (exact, case-sensitive match).
pub fn is_relevant_setting(format: OutputFormat, key: &str) -> bool {
    default_settings(format).iter().any(|d| d.key == key)
}

pub fn relevant_keys(format: OutputFormat) -> impl Iterator<Item = &'static str> {
    default_settings(format).iter().map(|d| d.key)
}
