// Integration tests for preset editing workflows
//
// These walk a preset through the edits a host UI performs and check the
// settings store after each step.

use convpreset::engine::{Mp3Encoding, OutputFormat, Preset, PresetError, keys};

use crate::common::assertions::*;
use crate::common::helpers::*;

#[test]
fn test_mp3_to_ogg_scenario() {
    let mut preset = Preset::with_format("My MP3", OutputFormat::Mp3, inputs(&["wav", "flac"]));
    assert_settings(
        &preset,
        &[("Encoding", "VBR-default-name"), ("Bitrate", "190")],
    );

    preset.set_setting_value("Bitrate", "256").unwrap();
    assert_settings(
        &preset,
        &[("Encoding", "VBR-default-name"), ("Bitrate", "256")],
    );

    preset.set_setting_value("Channels", "2").unwrap();
    assert_settings(
        &preset,
        &[("Encoding", "VBR-default-name"), ("Bitrate", "256")],
    );

    preset.set_output_format(OutputFormat::Ogg);
    assert_settings(
        &preset,
        &[("Encoding", "VBR-default-name"), ("Bitrate", "256")],
    );
    assert_eq!(preset.output_format(), Some(OutputFormat::Ogg));
    assert_eq!(preset.input_types(), &["wav", "flac"]);
}

#[test]
fn test_fresh_preset_gains_format_defaults() {
    let mut preset = Preset::new();
    assert_eq!(preset.name(), "New Preset");

    preset.set_output_format(OutputFormat::Ogg);
    assert_settings(&preset, &[("Bitrate", "160")]);

    preset.set_output_format(OutputFormat::Mp3);
    assert_settings(
        &preset,
        &[("Bitrate", "160"), ("Encoding", "VBR-default-name")],
    );
}

#[test]
fn test_formats_without_policy_accept_nothing() {
    let mut preset = Preset::with_format("Lossless", OutputFormat::Flac, inputs(&["wav"]));
    assert!(preset.settings().is_empty());

    for key in CANDIDATE_KEYS {
        preset.set_setting_value(key, "1").unwrap();
    }
    assert!(preset.settings().is_empty());
}

#[test]
fn test_stale_keys_survive_but_are_not_writable() {
    let mut preset = mp3_preset("Switcher");
    preset.set_output_format(OutputFormat::Ogg);

    // Encoding is left over from Mp3 and no longer accepts writes
    preset.set_setting_value(keys::ENCODING, "CBR").unwrap();
    assert_eq!(preset.setting_value(keys::ENCODING), Some("VBR-default-name"));

    let relevant: Vec<_> = preset.relevant_settings().collect();
    assert_eq!(relevant, vec![("Bitrate", "190")]);
}

#[test]
fn test_typed_reads_after_edits() {
    let mut preset = mp3_preset("Typed");
    preset.set_setting_value(keys::ENCODING, "VBR-new").unwrap();
    preset.set_setting_value(keys::BITRATE, "245").unwrap();

    assert_eq!(
        preset.setting_enum::<Mp3Encoding>(keys::ENCODING).unwrap(),
        Mp3Encoding::VbrNew
    );
    assert_eq!(preset.setting_u32(keys::BITRATE).unwrap(), 245);
    assert_eq!(preset.setting_f64(keys::BITRATE).unwrap(), 245.0);
}

#[test]
fn test_typed_read_failures_surface() {
    let mut preset = mp3_preset("Broken");
    preset.set_setting_value(keys::BITRATE, "high").unwrap();
    preset.set_setting_value(keys::ENCODING, "vbr").unwrap();

    assert!(matches!(
        preset.setting_u32(keys::BITRATE),
        Err(PresetError::Format { .. })
    ));
    assert!(matches!(
        preset.setting_enum::<Mp3Encoding>(keys::ENCODING),
        Err(PresetError::Format { .. })
    ));
    assert!(matches!(
        preset.setting_as(keys::BITRATE, "Timestamp"),
        Err(PresetError::UnsupportedType(_))
    ));
    assert!(matches!(
        preset.setting_u32("Channels"),
        Err(PresetError::MissingSetting(_))
    ));
}

#[test]
fn test_empty_arguments_are_rejected_without_mutation() {
    let mut preset = mp3_preset("Strict");
    let before = settings_of(&preset);

    assert!(matches!(
        preset.set_setting_value("", "320"),
        Err(PresetError::InvalidArgument(_))
    ));
    assert!(matches!(
        preset.set_setting_value(keys::BITRATE, ""),
        Err(PresetError::InvalidArgument(_))
    ));
    assert_eq!(settings_of(&preset), before);
}
