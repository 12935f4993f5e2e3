// Integration tests for the serialized document shape
//
// A document is replayed through the same setters a host deserializer
// would call, so relevancy filtering applies on load.

use convpreset::engine::{OutputFormat, Preset, PresetDocument, SettingEntry};

use crate::common::assertions::*;
use crate::common::helpers::*;

#[test]
fn test_json_roundtrip_preserves_preset() {
    let mut preset = mp3_preset("Round Trip");
    preset.set_setting_value("Encoding", "ABR").unwrap();

    let json = preset.to_document().to_json().unwrap();
    let restored = Preset::from_document(&PresetDocument::from_json(&json).unwrap()).unwrap();

    assert_eq!(restored.name(), "Round Trip");
    assert_eq!(restored.output_format(), Some(OutputFormat::Mp3));
    assert_eq!(restored.input_types(), preset.input_types());
    assert_eq!(settings_of(&restored), settings_of(&preset));
}

#[test]
fn test_stale_keys_are_lost_on_reload() {
    let mut preset = mp3_preset("Lossy");
    preset.set_output_format(OutputFormat::Ogg);
    assert_settings(
        &preset,
        &[("Encoding", "VBR-default-name"), ("Bitrate", "190")],
    );

    let doc = preset.to_document();
    assert_eq!(doc.settings.len(), 2);

    let restored = Preset::from_document(&doc).unwrap();
    assert_settings(&restored, &[("Bitrate", "190")]);
}

#[test]
fn test_serialized_keys_override_defaults_in_store_order() {
    let json = r#"{
        "Name": "Custom",
        "OutputType": "Mp3",
        "InputTypes": ["aiff"],
        "Settings": [
            { "Key": "Bitrate", "Value": "128" },
            { "Key": "Quality", "Value": "2" }
        ]
    }"#;

    let preset = Preset::from_document(&PresetDocument::from_json(json).unwrap()).unwrap();
    assert_settings(
        &preset,
        &[("Encoding", "VBR-default-name"), ("Bitrate", "128")],
    );
    assert!(preset.accepts_input("AIFF"));
}

#[test]
fn test_document_fields_use_attribute_names() {
    let doc = PresetDocument {
        name: "Attr".to_string(),
        output_type: Some(OutputFormat::Ogg),
        input_types: inputs(&["wav"]),
        settings: vec![SettingEntry {
            key: "Bitrate".to_string(),
            value: "96".to_string(),
        }],
    };

    let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
    assert_eq!(value["Name"], "Attr");
    assert_eq!(value["OutputType"], "Ogg");
    assert_eq!(value["InputTypes"][0], "wav");
    assert_eq!(value["Settings"][0]["Key"], "Bitrate");
    assert_eq!(value["Settings"][0]["Value"], "96");
}
