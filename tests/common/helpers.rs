#![allow(dead_code)]

use convpreset::engine::{OutputFormat, Preset, PresetField};
use std::cell::RefCell;
use std::rc::Rc;

/// Keys worth throwing at any preset: every policy key plus ones no format uses
pub const CANDIDATE_KEYS: &[&str] = &[
    "Encoding", "Bitrate", "Channels", "SampleRate", "Quality", "bitrate", "ENCODING",
];

pub fn inputs(exts: &[&str]) -> Vec<String> {
    exts.iter().map(|e| e.to_string()).collect()
}

pub fn mp3_preset(name: &str) -> Preset {
    Preset::with_format(name, OutputFormat::Mp3, inputs(&["wav", "flac"]))
}

/// Attach a listener that records every notification
pub fn record_changes(preset: &mut Preset) -> Rc<RefCell<Vec<PresetField>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    preset.subscribe(move |field| sink.borrow_mut().push(field));
    log
}

/// Store contents as owned pairs, in store order
pub fn settings_of(preset: &Preset) -> Vec<(String, String)> {
    preset.settings().enumerate()
}

pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
