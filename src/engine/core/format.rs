//! Output formats and the enumerated setting values they carry.
//!
//! Every enum here round-trips through its symbolic name, which is the
//! exact (case-sensitive) text stored in a settings map or a preset document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An enum that can be stored in a settings map by symbolic name.
pub trait SymbolicEnum: Sized + Copy + 'static {
    /// Type name used in diagnostics and by dynamic lookups.
    const TYPE_NAME: &'static str;

    /// All variants, in declaration order.
    const ALL: &'static [Self];

    fn symbol(&self) -> &'static str;

    /// Case-sensitive lookup by symbol.
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.symbol() == symbol)
    }
}

/// Target format a preset converts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    Mp3,
    Ogg,
    Flac,
    Wav,
    Aac,
}

impl OutputFormat {
    /// File extension produced by this format (no leading dot)
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "mp3",
            OutputFormat::Ogg => "ogg",
            OutputFormat::Flac => "flac",
            OutputFormat::Wav => "wav",
            OutputFormat::Aac => "m4a",
        }
    }
}

impl SymbolicEnum for OutputFormat {
    const TYPE_NAME: &'static str = "OutputFormat";
    const ALL: &'static [Self] = &[
        OutputFormat::Mp3,
        OutputFormat::Ogg,
        OutputFormat::Flac,
        OutputFormat::Wav,
        OutputFormat::Aac,
    ];

    fn symbol(&self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "Mp3",
            OutputFormat::Ogg => "Ogg",
            OutputFormat::Flac => "Flac",
            OutputFormat::Wav => "Wav",
            OutputFormat::Aac => "Aac",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Rate control mode for the `Encoding` setting of MP3 presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mp3Encoding {
    Cbr,
    Abr,
    VbrDefault,
    VbrNew,
}

impl SymbolicEnum for Mp3Encoding {
    const TYPE_NAME: &'static str = "Mp3Encoding";
    const ALL: &'static [Self] = &[
        Mp3Encoding::Cbr,
        Mp3Encoding::Abr,
        Mp3Encoding::VbrDefault,
        Mp3Encoding::VbrNew,
    ];

    fn symbol(&self) -> &'static str {
        match self {
            Mp3Encoding::Cbr => "CBR",
            Mp3Encoding::Abr => "ABR",
            Mp3Encoding::VbrDefault => "VBR-default-name",
            Mp3Encoding::VbrNew => "VBR-new",
        }
    }
}

impl fmt::Display for Mp3Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
