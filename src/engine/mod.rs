// Preset engine - independent of any host UI

pub mod core;
pub mod error;
pub mod notify;
pub mod validate;

pub use self::core::*;
pub use error::{PresetError, Result};
pub use notify::{ChangeNotifier, ListenerId, PresetField};
pub use validate::{NameError, NameRegistry, NoSiblings, Siblings, validate_name};
