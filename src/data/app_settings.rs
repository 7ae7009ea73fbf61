use crate::data::persistence::Persistable;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Startup behaviour of the page. The theme chosen at runtime is never
/// written back here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PageSettings {
    /// Open in the dark palette.
    #[serde(default)]
    pub start_dark: bool,
    /// Fetch advice for the About section at startup.
    #[serde(default = "default_true")]
    pub fetch_advice: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PageSettings {
    fn default() -> Self {
        PageSettings {
            start_dark: false,
            fetch_advice: true,
        }
    }
}

/// Reads the `settings` key of config.yaml. `ProfileWrapper` reads the
/// `profile` key of the same file.
#[derive(Serialize, Deserialize, Default, Debug)]
struct SettingsWrapper {
    #[serde(default)]
    settings: PageSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

impl PageSettings {
    pub fn load_from(dir: &Path) -> Result<Self> {
        Ok(SettingsWrapper::load_from(dir)?.settings)
    }
}
