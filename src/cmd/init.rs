use crate::data::{PageSettings, Persistable, Profile};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Both top-level keys of config.yaml, written in one pass. `Profile` and
/// `PageSettings` read the file independently.
#[derive(Serialize, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    profile: Profile,
    #[serde(default)]
    settings: PageSettings,
}

impl Persistable for ConfigFile {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    run_in_dir(&dir)?;
    println!("Config written to {}", dir.join("config.yaml").display());
    Ok(())
}

/// Writes the default config.yaml into `dir`. Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    ConfigFile::default().save_to(dir)
}
