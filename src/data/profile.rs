use crate::data::persistence::Persistable;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: String,
    pub level: String,
}

impl Skill {
    pub fn new(name: &str, level: &str) -> Self {
        Skill {
            name: name.to_string(),
            level: level.to_string(),
        }
    }
}

/// Static content of the page: header, About paragraphs and the skills table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    /// The last paragraph is replaced by fetched advice.
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: "Player One".to_string(),
            tagline: "Weekend raider, weekday strategist".to_string(),
            about: vec![
                "I have been gaming since the cartridge days and still keep the consoles."
                    .to_string(),
                "Favourite genres: RPG, strategy and the occasional shooter.".to_string(),
                "The game that got me hooked: loading...".to_string(),
            ],
            skills: vec![
                Skill::new("Map awareness", "Expert"),
                Skill::new("Team shot-calling", "Advanced"),
                Skill::new("Build theorycrafting", "Advanced"),
                Skill::new("Mechanical aim", "Intermediate"),
            ],
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug)]
struct ProfileWrapper {
    #[serde(default)]
    profile: Profile,
}

impl Persistable for ProfileWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

impl Profile {
    pub fn load_from(dir: &Path) -> Result<Self> {
        Ok(ProfileWrapper::load_from(dir)?.profile)
    }
}
