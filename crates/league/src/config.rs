//! League configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use cascade_core::{FinalFormat, BRACKET_SIZE};

use crate::error::{Error, Result};

/// The eight founding teams
pub const DEFAULT_TEAMS: [&str; 8] = [
    "Apex Predators",
    "Vista Vipers",
    "Skybound Storm",
    "Raven's Renegades",
    "Cove Crushers",
    "Ember Enforcers",
    "Pinnacle Pioneers",
    "Evan City Commies",
];

/// Settings for one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Season name used in reports
    pub name: String,
    /// Team names in registration (schedule) order
    pub teams: Vec<String>,
    /// Round-robin cycles before the playoffs
    pub round_robins: u32,
    /// Rounds played per cycle (None = the full cycle)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds_per_round_robin: Option<usize>,
    /// Generator seed (None = random, logged at startup)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Play the eight-team bracket after the regular season
    pub playoffs: bool,
    /// Where to write the season results JSON
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_path: Option<PathBuf>,
    pub final_format: FinalFormat,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            name: "Cascade League".to_string(),
            teams: DEFAULT_TEAMS.iter().map(|s| s.to_string()).collect(),
            round_robins: 1,
            rounds_per_round_robin: None,
            seed: None,
            playoffs: true,
            results_path: None,
            final_format: FinalFormat::default(),
        }
    }
}

impl LeagueConfig {
    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_toml_string()?;
        std::fs::write(path, contents).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject settings the season driver cannot run
    pub fn validate(&self) -> Result<()> {
        if self.teams.len() < 2 {
            return Err(Error::InvalidConfig(format!(
                "a league needs at least two teams, got {}",
                self.teams.len()
            )));
        }
        if self.round_robins == 0 {
            return Err(Error::InvalidConfig(
                "round_robins must be at least 1".to_string(),
            ));
        }
        if self.rounds_per_round_robin == Some(0) {
            return Err(Error::InvalidConfig(
                "rounds_per_round_robin must be at least 1".to_string(),
            ));
        }
        match self.final_format {
            FinalFormat::FirstTo(0) | FinalFormat::FixedGames(0) => {
                return Err(Error::InvalidConfig(
                    "the final needs at least one game".to_string(),
                ));
            }
            _ => {}
        }
        if self.playoffs && self.teams.len() != BRACKET_SIZE {
            return Err(Error::InvalidConfig(format!(
                "playoffs need exactly {} teams, got {}",
                BRACKET_SIZE,
                self.teams.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
