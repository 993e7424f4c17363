//! Cascade league seasons
//!
//! Drives a full season on top of `cascade_core`:
//! - TOML configuration with the founding eight teams as default
//! - Week-by-week regular season and the playoff bracket
//! - JSON persistence of every result, with standings replayable to any week
//! - Caption text and artifact keys for the published game images
//!
//! # Usage
//!
//! ```
//! use league::{LeagueConfig, Season};
//!
//! let config = LeagueConfig {
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let mut season = Season::new(config).unwrap();
//! season.play().unwrap();
//!
//! let results = season.results();
//! assert_eq!(results.weeks_played(), 7);
//! assert!(results.playoffs.is_some());
//! ```

pub mod artifacts;
pub mod caption;
pub mod config;
pub mod error;
pub mod results;
pub mod season;

pub use artifacts::{season_artifacts, ArtifactKey, GameStage};
pub use caption::{odds_line, standings_block, week_caption};
pub use config::{LeagueConfig, DEFAULT_TEAMS};
pub use error::{Error, Result};
pub use results::SeasonResults;
pub use season::{Season, WeekResults};
