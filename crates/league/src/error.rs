use std::path::PathBuf;

use cascade_core::LeagueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    League(#[from] LeagueError),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed results file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to write config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("week {0} has not been played")]
    UnknownWeek(u32),

    #[error("playoffs start after week {scheduled}, only {played} played")]
    PlayoffsNotReady { played: u32, scheduled: u32 },

    #[error("playoffs have already been played")]
    PlayoffsAlreadyPlayed,
}

pub type Result<T> = std::result::Result<T, Error>;
