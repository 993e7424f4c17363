//! Precondition failures reported by the league core

use thiserror::Error;

use crate::team::TeamId;

/// Rejected inputs. Nothing is simulated or mutated when one of these is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    #[error("cannot build a schedule without any teams")]
    EmptyRoster,

    #[error("team names must be unique, \"{0}\" is registered twice")]
    DuplicateTeam(String),

    #[error("no team named \"{0}\" in this league")]
    UnknownTeam(String),

    #[error("team {0} is not registered in this league")]
    UnknownTeamId(TeamId),

    #[error("the playoff bracket needs exactly {expected} teams, got {found}")]
    BracketSize { expected: usize, found: usize },

    #[error("team {0} is seeded more than once")]
    DuplicateSeed(TeamId),

    #[error("round {requested} has not been played, only {available} rounds are logged")]
    RoundOutOfRange { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, LeagueError>;
