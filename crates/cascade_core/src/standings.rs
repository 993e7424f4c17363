//! League table, live and historical

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LeagueError, Result};
use crate::league::League;
use crate::simulator::{settle, MatchResult};
use crate::team::{Category, TeamId};

/// One line of the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// 1-based position
    pub rank: usize,
    pub team: TeamId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub point_differential: i64,
    pub best_stat: Category,
}

/// Teams ordered by wins, then point differential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    rows: Vec<StandingsRow>,
}

impl Standings {
    pub fn rows(&self) -> &[StandingsRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &StandingsRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Team ids in ranked order
    pub fn ids(&self) -> Vec<TeamId> {
        self.rows.iter().map(|r| r.team).collect()
    }

    pub fn leader(&self) -> Option<TeamId> {
        self.rows.first().map(|r| r.team)
    }

    /// 1-based rank of a team
    pub fn position_of(&self, team: TeamId) -> Option<usize> {
        self.rows.iter().find(|r| r.team == team).map(|r| r.rank)
    }
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(
                f,
                "{}. {}: W-L: {}-{}, PF: {}, PA: {}, Best Stat: {}",
                row.rank,
                row.name,
                row.wins,
                row.losses,
                row.points_for,
                row.points_against,
                row.best_stat
            )?;
        }
        Ok(())
    }
}

/// Rank the league's teams.
///
/// Sorted descending by `(wins, points_for - points_against)`. The sort is
/// stable, so exactly tied teams keep their registration order.
pub fn rank(league: &League) -> Standings {
    let mut order: Vec<TeamId> = league.ids().collect();
    order.sort_by(|&a, &b| {
        let key = |id: TeamId| (league[id].wins(), league[id].point_differential());
        key(b).cmp(&key(a))
    });

    let rows = order
        .into_iter()
        .enumerate()
        .map(|(i, id)| {
            let team = &league[id];
            StandingsRow {
                rank: i + 1,
                team: id,
                name: team.name().to_string(),
                wins: team.wins(),
                losses: team.losses(),
                points_for: team.points_for(),
                points_against: team.points_against(),
                point_differential: team.point_differential(),
                best_stat: team.best_stat(),
            }
        })
        .collect();

    Standings { rows }
}

/// Rebuild the league as it stood after `up_to_round` rounds.
///
/// `log[i]` holds the results of round `i + 1`. Results are applied to a
/// copy of `snapshot` with the same record and advantage rules the
/// simulator uses; neither input is modified.
pub fn replay(snapshot: &League, log: &[Vec<MatchResult>], up_to_round: usize) -> Result<League> {
    if up_to_round > log.len() {
        return Err(LeagueError::RoundOutOfRange {
            requested: up_to_round,
            available: log.len(),
        });
    }

    let mut league = snapshot.clone();
    for round in &log[..up_to_round] {
        for result in round {
            league.check(result.team1())?;
            league.check(result.team2())?;
            let (team1, team2) = league.pair_mut(result.team1(), result.team2());
            settle(team1, team2, result);
        }
    }
    Ok(league)
}

/// Standings as of the end of round `up_to_round` (0 = before the season)
pub fn rank_as_of(
    snapshot: &League,
    log: &[Vec<MatchResult>],
    up_to_round: usize,
) -> Result<Standings> {
    replay(snapshot, log, up_to_round).map(|league| rank(&league))
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
