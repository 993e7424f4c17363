//! The authoritative team store

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::{LeagueError, Result};
use crate::team::{Team, TeamId};

/// Owns every team of a league. Other components refer to teams by
/// `TeamId` and borrow them from here, so there is exactly one copy of
/// each team's live state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    teams: Vec<Team>,
}

impl League {
    /// Build a league from team names, in registration order
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut league = Self::default();
        for name in names {
            league.add_team(Team::new(name))?;
        }
        Ok(league)
    }

    /// Register a team, rejecting duplicate names
    pub fn add_team(&mut self, team: Team) -> Result<TeamId> {
        if self.id_of(team.name()).is_some() {
            return Err(LeagueError::DuplicateTeam(team.name().to_string()));
        }
        self.teams.push(team);
        Ok(TeamId(self.teams.len() - 1))
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Team ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = TeamId> + '_ {
        (0..self.teams.len()).map(TeamId)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &Team)> {
        self.teams.iter().enumerate().map(|(i, team)| (TeamId(i), team))
    }

    pub fn get(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.0)
    }

    pub fn contains(&self, id: TeamId) -> bool {
        id.0 < self.teams.len()
    }

    pub fn id_of(&self, name: &str) -> Option<TeamId> {
        self.teams.iter().position(|t| t.name() == name).map(TeamId)
    }

    /// Look a team up by name, failing with `UnknownTeam`
    pub fn require(&self, name: &str) -> Result<TeamId> {
        self.id_of(name)
            .ok_or_else(|| LeagueError::UnknownTeam(name.to_string()))
    }

    /// Check that an id belongs to this league
    pub fn check(&self, id: TeamId) -> Result<TeamId> {
        if self.contains(id) {
            Ok(id)
        } else {
            Err(LeagueError::UnknownTeamId(id))
        }
    }

    /// Name of a team, `"?"` for foreign ids
    pub fn name(&self, id: TeamId) -> &str {
        self.get(id).map(Team::name).unwrap_or("?")
    }

    /// Disjoint mutable borrows of two different teams.
    ///
    /// # Panics
    /// If `a == b` or either id is out of range. Both are caller bugs.
    pub fn pair_mut(&mut self, a: TeamId, b: TeamId) -> (&mut Team, &mut Team) {
        assert_ne!(a, b, "a team cannot be paired with itself");
        if a.0 < b.0 {
            let (left, right) = self.teams.split_at_mut(b.0);
            (&mut left[a.0], &mut right[0])
        } else {
            let (left, right) = self.teams.split_at_mut(a.0);
            (&mut right[0], &mut left[b.0])
        }
    }

    /// Frozen copy of the current state, used as the starting point for
    /// historical standings
    pub fn snapshot(&self) -> League {
        self.clone()
    }
}

impl Index<TeamId> for League {
    type Output = Team;

    fn index(&self, id: TeamId) -> &Team {
        &self.teams[id.0]
    }
}

#[cfg(test)]
#[path = "league_tests.rs"]
mod league_tests;
