//! Season driver
//!
//! Owns the authoritative `League` for one season and plays it week by
//! week, then runs the playoff bracket from the final regular-season table.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use cascade_core::{
    generate_round_robin, rank, rank_as_of, replay, run_playoffs, BracketResult, League,
    MatchResult, MatchSimulator, Round, Standings, TeamId,
};

use crate::config::LeagueConfig;
use crate::error::{Error, Result};
use crate::results::SeasonResults;

/// Every game of one regular-season week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekResults {
    /// 1-based, continuous across round-robin cycles
    pub week: u32,
    pub games: Vec<MatchResult>,
}

impl WeekResults {
    pub fn upsets(&self) -> impl Iterator<Item = &MatchResult> {
        self.games.iter().filter(|g| g.upset())
    }
}

/// Results of each week as the per-round log `replay` expects
pub(crate) fn game_log(weeks: &[WeekResults]) -> Vec<Vec<MatchResult>> {
    weeks.iter().map(|w| w.games.clone()).collect()
}

/// League state after `week` weeks, rebuilt from the opening snapshot
pub(crate) fn league_as_of(opening: &League, weeks: &[WeekResults], week: u32) -> Result<League> {
    if week as usize > weeks.len() {
        return Err(Error::UnknownWeek(week));
    }
    Ok(replay(opening, &game_log(weeks), week as usize)?)
}

/// Matchups of every regular-season week, keyed by week number
fn build_upcoming(league: &League, config: &LeagueConfig) -> Result<BTreeMap<u32, Round<TeamId>>> {
    let ids: Vec<TeamId> = league.ids().collect();
    let mut cycle = generate_round_robin(&ids)?;
    if let Some(max_rounds) = config.rounds_per_round_robin {
        cycle.truncate(max_rounds);
    }

    let mut upcoming = BTreeMap::new();
    let mut week = 1;
    for _ in 0..config.round_robins {
        for round in cycle.iter() {
            upcoming.insert(week, round.clone());
            week += 1;
        }
    }
    Ok(upcoming)
}

pub struct Season {
    config: LeagueConfig,
    seed: u64,
    rng: StdRng,
    simulator: MatchSimulator,
    league: League,
    opening: League,
    weeks: Vec<WeekResults>,
    upcoming: BTreeMap<u32, Round<TeamId>>,
    playoffs: Option<BracketResult>,
}

impl Season {
    /// Register the configured teams and lay out the schedule.
    ///
    /// Without a configured seed one is drawn from the OS; either way it is
    /// logged so the season can be replayed.
    pub fn new(config: LeagueConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let league = League::new(&config.teams)?;
        let upcoming = build_upcoming(&league, &config)?;

        info!(
            teams = league.len(),
            weeks = upcoming.len(),
            seed,
            "season scheduled"
        );

        Ok(Self {
            opening: league.snapshot(),
            rng: StdRng::seed_from_u64(seed),
            simulator: MatchSimulator::default(),
            playoffs: None,
            weeks: Vec::new(),
            config,
            seed,
            league,
            upcoming,
        })
    }

    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    /// Team ratings before the first game
    pub fn opening(&self) -> &League {
        &self.opening
    }

    pub fn weeks(&self) -> &[WeekResults] {
        &self.weeks
    }

    pub fn playoffs(&self) -> Option<&BracketResult> {
        self.playoffs.as_ref()
    }

    /// Scheduled matchups keyed by week number
    pub fn upcoming(&self) -> &BTreeMap<u32, Round<TeamId>> {
        &self.upcoming
    }

    /// Matchups of `week`, if it is on the schedule
    pub fn fixtures(&self, week: u32) -> Option<&Round<TeamId>> {
        self.upcoming.get(&week)
    }

    /// Weeks already played
    pub fn current_week(&self) -> u32 {
        self.weeks.len() as u32
    }

    pub fn total_weeks(&self) -> u32 {
        self.upcoming.len() as u32
    }

    pub fn regular_season_done(&self) -> bool {
        self.current_week() >= self.total_weeks()
    }

    /// Play the next scheduled week; `None` once the regular season is over
    pub fn play_next_week(&mut self) -> Option<&WeekResults> {
        let week = self.current_week() + 1;
        let round = self.upcoming.get(&week)?;

        let games: Vec<MatchResult> = round
            .iter()
            .map(|&(a, b)| self.simulator.simulate(&mut self.league, a, b, &mut self.rng))
            .collect();

        let played = WeekResults { week, games };
        info!(
            week,
            games = played.games.len(),
            upsets = played.upsets().count(),
            "week played"
        );
        self.weeks.push(played);
        self.weeks.last()
    }

    /// Play every remaining week of the regular season
    pub fn play_regular_season(&mut self) -> &[WeekResults] {
        while self.play_next_week().is_some() {}
        if let Some(leader) = rank(&self.league).leader() {
            info!(leader = self.league.name(leader), "regular season complete");
        }
        &self.weeks
    }

    /// Seed the bracket from the final regular-season table and play it out.
    ///
    /// Only allowed once, after every scheduled week has been played.
    pub fn play_playoffs(&mut self) -> Result<&BracketResult> {
        if self.playoffs.is_some() {
            return Err(Error::PlayoffsAlreadyPlayed);
        }
        if !self.regular_season_done() {
            return Err(Error::PlayoffsNotReady {
                played: self.current_week(),
                scheduled: self.total_weeks(),
            });
        }

        let seeds = rank(&self.league).ids();
        let bracket = run_playoffs(
            &mut self.league,
            &seeds,
            self.config.final_format,
            &mut self.rng,
        )?;
        info!(champion = self.league.name(bracket.champion), "playoffs complete");
        Ok(&*self.playoffs.insert(bracket))
    }

    /// Regular season plus, when enabled, the playoffs
    pub fn play(&mut self) -> Result<()> {
        self.play_regular_season();
        if self.config.playoffs {
            self.play_playoffs()?;
        }
        Ok(())
    }

    /// Live standings
    pub fn standings(&self) -> Standings {
        rank(&self.league)
    }

    /// Standings after `week` regular-season weeks (0 = preseason)
    pub fn standings_as_of(&self, week: u32) -> Result<Standings> {
        if week > self.current_week() {
            return Err(Error::UnknownWeek(week));
        }
        Ok(rank_as_of(
            &self.opening,
            &game_log(&self.weeks),
            week as usize,
        )?)
    }

    /// League as it stood after `week` regular-season weeks
    pub fn league_as_of(&self, week: u32) -> Result<League> {
        league_as_of(&self.opening, &self.weeks, week)
    }

    pub fn results(&self) -> SeasonResults {
        SeasonResults {
            name: self.config.name.clone(),
            seed: self.seed,
            config: self.config.clone(),
            opening: self.opening.clone(),
            weeks: self.weeks.clone(),
            upcoming: self.upcoming.clone(),
            playoffs: self.playoffs.clone(),
            league: self.league.clone(),
        }
    }
}

#[cfg(test)]
#[path = "season_tests.rs"]
mod season_tests;
