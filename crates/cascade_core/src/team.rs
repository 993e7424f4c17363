//! Team identity and rating state

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound for every advantage score
pub const MAX_ADVANTAGE: i8 = 3;

/// Lower bound for every advantage score
pub const MIN_ADVANTAGE: i8 = -3;

/// Dense index of a team inside its `League`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub usize);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three ways a scoring opportunity can be converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Run,
    Throw,
    Kick,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Run, Category::Throw, Category::Kick];

    /// Points for a normal (non-cascade) score
    pub fn base_points(self) -> u32 {
        match self {
            Category::Run => 3,
            Category::Throw => 2,
            Category::Kick => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Run => "Run",
            Category::Throw => "Throw",
            Category::Kick => "Kick",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn clamp_advantage(value: i8) -> i8 {
    value.clamp(MIN_ADVANTAGE, MAX_ADVANTAGE)
}

/// Per-team rating state: advantages, record and cumulative points.
///
/// Advantages are kept inside `[MIN_ADVANTAGE, MAX_ADVANTAGE]` on every
/// write. Only the match simulator (and the historical replay, on its own
/// copy) changes a team after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    name: String,
    overall: i8,
    run: i8,
    throw: i8,
    kick: i8,
    wins: u32,
    losses: u32,
    points_for: u32,
    points_against: u32,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overall: 0,
            run: 0,
            throw: 0,
            kick: 0,
            wins: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
        }
    }

    /// Start from explicit advantages (clamped into range)
    pub fn with_advantages(mut self, overall: i8, run: i8, throw: i8, kick: i8) -> Self {
        self.overall = clamp_advantage(overall);
        self.run = clamp_advantage(run);
        self.throw = clamp_advantage(throw);
        self.kick = clamp_advantage(kick);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn overall(&self) -> i8 {
        self.overall
    }

    pub fn advantage(&self, category: Category) -> i8 {
        match category {
            Category::Run => self.run,
            Category::Throw => self.throw,
            Category::Kick => self.kick,
        }
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn points_for(&self) -> u32 {
        self.points_for
    }

    pub fn points_against(&self) -> u32 {
        self.points_against
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn has_played(&self) -> bool {
        self.games_played() > 0
    }

    /// Fraction of games won, 0.0 before the first game
    pub fn win_pct(&self) -> f64 {
        if !self.has_played() {
            return 0.0;
        }
        self.wins as f64 / self.games_played() as f64
    }

    pub fn point_differential(&self) -> i64 {
        self.points_for as i64 - self.points_against as i64
    }

    /// Category with the highest advantage. Ties go to the earlier of
    /// Run, Throw, Kick.
    pub fn best_stat(&self) -> Category {
        let mut best = Category::Run;
        for category in Category::ALL {
            if self.advantage(category) > self.advantage(best) {
                best = category;
            }
        }
        best
    }

    /// File-name friendly form of the team name, e.g. `raven's_renegades`
    pub fn logo_slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }

    pub(crate) fn shift_overall(&mut self, delta: i8) {
        self.overall = clamp_advantage(self.overall.saturating_add(delta));
    }

    pub(crate) fn shift_advantage(&mut self, category: Category, delta: i8) {
        let slot = match category {
            Category::Run => &mut self.run,
            Category::Throw => &mut self.throw,
            Category::Kick => &mut self.kick,
        };
        *slot = clamp_advantage(slot.saturating_add(delta));
    }

    pub(crate) fn record_win(&mut self, scored: u32, conceded: u32) {
        self.wins += 1;
        self.points_for += scored;
        self.points_against += conceded;
    }

    pub(crate) fn record_loss(&mut self, scored: u32, conceded: u32) {
        self.losses += 1;
        self.points_for += scored;
        self.points_against += conceded;
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Overall: {}, Run: {}, Throw: {}, Kick: {}, W-L: {}-{})",
            self.name, self.overall, self.run, self.throw, self.kick, self.wins, self.losses
        )
    }
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod team_tests;
