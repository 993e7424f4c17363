//! Match simulation and post-match rating updates

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::league::League;
use crate::scoring::ScoringDetail;
use crate::team::{Category, Team, TeamId};

/// Fixed parameters of the scoring model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationRules {
    /// Scoring opportunities per match
    pub opportunities: u32,
    /// Chance that a converted opportunity is a cascade (double points)
    pub cascade_chance: f64,
    /// Opportunity share of two equal teams
    pub base_chance: f64,
    /// Opportunity share gained per point of overall advantage
    pub chance_per_advantage: f64,
    pub min_chance: f64,
    pub max_chance: f64,
    /// Category weight of a team with zero advantage in that category
    pub base_weight: i32,
    /// Floor for category weights
    pub min_weight: i32,
}

impl Default for SimulationRules {
    fn default() -> Self {
        Self {
            opportunities: 20,
            cascade_chance: 1.0 / 15.0,
            base_chance: 0.5,
            chance_per_advantage: 0.05,
            min_chance: 0.1,
            max_chance: 0.9,
            base_weight: 3,
            min_weight: 1,
        }
    }
}

impl SimulationRules {
    /// Probability that `team` wins any single opportunity against `opponent`.
    ///
    /// This is the only place overall advantage influences a match.
    pub fn win_chance(&self, team: &Team, opponent: &Team) -> f64 {
        let diff = (team.overall() as i32 - opponent.overall() as i32) as f64;
        (self.base_chance + diff * self.chance_per_advantage).clamp(self.min_chance, self.max_chance)
    }

    /// Weight of `category` when `team` converts an opportunity
    pub fn category_weight(&self, team: &Team, category: Category) -> u32 {
        (self.base_weight + team.advantage(category) as i32).max(self.min_weight) as u32
    }
}

/// Outcome of one simulated match.
///
/// Teams are referenced by id. By the time a result exists both teams'
/// ratings already include it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    team1: TeamId,
    team2: TeamId,
    team1_score: u32,
    team2_score: u32,
    team1_detail: ScoringDetail,
    team2_detail: ScoringDetail,
    upset: bool,
}

impl MatchResult {
    pub fn team1(&self) -> TeamId {
        self.team1
    }

    pub fn team2(&self) -> TeamId {
        self.team2
    }

    pub fn team1_score(&self) -> u32 {
        self.team1_score
    }

    pub fn team2_score(&self) -> u32 {
        self.team2_score
    }

    pub fn team1_detail(&self) -> &ScoringDetail {
        &self.team1_detail
    }

    pub fn team2_detail(&self) -> &ScoringDetail {
        &self.team2_detail
    }

    pub fn upset(&self) -> bool {
        self.upset
    }

    /// Team1 only wins with a strictly higher score; ties go to team2
    pub fn team1_won(&self) -> bool {
        self.team1_score > self.team2_score
    }

    pub fn winner(&self) -> TeamId {
        if self.team1_won() {
            self.team1
        } else {
            self.team2
        }
    }

    pub fn loser(&self) -> TeamId {
        if self.team1_won() {
            self.team2
        } else {
            self.team1
        }
    }

    pub fn involves(&self, id: TeamId) -> bool {
        self.team1 == id || self.team2 == id
    }

    /// Score and breakdown of the given side, if it played in this match
    pub fn side(&self, id: TeamId) -> Option<(u32, &ScoringDetail)> {
        if id == self.team1 {
            Some((self.team1_score, &self.team1_detail))
        } else if id == self.team2 {
            Some((self.team2_score, &self.team2_detail))
        } else {
            None
        }
    }

    /// Three-line summary: scoreline, then each side's breakdown
    pub fn describe(&self, league: &League) -> String {
        let name1 = league.name(self.team1);
        let name2 = league.name(self.team2);
        format!(
            "{} {} - {} {}\n{} scoring: {}\n{} scoring: {}",
            name1,
            self.team1_score,
            self.team2_score,
            name2,
            name1,
            self.team1_detail,
            name2,
            self.team2_detail
        )
    }
}

/// Applies a finished match to both teams' records and advantages and
/// returns the upset flag.
///
/// The flag compares overall advantages after they were updated, so it
/// only fires when the loser still ends up ahead of the winner.
pub(crate) fn settle(team1: &mut Team, team2: &mut Team, result: &MatchResult) -> bool {
    let high = result.team1_score.max(result.team2_score);
    let low = result.team1_score.min(result.team2_score);

    let (winner, loser, winner_detail, loser_detail) = if result.team1_won() {
        (team1, team2, &result.team1_detail, &result.team2_detail)
    } else {
        (team2, team1, &result.team2_detail, &result.team1_detail)
    };

    winner.record_win(high, low);
    loser.record_loss(low, high);

    winner.shift_overall(1);
    loser.shift_overall(-1);

    for category in Category::ALL {
        let ours = winner_detail.count(category);
        let theirs = loser_detail.count(category);
        if ours > theirs {
            winner.shift_advantage(category, 1);
            loser.shift_advantage(category, -1);
        } else if ours < theirs {
            loser.shift_advantage(category, 1);
            winner.shift_advantage(category, -1);
        }
    }

    winner.overall() < loser.overall()
}

/// Plays matches between teams of a `League`
#[derive(Debug, Clone, Default)]
pub struct MatchSimulator {
    rules: SimulationRules,
}

impl MatchSimulator {
    pub fn new(rules: SimulationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &SimulationRules {
        &self.rules
    }

    /// Simulate `team1` against `team2` and update both in place.
    ///
    /// Each opportunity draws, in order: which side converts it, the
    /// category, and whether it is a cascade. The same generator state
    /// therefore always produces the same match.
    ///
    /// # Panics
    /// If the ids are equal or not part of `league`.
    pub fn simulate<R: Rng>(
        &self,
        league: &mut League,
        team1: TeamId,
        team2: TeamId,
        rng: &mut R,
    ) -> MatchResult {
        let (first, second) = league.pair_mut(team1, team2);
        let chance = self.rules.win_chance(first, second);

        let mut result = MatchResult {
            team1,
            team2,
            team1_score: 0,
            team2_score: 0,
            team1_detail: ScoringDetail::default(),
            team2_detail: ScoringDetail::default(),
            upset: false,
        };

        for _ in 0..self.rules.opportunities {
            if rng.gen::<f64>() < chance {
                result.team1_score += self.convert(first, &mut result.team1_detail, rng);
            } else {
                result.team2_score += self.convert(second, &mut result.team2_detail, rng);
            }
        }

        result.upset = settle(first, second, &result);

        debug!(
            team1 = first.name(),
            team2 = second.name(),
            score1 = result.team1_score,
            score2 = result.team2_score,
            chance,
            upset = result.upset,
            "match simulated"
        );

        result
    }

    /// Score one opportunity for `team`, returning the points earned
    fn convert<R: Rng>(&self, team: &Team, detail: &mut ScoringDetail, rng: &mut R) -> u32 {
        let category = self.pick_category(team, rng);
        let cascade = rng.gen::<f64>() < self.rules.cascade_chance;
        detail.record(category, cascade)
    }

    fn pick_category<R: Rng>(&self, team: &Team, rng: &mut R) -> Category {
        let weights = Category::ALL.map(|c| self.rules.category_weight(team, c));
        let total: u32 = weights.iter().sum();

        let mut roll = rng.gen_range(0..total);
        for (category, weight) in Category::ALL.into_iter().zip(weights) {
            if roll < weight {
                return category;
            }
            roll -= weight;
        }
        Category::Kick
    }
}

#[cfg(test)]
#[path = "simulator_tests.rs"]
mod simulator_tests;
