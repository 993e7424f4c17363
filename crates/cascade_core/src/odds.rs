//! American-style betting odds for matchups and the championship field

use std::collections::BTreeMap;

use crate::simulator::SimulationRules;
use crate::team::{Team, MAX_ADVANTAGE, MIN_ADVANTAGE};

/// Odds quoted for a probability of zero or below
pub const LONGEST_ODDS: i32 = 1000;

/// Odds quoted for a probability of one or above
pub const SHORTEST_ODDS: i32 = -1000;

/// Largest share of a matchup probability taken from the win percentage
const MAX_RECORD_WEIGHT: f64 = 0.3;

/// Games after which the record weight would reach 1.0 (before the cap)
const RECORD_WEIGHT_GAMES: f64 = 20.0;

/// Point differential scale floor
const MIN_DIFFERENTIAL_SCALE: f64 = 100.0;

const DIFFERENTIAL_NUDGE: f64 = 0.1;

fn round_to_nearest_five(odds: f64) -> i32 {
    ((odds / 5.0).round_ties_even() * 5.0) as i32
}

/// Convert a win probability into American odds.
///
/// Favorites get negative odds (stake needed to win 100), underdogs
/// positive odds (winnings on a 100 stake), rounded to the nearest 5.
pub fn probability_to_american_odds(probability: f64) -> i32 {
    if probability <= 0.0 {
        return LONGEST_ODDS;
    }
    if probability >= 1.0 {
        return SHORTEST_ODDS;
    }

    if probability > 0.5 {
        round_to_nearest_five(-100.0 * probability / (1.0 - probability))
    } else {
        round_to_nearest_five(100.0 * (1.0 - probability) / probability)
    }
}

/// `+150` / `-200` style text
pub fn format_odds(odds: i32) -> String {
    if odds > 0 {
        format!("+{}", odds)
    } else {
        odds.to_string()
    }
}

/// Modeled probability that `team` beats `opponent`
pub fn matchup_probability(team: &Team, opponent: &Team) -> f64 {
    let rules = SimulationRules::default();
    let mut probability = rules.win_chance(team, opponent);

    if !(team.has_played() && opponent.has_played()) {
        return probability;
    }

    let weight = (team.games_played() as f64 / RECORD_WEIGHT_GAMES).min(MAX_RECORD_WEIGHT);
    probability = probability * (1.0 - weight) + team.win_pct() * weight;

    let ours = team.point_differential() as f64;
    let theirs = opponent.point_differential() as f64;
    let total = ours.abs() + theirs.abs();
    if total > 0.0 {
        let diff = (ours - theirs) / total.max(MIN_DIFFERENTIAL_SCALE);
        probability = (probability + diff * DIFFERENTIAL_NUDGE).clamp(rules.min_chance, rules.max_chance);
    }

    probability
}

/// Odds for both sides of a matchup, `(team, opponent)`
pub fn matchup_odds(team: &Team, opponent: &Team) -> (i32, i32) {
    let probability = matchup_probability(team, opponent);
    (
        probability_to_american_odds(probability),
        probability_to_american_odds(1.0 - probability),
    )
}

/// Championship strength in [0.01, 0.99] from record, overall advantage
/// and point differential
pub fn team_strength(team: &Team) -> f64 {
    let win_pct = team.wins() as f64 / team.games_played().max(1) as f64;
    let total_points = (team.points_for() + team.points_against()).max(1) as f64;
    let differential = team.point_differential() as f64 / total_points;
    let span = (MAX_ADVANTAGE - MIN_ADVANTAGE) as f64;
    let advantage = (team.overall() - MIN_ADVANTAGE) as f64 / span;

    (0.5 * win_pct + 0.3 * advantage + 0.2 * differential).clamp(0.01, 0.99)
}

/// Championship probabilities, normalised to sum to 1, keyed by team name
pub fn field_probabilities<'a, I>(teams: I) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = &'a Team>,
{
    let strengths: Vec<(String, f64)> = teams
        .into_iter()
        .map(|t| (t.name().to_string(), team_strength(t)))
        .collect();
    let total: f64 = strengths.iter().map(|(_, s)| s).sum();

    strengths
        .into_iter()
        .map(|(name, strength)| (name, strength / total))
        .collect()
}

/// Championship odds for every team, keyed by team name
pub fn field_odds<'a, I>(teams: I) -> BTreeMap<String, i32>
where
    I: IntoIterator<Item = &'a Team>,
{
    field_probabilities(teams)
        .into_iter()
        .map(|(name, p)| (name, probability_to_american_odds(p)))
        .collect()
}

#[cfg(test)]
#[path = "odds_tests.rs"]
mod odds_tests;
