//! Stable keys for per-game artifacts (scoreboards, photos, the trophy)

use std::fmt;

use cascade_core::{BracketResult, MatchResult};

use crate::season::WeekResults;

/// Which part of the season a game belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStage {
    Week(u32),
    Quarterfinal,
    Semifinal,
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKey {
    /// `game` is 1-based within its week or playoff round
    Game { stage: GameStage, game: usize },
    ChampionTrophy,
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKey::Game { stage, game } => match stage {
                GameStage::Week(week) => write!(f, "week_{}_game_{}", week, game),
                GameStage::Quarterfinal => write!(f, "tournament_quarterfinal_game_{}", game),
                GameStage::Semifinal => write!(f, "tournament_semifinal_game_{}", game),
                GameStage::Final => write!(f, "tournament_final_game_{}", game),
            },
            ArtifactKey::ChampionTrophy => write!(f, "tournament_champion_trophy"),
        }
    }
}

fn keyed<'a>(
    stage: GameStage,
    games: &'a [MatchResult],
) -> impl Iterator<Item = (ArtifactKey, &'a MatchResult)> {
    games
        .iter()
        .enumerate()
        .map(move |(i, game)| (ArtifactKey::Game { stage, game: i + 1 }, game))
}

/// Keys for every game in play order.
///
/// The trophy is keyed to the deciding game of the final.
pub fn season_artifacts<'a>(
    weeks: &'a [WeekResults],
    playoffs: Option<&'a BracketResult>,
) -> Vec<(ArtifactKey, &'a MatchResult)> {
    let mut artifacts: Vec<_> = weeks
        .iter()
        .flat_map(|w| keyed(GameStage::Week(w.week), &w.games))
        .collect();

    if let Some(bracket) = playoffs {
        artifacts.extend(keyed(GameStage::Quarterfinal, &bracket.quarterfinals));
        artifacts.extend(keyed(GameStage::Semifinal, &bracket.semifinals));
        artifacts.extend(keyed(GameStage::Final, &bracket.final_series.games));
        if let Some(last) = bracket.final_series.games.last() {
            artifacts.push((ArtifactKey::ChampionTrophy, last));
        }
    }

    artifacts
}
