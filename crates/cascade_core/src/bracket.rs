//! Eight-team single-elimination playoffs

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{LeagueError, Result};
use crate::league::League;
use crate::simulator::{MatchResult, MatchSimulator};
use crate::team::TeamId;

/// Teams in the bracket
pub const BRACKET_SIZE: usize = 8;

/// How the championship series is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalFormat {
    /// Stop as soon as one side has this many wins (2 = best of three)
    FirstTo(u32),
    /// Always play this many games; more wins takes the series and a level
    /// series goes to the winner of the last game
    FixedGames(u32),
}

impl Default for FinalFormat {
    fn default() -> Self {
        FinalFormat::FirstTo(2)
    }
}

impl FinalFormat {
    /// Most games the series can take
    pub fn max_games(self) -> u32 {
        match self {
            FinalFormat::FirstTo(wins) => (2 * wins).saturating_sub(1).max(1),
            FinalFormat::FixedGames(games) => games.max(1),
        }
    }

    fn is_decided(self, series: &FinalSeries) -> bool {
        match self {
            FinalFormat::FirstTo(wins) => series.team1_wins.max(series.team2_wins) >= wins.max(1),
            FinalFormat::FixedGames(_) => series.games.len() as u32 >= self.max_games(),
        }
    }
}

/// Where the bracket is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BracketStage {
    Seeded,
    QuarterfinalsDone,
    SemifinalsDone,
    FinalInProgress,
    ChampionDecided,
}

/// The championship series between the two semifinal winners
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalSeries {
    pub team1: TeamId,
    pub team2: TeamId,
    pub games: Vec<MatchResult>,
    pub team1_wins: u32,
    pub team2_wins: u32,
}

impl FinalSeries {
    fn new(team1: TeamId, team2: TeamId) -> Self {
        Self {
            team1,
            team2,
            games: Vec::new(),
            team1_wins: 0,
            team2_wins: 0,
        }
    }

    fn push(&mut self, game: MatchResult) {
        if game.team1_won() {
            self.team1_wins += 1;
        } else {
            self.team2_wins += 1;
        }
        self.games.push(game);
    }

    /// Series leader; a level series goes to whoever won the last game
    pub fn leader(&self) -> Option<TeamId> {
        if self.team1_wins > self.team2_wins {
            Some(self.team1)
        } else if self.team2_wins > self.team1_wins {
            Some(self.team2)
        } else {
            self.games.last().map(MatchResult::winner)
        }
    }
}

/// Everything a finished bracket produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketResult {
    pub seeds: Vec<TeamId>,
    pub quarterfinals: Vec<MatchResult>,
    pub semifinals: Vec<MatchResult>,
    pub final_series: FinalSeries,
    pub champion: TeamId,
}

/// Seeded playoff bracket, advanced one stage at a time
#[derive(Debug, Clone)]
pub struct Bracket {
    seeds: [TeamId; BRACKET_SIZE],
    format: FinalFormat,
    stage: BracketStage,
    quarterfinals: Vec<MatchResult>,
    semifinals: Vec<MatchResult>,
    final_series: Option<FinalSeries>,
    simulator: MatchSimulator,
}

impl Bracket {
    /// Seed from a ranked list (index 0 = seed 1).
    ///
    /// Rejects anything but exactly eight distinct teams of `league`.
    pub fn seed(league: &League, ranked: &[TeamId], format: FinalFormat) -> Result<Self> {
        let seeds: [TeamId; BRACKET_SIZE] =
            ranked.try_into().map_err(|_| LeagueError::BracketSize {
                expected: BRACKET_SIZE,
                found: ranked.len(),
            })?;

        for (i, &id) in seeds.iter().enumerate() {
            league.check(id)?;
            if seeds[..i].contains(&id) {
                return Err(LeagueError::DuplicateSeed(id));
            }
        }

        Ok(Self {
            seeds,
            format,
            stage: BracketStage::Seeded,
            quarterfinals: Vec::new(),
            semifinals: Vec::new(),
            final_series: None,
            simulator: MatchSimulator::default(),
        })
    }

    pub fn with_simulator(mut self, simulator: MatchSimulator) -> Self {
        self.simulator = simulator;
        self
    }

    pub fn stage(&self) -> BracketStage {
        self.stage
    }

    pub fn format(&self) -> FinalFormat {
        self.format
    }

    pub fn seeds(&self) -> &[TeamId] {
        &self.seeds
    }

    /// Quarterfinal pairings: 1v8, 2v7, 3v6, 4v5
    pub fn quarterfinal_pairs(&self) -> [(TeamId, TeamId); 4] {
        let s = &self.seeds;
        [(s[0], s[7]), (s[1], s[6]), (s[2], s[5]), (s[3], s[4])]
    }

    pub fn quarterfinals(&self) -> &[MatchResult] {
        &self.quarterfinals
    }

    pub fn semifinals(&self) -> &[MatchResult] {
        &self.semifinals
    }

    pub fn final_series(&self) -> Option<&FinalSeries> {
        self.final_series.as_ref()
    }

    pub fn champion(&self) -> Option<TeamId> {
        match self.stage {
            BracketStage::ChampionDecided => self.final_series.as_ref().and_then(FinalSeries::leader),
            _ => None,
        }
    }

    /// Play the next stage and return the new stage.
    ///
    /// Quarterfinals and semifinals are played in full; the final advances
    /// one game per call. A decided bracket is left untouched.
    pub fn advance<R: Rng>(&mut self, league: &mut League, rng: &mut R) -> BracketStage {
        match self.stage {
            BracketStage::Seeded => {
                info!("playing quarterfinals");
                let pairs = self.quarterfinal_pairs();
                self.quarterfinals = self.play_round(league, &pairs, rng);
                self.stage = BracketStage::QuarterfinalsDone;
            }
            BracketStage::QuarterfinalsDone => {
                info!("playing semifinals");
                let w: Vec<TeamId> = self.quarterfinals.iter().map(MatchResult::winner).collect();
                let pairs = [(w[0], w[1]), (w[2], w[3])];
                self.semifinals = self.play_round(league, &pairs, rng);
                self.stage = BracketStage::SemifinalsDone;
            }
            BracketStage::SemifinalsDone => {
                let team1 = self.semifinals[0].winner();
                let team2 = self.semifinals[1].winner();
                info!(
                    team1 = league.name(team1),
                    team2 = league.name(team2),
                    format = ?self.format,
                    "final series starting"
                );
                self.final_series = Some(FinalSeries::new(team1, team2));
                self.play_final_game(league, rng);
            }
            BracketStage::FinalInProgress => self.play_final_game(league, rng),
            BracketStage::ChampionDecided => {}
        }
        self.stage
    }

    /// Advance until a champion is decided
    pub fn run<R: Rng>(mut self, league: &mut League, rng: &mut R) -> BracketResult {
        while self.advance(league, rng) != BracketStage::ChampionDecided {}

        let final_series = self
            .final_series
            .take()
            .expect("a decided bracket always has a final series");
        let champion = final_series
            .leader()
            .expect("a decided series always has a leader");

        info!(champion = league.name(champion), "champion decided");

        BracketResult {
            seeds: self.seeds.to_vec(),
            quarterfinals: self.quarterfinals,
            semifinals: self.semifinals,
            final_series,
            champion,
        }
    }

    fn play_round<R: Rng>(
        &self,
        league: &mut League,
        pairs: &[(TeamId, TeamId)],
        rng: &mut R,
    ) -> Vec<MatchResult> {
        pairs
            .iter()
            .map(|&(a, b)| {
                let result = self.simulator.simulate(league, a, b, rng);
                if result.upset() {
                    info!(
                        winner = league.name(result.winner()),
                        loser = league.name(result.loser()),
                        "playoff upset"
                    );
                }
                result
            })
            .collect()
    }

    fn play_final_game<R: Rng>(&mut self, league: &mut League, rng: &mut R) {
        let Some(series) = self.final_series.as_mut() else {
            return;
        };
        let game = self.simulator.simulate(league, series.team1, series.team2, rng);
        series.push(game);
        info!(
            game = series.games.len(),
            team1_wins = series.team1_wins,
            team2_wins = series.team2_wins,
            "final game played"
        );

        self.stage = if self.format.is_decided(series) {
            BracketStage::ChampionDecided
        } else {
            BracketStage::FinalInProgress
        };
    }
}

/// Seed and play a full bracket from ranked standings
pub fn run_playoffs<R: Rng>(
    league: &mut League,
    ranked: &[TeamId],
    format: FinalFormat,
    rng: &mut R,
) -> Result<BracketResult> {
    let bracket = Bracket::seed(league, ranked, format)?;
    Ok(bracket.run(league, rng))
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
