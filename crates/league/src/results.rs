//! Season results storage and reporting

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use cascade_core::{
    field_odds, format_odds, rank_as_of, BracketResult, League, MatchResult, Round,
    Standings, TeamId,
};

use crate::artifacts::{season_artifacts, ArtifactKey};
use crate::caption::week_caption;
use crate::config::LeagueConfig;
use crate::error::{Error, Result};
use crate::season::{game_log, league_as_of, WeekResults};

/// Complete record of one simulated season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonResults {
    pub name: String,
    /// Seed the season was played with
    pub seed: u64,
    pub config: LeagueConfig,
    /// Team ratings before the first game
    pub opening: League,
    pub weeks: Vec<WeekResults>,
    /// Scheduled matchups keyed by week number
    pub upcoming: BTreeMap<u32, Round<TeamId>>,
    pub playoffs: Option<BracketResult>,
    /// Team ratings after the last game played, playoffs included
    pub league: League,
}

impl SeasonResults {
    /// Save results to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn weeks_played(&self) -> u32 {
        self.weeks.len() as u32
    }

    pub fn week(&self, week: u32) -> Option<&WeekResults> {
        self.weeks.iter().find(|w| w.week == week)
    }

    /// League as it stood after `week` regular-season weeks
    pub fn league_as_of(&self, week: u32) -> Result<League> {
        league_as_of(&self.opening, &self.weeks, week)
    }

    /// Standings after `week` regular-season weeks (0 = preseason)
    pub fn standings_as_of(&self, week: u32) -> Result<Standings> {
        if week > self.weeks_played() {
            return Err(Error::UnknownWeek(week));
        }
        Ok(rank_as_of(
            &self.opening,
            &game_log(&self.weeks),
            week as usize,
        )?)
    }

    /// Final regular-season table (playoff games excluded)
    pub fn regular_season_standings(&self) -> Result<Standings> {
        self.standings_as_of(self.weeks_played())
    }

    /// Caption text for a played week
    pub fn caption(&self, week: u32) -> Result<String> {
        if week == 0 {
            return Err(Error::UnknownWeek(week));
        }
        let league = self.league_as_of(week)?;
        Ok(week_caption(week, &league, self.upcoming.get(&(week + 1))))
    }

    /// Every game keyed the way an image renderer would name it
    pub fn artifacts(&self) -> Vec<(ArtifactKey, &MatchResult)> {
        season_artifacts(&self.weeks, self.playoffs.as_ref())
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let names = &self.league;
        let mut report = String::new();
        report.push_str(&format!("=== Season: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Teams: {}\n",
            self.opening
                .teams()
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(", ")
        ));
        report.push_str(&format!(
            "Seed: {}, {} round robin(s), {} week(s) played\n",
            self.seed,
            self.config.round_robins,
            self.weeks_played()
        ));

        for week in &self.weeks {
            report.push_str(&format!("\nWeek {}:\n", week.week));
            for game in &week.games {
                report.push_str(&format!("  {}\n", scoreline(game, names)));
            }
            for upset in week.upsets() {
                report.push_str(&format!(
                    "  Upset: {} over {}\n",
                    names.name(upset.winner()),
                    names.name(upset.loser())
                ));
            }
        }

        match self.regular_season_standings() {
            Ok(standings) => {
                report.push_str("\nFinal Standings:\n");
                report.push_str(&standings.to_string());
            }
            Err(err) => report.push_str(&format!("\nFinal Standings unavailable: {}\n", err)),
        }

        if let Some(playoffs) = &self.playoffs {
            report.push_str("\nQuarterfinals:\n");
            for game in &playoffs.quarterfinals {
                report.push_str(&format!("  {}\n", scoreline(game, names)));
            }
            report.push_str("Semifinals:\n");
            for game in &playoffs.semifinals {
                report.push_str(&format!("  {}\n", scoreline(game, names)));
            }
            let series = &playoffs.final_series;
            report.push_str(&format!(
                "Final ({}-{}):\n",
                series.team1_wins, series.team2_wins
            ));
            for game in &series.games {
                report.push_str(&format!("  {}\n", scoreline(game, names)));
            }
            report.push_str(&format!("Champion: {}\n", names.name(playoffs.champion)));
        } else {
            report.push_str("\nChampionship Odds:\n");
            for (team, odds) in field_odds(self.league.teams()) {
                report.push_str(&format!("  {}: {}\n", team, format_odds(odds)));
            }
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

fn scoreline(game: &MatchResult, league: &League) -> String {
    format!(
        "{} {} - {} {}",
        league.name(game.team1()),
        game.team1_score(),
        game.team2_score(),
        league.name(game.team2())
    )
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
