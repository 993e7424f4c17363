use super::*;
use crate::season::Season;

fn played(seed: u64) -> SeasonResults {
    let mut season = Season::new(LeagueConfig {
        seed: Some(seed),
        ..Default::default()
    })
    .unwrap();
    season.play().unwrap();
    season.results()
}

#[test]
fn test_save_load_round_trip() {
    let results = played(21);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("season.json");

    results.save(&path).unwrap();
    let loaded = SeasonResults::load(&path).unwrap();

    assert_eq!(loaded, results);
    assert_eq!(loaded.standings_as_of(3).unwrap(), results.standings_as_of(3).unwrap());
}

#[test]
fn test_load_errors() {
    let dir = tempfile::tempdir().unwrap();

    let missing = SeasonResults::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, Error::Io { .. }));

    let garbage = dir.path().join("garbage.json");
    std::fs::write(&garbage, "{ not json").unwrap();
    assert!(matches!(SeasonResults::load(&garbage), Err(Error::Json(_))));
}

#[test]
fn test_regular_season_table_excludes_playoffs() {
    let results = played(22);
    let standings = results.regular_season_standings().unwrap();

    let games: u32 = standings.iter().map(|row| row.wins + row.losses).sum();
    assert_eq!(games, 56);
    assert!(results.standings_as_of(8).is_err());
}

#[test]
fn test_week_lookup() {
    let results = played(23);

    assert_eq!(results.weeks_played(), 7);
    assert_eq!(results.week(3).map(|w| w.week), Some(3));
    assert!(results.week(0).is_none());
    assert!(results.week(8).is_none());
}

#[test]
fn test_captions() {
    let results = played(24);

    let first = results.caption(1).unwrap();
    assert!(first.starts_with("Week 1 Game Results\n\nCurrent Standings:\n1. "));
    assert!(first.contains("\n\nOdds for Week 2:\n"));
    // four matchups next week
    assert_eq!(first.lines().filter(|l| l.contains(" vs ")).count(), 4);

    let last = results.caption(7).unwrap();
    assert!(last.starts_with("Week 7 Game Results"));
    assert!(!last.contains("Odds for Week"));

    assert!(matches!(results.caption(0), Err(Error::UnknownWeek(0))));
    assert!(matches!(results.caption(8), Err(Error::UnknownWeek(8))));
}

#[test]
fn test_artifacts_cover_every_game() {
    let results = played(25);
    let artifacts = results.artifacts();
    let bracket = results.playoffs.as_ref().unwrap();

    let expected = 28 + 4 + 2 + bracket.final_series.games.len() + 1;
    assert_eq!(artifacts.len(), expected);
    assert_eq!(artifacts[0].0.to_string(), "week_1_game_1");
    assert_eq!(artifacts[27].0.to_string(), "week_7_game_4");
    assert_eq!(artifacts[28].0.to_string(), "tournament_quarterfinal_game_1");
    assert_eq!(artifacts[32].0.to_string(), "tournament_semifinal_game_1");
    assert_eq!(artifacts[34].0.to_string(), "tournament_final_game_1");

    let (trophy, game) = artifacts.last().unwrap();
    assert_eq!(*trophy, ArtifactKey::ChampionTrophy);
    assert_eq!(Some(*game), bracket.final_series.games.last());
}

#[test]
fn test_report() {
    let results = played(26);
    let report = results.generate_report();

    assert!(report.starts_with("=== Season: Cascade League ===\n"));
    assert!(report.contains("Seed: 26, 1 round robin(s), 7 week(s) played"));
    assert!(report.contains("\nWeek 1:\n"));
    assert!(report.contains("\nWeek 7:\n"));
    assert!(report.contains("Final Standings:\n1. "));
    assert!(report.contains("Quarterfinals:"));

    let champion = results.league.name(results.playoffs.as_ref().unwrap().champion);
    assert!(report.contains(&format!("Champion: {}\n", champion)));
}

#[test]
fn test_report_flags_unreplayable_history() {
    let mut results = played(28);
    // the week log names teams the opening snapshot lacks
    results.opening = cascade_core::League::default();

    let report = results.generate_report();
    assert!(report.contains("Final Standings unavailable: "));
    assert!(!report.contains("Final Standings:\n"));
}

#[test]
fn test_report_without_playoffs_lists_odds() {
    let mut season = Season::new(LeagueConfig {
        seed: Some(27),
        playoffs: false,
        ..Default::default()
    })
    .unwrap();
    season.play().unwrap();
    let report = season.results().generate_report();

    assert!(report.contains("Championship Odds:\n"));
    assert!(!report.contains("Champion: "));
}
