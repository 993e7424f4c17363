use super::*;
use cascade_core::{FinalFormat, LeagueError};

fn seeded(seed: u64) -> LeagueConfig {
    LeagueConfig {
        seed: Some(seed),
        ..Default::default()
    }
}

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Scheduling
// =============================================================================

#[test]
fn test_default_season_schedule() {
    let season = Season::new(seeded(1)).unwrap();

    assert_eq!(season.total_weeks(), 7);
    assert_eq!(season.current_week(), 0);
    for week in 1..=7 {
        assert_eq!(season.fixtures(week).unwrap().len(), 4);
    }
    assert!(season.fixtures(8).is_none());
}

#[test]
fn test_truncated_cycles_continue_week_numbers() {
    let config = LeagueConfig {
        round_robins: 2,
        rounds_per_round_robin: Some(3),
        ..seeded(2)
    };
    let season = Season::new(config).unwrap();

    assert_eq!(season.total_weeks(), 6);
    assert_eq!(season.upcoming().keys().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);
    // every cycle repeats the same rounds
    assert_eq!(season.fixtures(1), season.fixtures(4));
    assert_eq!(season.fixtures(3), season.fixtures(6));
}

#[test]
fn test_invalid_config_rejected() {
    let config = LeagueConfig {
        round_robins: 0,
        ..seeded(3)
    };
    assert!(matches!(Season::new(config), Err(Error::InvalidConfig(_))));

    let config = LeagueConfig {
        teams: names(&["A", "B", "A"]),
        playoffs: false,
        ..seeded(3)
    };
    assert!(matches!(
        Season::new(config),
        Err(Error::League(LeagueError::DuplicateTeam(_)))
    ));
}

// =============================================================================
// Regular season
// =============================================================================

#[test]
fn test_weeks_play_in_order() {
    let mut season = Season::new(seeded(4)).unwrap();

    let first = season.play_next_week().unwrap();
    assert_eq!(first.week, 1);
    assert_eq!(first.games.len(), 4);
    assert_eq!(season.current_week(), 1);

    season.play_regular_season();
    assert_eq!(season.current_week(), 7);
    assert!(season.regular_season_done());
    assert!(season.play_next_week().is_none());

    let numbers: Vec<u32> = season.weeks().iter().map(|w| w.week).collect();
    assert_eq!(numbers, [1, 2, 3, 4, 5, 6, 7]);
    for team in season.league().teams() {
        assert_eq!(team.games_played(), 7);
    }
}

#[test]
fn test_games_follow_the_schedule() {
    let mut season = Season::new(seeded(5)).unwrap();
    season.play_regular_season();

    for week in season.weeks() {
        let played: Vec<_> = week.games.iter().map(|g| (g.team1(), g.team2())).collect();
        assert_eq!(&played, season.fixtures(week.week).unwrap());
    }
}

#[test]
fn test_odd_league_gives_byes() {
    let config = LeagueConfig {
        teams: names(&["A", "B", "C", "D", "E"]),
        playoffs: false,
        ..seeded(6)
    };
    let mut season = Season::new(config).unwrap();
    season.play().unwrap();

    assert_eq!(season.current_week(), 5);
    for team in season.league().teams() {
        assert_eq!(team.games_played(), 4);
    }
    assert!(season.playoffs().is_none());
}

#[test]
fn test_same_seed_same_season() {
    let mut first = Season::new(seeded(77)).unwrap();
    let mut second = Season::new(seeded(77)).unwrap();
    first.play().unwrap();
    second.play().unwrap();

    assert_eq!(first.results(), second.results());
}

#[test]
fn test_random_seed_is_recorded() {
    let season = Season::new(LeagueConfig::default()).unwrap();
    assert_eq!(season.results().seed, season.seed());
}

// =============================================================================
// Historical standings
// =============================================================================

#[test]
fn test_history_matches_live_table() {
    let mut season = Season::new(seeded(8)).unwrap();
    season.play_regular_season();

    assert_eq!(season.standings_as_of(7).unwrap(), season.standings());
    assert_eq!(&season.league_as_of(7).unwrap(), season.league());
    assert_eq!(&season.league_as_of(0).unwrap(), season.opening());

    let preseason = season.standings_as_of(0).unwrap();
    assert!(preseason.iter().all(|row| row.wins == 0 && row.losses == 0));
}

#[test]
fn test_unplayed_week_rejected() {
    let mut season = Season::new(seeded(9)).unwrap();
    season.play_next_week();

    assert!(season.standings_as_of(1).is_ok());
    assert!(matches!(season.standings_as_of(2), Err(Error::UnknownWeek(2))));
    assert!(matches!(season.league_as_of(5), Err(Error::UnknownWeek(5))));
}

// =============================================================================
// Playoffs
// =============================================================================

#[test]
fn test_playoffs_seeded_from_table() {
    let mut season = Season::new(seeded(10)).unwrap();
    season.play_regular_season();
    let table = season.standings().ids();

    let bracket = season.play_playoffs().unwrap().clone();

    assert_eq!(bracket.seeds, table);
    assert_eq!(bracket.quarterfinals.len(), 4);
    assert_eq!(bracket.semifinals.len(), 2);
    let games = bracket.final_series.games.len();
    assert!(games == 2 || games == 3, "final took {} games", games);
    assert!(table.contains(&bracket.champion));
    assert_eq!(season.playoffs(), Some(&bracket));
}

#[test]
fn test_playoffs_wait_for_the_regular_season() {
    let mut season = Season::new(seeded(3)).unwrap();
    season.play_next_week();

    let err = season.play_playoffs().unwrap_err();
    assert!(matches!(
        err,
        Error::PlayoffsNotReady {
            played: 1,
            scheduled: 7
        }
    ));
    assert!(season.playoffs().is_none());

    // nothing beyond week 1 was played
    let games: u32 = season.league().teams().iter().map(|t| t.games_played()).sum();
    assert_eq!(games, 8);
    assert_eq!(&season.league_as_of(1).unwrap(), season.league());
}

#[test]
fn test_playoffs_play_only_once() {
    let mut season = Season::new(seeded(3)).unwrap();
    season.play().unwrap();
    let first = season.playoffs().cloned();
    let live = season.league().clone();

    assert!(matches!(season.play_playoffs(), Err(Error::PlayoffsAlreadyPlayed)));
    assert_eq!(season.playoffs().cloned(), first);
    assert_eq!(season.league(), &live);
}

#[test]
fn test_fixed_length_final() {
    let config = LeagueConfig {
        final_format: FinalFormat::FixedGames(2),
        ..seeded(11)
    };
    let mut season = Season::new(config).unwrap();
    season.play().unwrap();

    let bracket = season.playoffs().unwrap();
    assert_eq!(bracket.final_series.games.len(), 2);
}

#[test]
fn test_playoffs_need_eight_teams() {
    let config = LeagueConfig {
        teams: names(&["A", "B", "C", "D"]),
        playoffs: false,
        ..seeded(12)
    };
    let mut season = Season::new(config).unwrap();
    season.play_regular_season();

    let err = season.play_playoffs().unwrap_err();
    assert!(matches!(
        err,
        Error::League(LeagueError::BracketSize { expected: 8, found: 4 })
    ));
}

#[test]
fn test_playoff_games_count_in_live_table_only() {
    let mut season = Season::new(seeded(13)).unwrap();
    season.play().unwrap();

    let live: u32 = season.league().teams().iter().map(|t| t.games_played()).sum();
    let regular: u32 = season
        .standings_as_of(7)
        .unwrap()
        .iter()
        .map(|row| row.wins + row.losses)
        .sum();
    let playoff_games = 4 + 2 + season.playoffs().unwrap().final_series.games.len() as u32;

    assert_eq!(regular, 56);
    assert_eq!(live, regular + 2 * playoff_games);
}
