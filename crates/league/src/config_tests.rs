use super::*;

#[test]
fn test_default_config() {
    let config = LeagueConfig::default();

    assert_eq!(config.teams.len(), 8);
    assert_eq!(config.teams[0], "Apex Predators");
    assert_eq!(config.teams[7], "Evan City Commies");
    assert_eq!(config.round_robins, 1);
    assert_eq!(config.rounds_per_round_robin, None);
    assert_eq!(config.seed, None);
    assert!(config.playoffs);
    assert_eq!(config.final_format, FinalFormat::FirstTo(2));
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = LeagueConfig::from_toml_str("round_robins = 2\nseed = 9\n").unwrap();

    assert_eq!(config.round_robins, 2);
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.teams, LeagueConfig::default().teams);
    assert_eq!(config.final_format, FinalFormat::FirstTo(2));
}

#[test]
fn test_final_format_from_toml() {
    let config = LeagueConfig::from_toml_str("[final_format]\nfixed_games = 2\n").unwrap();
    assert_eq!(config.final_format, FinalFormat::FixedGames(2));

    let config = LeagueConfig::from_toml_str("final_format = { first_to = 3 }\n").unwrap();
    assert_eq!(config.final_format, FinalFormat::FirstTo(3));
}

#[test]
fn test_toml_round_trip() {
    let config = LeagueConfig {
        name: "Spring".to_string(),
        round_robins: 3,
        rounds_per_round_robin: Some(4),
        seed: Some(2024),
        results_path: Some(PathBuf::from("spring.json")),
        final_format: FinalFormat::FixedGames(2),
        ..Default::default()
    };

    let text = config.to_toml_string().unwrap();
    assert_eq!(LeagueConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_invalid_configs_rejected() {
    let cases = [
        LeagueConfig {
            round_robins: 0,
            ..Default::default()
        },
        LeagueConfig {
            rounds_per_round_robin: Some(0),
            ..Default::default()
        },
        LeagueConfig {
            teams: vec!["Solo".to_string()],
            playoffs: false,
            ..Default::default()
        },
        LeagueConfig {
            teams: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            ..Default::default()
        },
        LeagueConfig {
            final_format: FinalFormat::FirstTo(0),
            ..Default::default()
        },
    ];

    for config in cases {
        assert!(
            matches!(config.validate(), Err(Error::InvalidConfig(_))),
            "{:?}",
            config
        );
    }
}

#[test]
fn test_small_league_without_playoffs_is_valid() {
    let config = LeagueConfig {
        teams: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        playoffs: false,
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_malformed_toml() {
    let err = LeagueConfig::from_toml_str("round_robins = \"two\"").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("league.toml");
    let config = LeagueConfig {
        seed: Some(5),
        ..Default::default()
    };

    config.save(&path).unwrap();
    assert_eq!(LeagueConfig::load(&path).unwrap(), config);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = LeagueConfig::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
