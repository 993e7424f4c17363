//! A season from a config file on disk to saved results and back

use league::{LeagueConfig, Season, SeasonResults};

const CONFIG: &str = r#"
name = "Autumn Cascade"
round_robins = 2
rounds_per_round_robin = 5
seed = 1234

[final_format]
first_to = 2
"#;

#[test]
fn test_config_to_saved_results() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("league.toml");
    let results_path = dir.path().join("autumn.json");
    std::fs::write(&config_path, CONFIG).unwrap();

    let mut config = LeagueConfig::load(&config_path).unwrap();
    config.results_path = Some(results_path.clone());
    let mut season = Season::new(config).unwrap();
    season.play().unwrap();

    let results = season.results();
    results.save(&results_path).unwrap();
    let loaded = SeasonResults::load(&results_path).unwrap();

    assert_eq!(loaded.name, "Autumn Cascade");
    assert_eq!(loaded.seed, 1234);
    assert_eq!(loaded.weeks_played(), 10);
    assert_eq!(loaded.upcoming.len(), 10);

    // standings replayed from the file agree with the live run
    for week in 0..=10 {
        assert_eq!(
            loaded.standings_as_of(week).unwrap(),
            season.standings_as_of(week).unwrap()
        );
    }
    assert_eq!(loaded.playoffs.as_ref(), season.playoffs());
}

#[test]
fn test_replaying_the_seed_reproduces_the_file() {
    let config = LeagueConfig::from_toml_str(CONFIG).unwrap();

    let mut first = Season::new(config.clone()).unwrap();
    first.play().unwrap();
    let mut second = Season::new(config).unwrap();
    second.play().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    first.results().save(&a).unwrap();
    second.results().save(&b).unwrap();

    assert_eq!(
        std::fs::read_to_string(a).unwrap(),
        std::fs::read_to_string(b).unwrap()
    );
}
