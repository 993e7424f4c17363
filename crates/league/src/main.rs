//! Cascade league CLI
//!
//! Simulate a season, then inspect saved results: historical standings,
//! championship odds and the odds for the next scheduled week.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cascade_core::{field_odds, format_odds, FinalFormat};
use league::{odds_line, LeagueConfig, Season, SeasonResults};

#[derive(Parser)]
#[command(name = "cascade")]
#[command(author, version, about = "Cascade league season simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a full season and print the report
    Season {
        /// TOML league config (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Round-robin cycles in the regular season
        #[arg(long)]
        round_robins: Option<u32>,

        /// Rounds played per cycle
        #[arg(long)]
        rounds_per_round_robin: Option<usize>,

        /// Seed for a reproducible season
        #[arg(long)]
        seed: Option<u64>,

        /// Final ends once a team has this many wins
        #[arg(long, conflicts_with = "fixed_games")]
        first_to: Option<u32>,

        /// Final always plays this many games
        #[arg(long)]
        fixed_games: Option<u32>,

        /// Skip the playoff bracket
        #[arg(long, default_value = "false")]
        no_playoffs: bool,

        /// Save results JSON here (overrides the config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the caption for every week
        #[arg(long, default_value = "false")]
        captions: bool,

        /// Print the artifact key of every game
        #[arg(long, default_value = "false")]
        artifacts: bool,
    },

    /// Standings from saved results, as of any played week
    Standings {
        /// Saved season results JSON
        #[arg(long)]
        results: PathBuf,

        /// Week to show (0 = preseason, defaults to the last played week)
        #[arg(long)]
        week: Option<u32>,
    },

    /// Championship odds and next-week matchup odds from saved results
    Odds {
        /// Saved season results JSON
        #[arg(long)]
        results: PathBuf,

        /// Quote odds as they stood after this week (defaults to the last)
        #[arg(long)]
        week: Option<u32>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[allow(clippy::too_many_arguments)]
fn run_season(
    config_path: Option<PathBuf>,
    round_robins: Option<u32>,
    rounds_per_round_robin: Option<usize>,
    seed: Option<u64>,
    first_to: Option<u32>,
    fixed_games: Option<u32>,
    no_playoffs: bool,
    output: Option<PathBuf>,
    captions: bool,
    artifacts: bool,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => LeagueConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => LeagueConfig::default(),
    };

    if let Some(cycles) = round_robins {
        config.round_robins = cycles;
    }
    if rounds_per_round_robin.is_some() {
        config.rounds_per_round_robin = rounds_per_round_robin;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(wins) = first_to {
        config.final_format = FinalFormat::FirstTo(wins);
    }
    if let Some(games) = fixed_games {
        config.final_format = FinalFormat::FixedGames(games);
    }
    if no_playoffs {
        config.playoffs = false;
    }
    if output.is_some() {
        config.results_path = output;
    }

    let mut season = Season::new(config).context("invalid league config")?;
    info!(seed = season.seed(), "starting season");
    season.play()?;

    let results = season.results();
    results.print_report();

    if captions {
        for week in 1..=results.weeks_played() {
            println!("{}\n", results.caption(week)?);
        }
    }

    if artifacts {
        for (key, game) in results.artifacts() {
            println!(
                "{}: {} {} - {} {}",
                key,
                results.league.name(game.team1()),
                game.team1_score(),
                game.team2_score(),
                results.league.name(game.team2())
            );
        }
    }

    if let Some(path) = &results.config.results_path {
        results
            .save(path)
            .with_context(|| format!("failed to save results to {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    }

    Ok(())
}

fn load_results(path: &Path) -> Result<SeasonResults> {
    SeasonResults::load(path).with_context(|| format!("failed to load results {}", path.display()))
}

fn run_standings(path: PathBuf, week: Option<u32>) -> Result<()> {
    let results = load_results(&path)?;
    let week = week.unwrap_or(results.weeks_played());
    let standings = results.standings_as_of(week)?;

    println!("=== {}: standings after week {} ===", results.name, week);
    print!("{}", standings);
    Ok(())
}

fn run_odds(path: PathBuf, week: Option<u32>) -> Result<()> {
    let results = load_results(&path)?;
    let week = week.unwrap_or(results.weeks_played());
    let league = results.league_as_of(week)?;
    if league.is_empty() {
        bail!("no teams in {}", path.display());
    }

    println!("Championship Odds after Week {}:", week);
    for (team, odds) in field_odds(league.teams()) {
        println!("  {}: {}", team, format_odds(odds));
    }

    match results.upcoming.get(&(week + 1)) {
        Some(matchups) => {
            println!();
            println!("Odds for Week {}:", week + 1);
            for &(a, b) in matchups {
                println!("  {}", odds_line(&league[a], &league[b]));
            }
        }
        None => println!("\nNo regular-season week scheduled after week {}", week),
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Season {
            config,
            round_robins,
            rounds_per_round_robin,
            seed,
            first_to,
            fixed_games,
            no_playoffs,
            output,
            captions,
            artifacts,
        } => run_season(
            config,
            round_robins,
            rounds_per_round_robin,
            seed,
            first_to,
            fixed_games,
            no_playoffs,
            output,
            captions,
            artifacts,
        ),
        Commands::Standings { results, week } => run_standings(results, week),
        Commands::Odds { results, week } => run_odds(results, week),
    }
}
