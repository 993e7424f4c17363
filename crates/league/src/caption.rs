//! Plain-text captions posted alongside each week's game images

use cascade_core::{format_odds, matchup_odds, rank, League, Round, Standings, Team, TeamId};

/// One line per team: `1. Team (W-L, +PD)`
pub fn standings_block(standings: &Standings) -> String {
    standings
        .iter()
        .map(|row| {
            format!(
                "{}. {} ({}-{}, {})",
                row.rank,
                row.name,
                row.wins,
                row.losses,
                signed(row.point_differential)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `A vs B: A +150, B -170`
pub fn odds_line(team: &Team, opponent: &Team) -> String {
    let (ours, theirs) = matchup_odds(team, opponent);
    format!(
        "{} vs {}: {} {}, {} {}",
        team.name(),
        opponent.name(),
        team.name(),
        format_odds(ours),
        opponent.name(),
        format_odds(theirs)
    )
}

/// Caption for `week`, given the league as it stood after that week.
///
/// Odds for the following week are only included when it is scheduled.
pub fn week_caption(week: u32, league: &League, next: Option<&Round<TeamId>>) -> String {
    let mut parts = vec![
        format!("Week {} Game Results", week),
        String::new(),
        "Current Standings:".to_string(),
        standings_block(&rank(league)),
    ];

    if let Some(matchups) = next {
        parts.push(String::new());
        parts.push(format!("Odds for Week {}:", week + 1));
        for &(a, b) in matchups {
            parts.push(odds_line(&league[a], &league[b]));
        }
    }

    parts.join("\n")
}

/// Point differential with an explicit sign; zero reads `+0`
fn signed(value: i64) -> String {
    if value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "caption_tests.rs"]
mod caption_tests;
