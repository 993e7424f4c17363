//! Cascade league core
//!
//! This crate provides the deterministic heart of the Cascade league:
//! - Team rating state and the authoritative `League` store
//! - Match simulation with advantage updates
//! - Round-robin scheduling (circle method)
//! - Standings, including standings replayed to any past week
//! - The eight-team playoff bracket
//! - American-style betting odds
//!
//! All randomness is injected, so a seeded generator reproduces a season
//! exactly.
//!
//! # Usage
//!
//! ```
//! use cascade_core::{League, MatchSimulator, rank};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut league = League::new(["Apex Predators", "Vista Vipers"]).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let ids = league.ids().collect::<Vec<_>>();
//!
//! let result = MatchSimulator::default().simulate(&mut league, ids[0], ids[1], &mut rng);
//! assert_eq!(league[result.winner()].wins(), 1);
//! assert_eq!(rank(&league).leader(), Some(result.winner()));
//! ```

pub mod bracket;
pub mod error;
pub mod league;
pub mod odds;
pub mod schedule;
pub mod scoring;
pub mod simulator;
pub mod standings;
pub mod team;

pub use bracket::*;
pub use error::{LeagueError, Result};
pub use league::League;
pub use odds::*;
pub use schedule::*;
pub use scoring::*;
pub use simulator::*;
pub use standings::*;
pub use team::*;
