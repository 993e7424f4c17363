//! Round-robin scheduling (circle method)

use serde::{Deserialize, Serialize};

use crate::error::{LeagueError, Result};

/// One round of pairings. A participant appears at most once.
pub type Round<T> = Vec<(T, T)>;

/// Ordered rounds of a round-robin cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule<T> {
    rounds: Vec<Round<T>>,
}

impl<T> Schedule<T> {
    pub fn rounds(&self) -> &[Round<T>] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn round(&self, index: usize) -> Option<&Round<T>> {
        self.rounds.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Round<T>> {
        self.rounds.iter()
    }

    /// Keep only the first `max_rounds` rounds
    pub fn truncate(&mut self, max_rounds: usize) {
        self.rounds.truncate(max_rounds);
    }

    pub fn into_rounds(self) -> Vec<Round<T>> {
        self.rounds
    }
}

impl<T: PartialEq> Schedule<T> {
    /// Participants from `all` that sit out round `index`
    pub fn idle<'a>(&self, index: usize, all: &'a [T]) -> Vec<&'a T> {
        let Some(round) = self.rounds.get(index) else {
            return Vec::new();
        };
        all.iter()
            .filter(|p| !round.iter().any(|(a, b)| a == *p || b == *p))
            .collect()
    }
}

/// Pair every participant with every other exactly once.
///
/// An odd field gets a bye slot, so `n` participants produce `n - 1`
/// rounds when `n` is even and `n` rounds when it is odd, with each
/// participant idle for exactly one of them. Slot `j` meets slot
/// `n - 1 - j`; between rounds slot 0 stays fixed and the others rotate
/// one step clockwise.
pub fn generate_round_robin<T: Clone>(participants: &[T]) -> Result<Schedule<T>> {
    if participants.is_empty() {
        return Err(LeagueError::EmptyRoster);
    }

    let mut slots: Vec<Option<T>> = participants.iter().cloned().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();

    let mut rounds = Vec::with_capacity(n - 1);
    for _ in 0..n - 1 {
        let round = (0..n / 2)
            .filter_map(|j| match (&slots[j], &slots[n - 1 - j]) {
                (Some(a), Some(b)) => Some((a.clone(), b.clone())),
                _ => None,
            })
            .collect();
        rounds.push(round);
        slots[1..].rotate_right(1);
    }

    Ok(Schedule { rounds })
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
