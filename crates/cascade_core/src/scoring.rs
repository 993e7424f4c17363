//! Per-match scoring breakdown

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::team::Category;

/// Events in one category, and how many of them were cascades
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    pub count: u32,
    pub cascades: u32,
}

impl CategoryTally {
    /// Points produced by this tally for a category worth `base` points
    pub fn points(&self, base: u32) -> u32 {
        // a cascade doubles the base, so it contributes one extra base
        (self.count + self.cascades) * base
    }
}

/// One team's scoring events in a single match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringDetail {
    runs: CategoryTally,
    throws: CategoryTally,
    kicks: CategoryTally,
}

impl ScoringDetail {
    pub fn tally(&self, category: Category) -> CategoryTally {
        match category {
            Category::Run => self.runs,
            Category::Throw => self.throws,
            Category::Kick => self.kicks,
        }
    }

    pub fn count(&self, category: Category) -> u32 {
        self.tally(category).count
    }

    pub fn cascades(&self, category: Category) -> u32 {
        self.tally(category).cascades
    }

    /// Opportunities converted by this team
    pub fn events(&self) -> u32 {
        self.runs.count + self.throws.count + self.kicks.count
    }

    pub fn total_cascades(&self) -> u32 {
        self.runs.cascades + self.throws.cascades + self.kicks.cascades
    }

    /// Points implied by the breakdown
    pub fn points(&self) -> u32 {
        Category::ALL
            .iter()
            .map(|&c| self.tally(c).points(c.base_points()))
            .sum()
    }

    /// Count one scoring event and return the points it is worth
    pub(crate) fn record(&mut self, category: Category, cascade: bool) -> u32 {
        let tally = match category {
            Category::Run => &mut self.runs,
            Category::Throw => &mut self.throws,
            Category::Kick => &mut self.kicks,
        };
        tally.count += 1;
        if cascade {
            tally.cascades += 1;
            category.base_points() * 2
        } else {
            category.base_points()
        }
    }
}

impl fmt::Display for ScoringDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Runs: {} (Cascade: {}), Throws: {} (Cascade: {}), Kicks: {} (Cascade: {})",
            self.runs.count,
            self.runs.cascades,
            self.throws.count,
            self.throws.cascades,
            self.kicks.count,
            self.kicks.cascades
        )
    }
}
