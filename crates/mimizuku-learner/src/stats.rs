//! Oracle call counters for a learning session

use serde::{Deserialize, Serialize};

/// Oracle calls made by a learner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryStats {
    pub membership_queries: usize,
    pub equivalence_queries: usize,
    pub entailment_queries: usize,
    /// Counterexamples processed
    pub rounds: usize,
}

impl QueryStats {
    pub fn total_queries(&self) -> usize {
        self.membership_queries + self.equivalence_queries + self.entailment_queries
    }
}
