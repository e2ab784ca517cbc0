//! Learner configuration

use crate::LearnerError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    /// Equivalence rounds allowed before giving up; unbounded when `None`
    pub max_rounds: Option<usize>,
}

impl LearnerConfig {
    pub fn with_max_rounds(max_rounds: usize) -> Self {
        Self {
            max_rounds: Some(max_rounds),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LearnerError> {
        serde_json::from_str(json).map_err(|e| LearnerError::ConfigError(e.to_string()))
    }
}
