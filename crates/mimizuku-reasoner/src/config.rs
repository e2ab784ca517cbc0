//! Reasoner configuration

use crate::ReasonerError;
use serde::{Deserialize, Serialize};

/// Reasoner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasonerConfig {
    /// Upper bound on completion passes before giving up
    pub max_iterations: usize,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
        }
    }
}

impl ReasonerConfig {
    pub fn from_json(json: &str) -> Result<Self, ReasonerError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ReasonerError::ConfigError(e.to_string()))?;
        if config.max_iterations == 0 {
            return Err(ReasonerError::ConfigError(
                "max_iterations must be positive".to_string(),
            ));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReasonerConfig::default();
        assert_eq!(config.max_iterations, 10_000);
    }

    #[test]
    fn test_from_json() {
        let config = ReasonerConfig::from_json(r#"{"max_iterations": 50}"#).unwrap();
        assert_eq!(config.max_iterations, 50);

        let config = ReasonerConfig::from_json("{}").unwrap();
        assert_eq!(config, ReasonerConfig::default());

        assert!(matches!(
            ReasonerConfig::from_json(r#"{"max_iterations": 0}"#),
            Err(ReasonerError::ConfigError(_))
        ));
    }
}
