//! EL 推論エンジン
//!
//! このクレートは EL 記述論理の包含推論を提供します:
//! - 一般包含公理の正規化 (normal forms NF1-NF3)
//! - 完備化規則 (CR1-CR4) による分類
//! - 仮説オントロジーを保持する `Engine` 実装

pub mod config;
pub mod normalize;
pub mod completion;
pub mod tbox;
pub mod reasoner;

pub use config::ReasonerConfig;
pub use tbox::Tbox;
pub use reasoner::ElReasoner;

use mimizuku_core::OracleError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReasonerError {
    #[error("Completion did not reach a fixpoint within {0} iterations")]
    IterationLimit(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<ReasonerError> for OracleError {
    fn from(e: ReasonerError) -> Self {
        OracleError::ReasoningError(e.to_string())
    }
}
