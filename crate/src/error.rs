//! The error type returned when an [InflectionEngine](crate::engine::InflectionEngine)
//! is built from tables that can never work.
//!
//! Inflecting a word never fails. Problems with the tables themselves are
//! caught once, in [EngineBuilder::build](crate::engine::EngineBuilder::build).

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("the {table} suffix table contains a rule with an empty suffix")]
    EmptySuffix { table: &'static str },

    #[error("the {list} list contains an empty word")]
    EmptyWord { list: &'static str },

    #[error("the conditional rule for suffix `{suffix}` is invalid: {reason}")]
    InvalidCondition { suffix: String, reason: String },

    #[error("`{word}` is declared both invariant and irregular")]
    ConflictingEntry { word: String },
}
