// #![deny(missing_docs)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Convert English nouns between singular and plural.
//!
//! This crate is meant for search and indexing, where a query for "ladies"
//! should find "lady" and a query for "mouse" should find "mice". It does
//! not try to be a full morphological analyzer. It strikes a balance between
//! a small, maintainable rule set and accuracy, so some nouns will come out
//! wrong.
//!
//! The rules are almost entirely table-driven:
//!
//! * A list of invariant words ("aircraft", "series") and of word endings
//!   ("sheep", "fish", "-nese") whose singular and plural are the same.
//! * A list of irregular singular and plural pairs ("child" and "children").
//! * Two suffix tables, one for each direction. The longest matching suffix
//!   wins, so "status" becomes "statuses" rather than being handled by the
//!   rule for "us". Some suffix rules only fire when the preceding character
//!   allows it, which is how "lady" becomes "ladies" but "day" becomes
//!   "days".
//!
//! Whether a word is singular or plural is worked out from these same
//! tables, so classification always agrees with transformation.
//!
//! # Examples
//!
//! ```
//! use en_wordtools::{is_plural, is_singular, to_plural, to_singular};
//!
//! assert_eq!(to_plural("mouse"), "mice");
//! assert_eq!(to_singular("mice"), "mouse");
//! assert_eq!(to_plural("status"), "statuses");
//! assert!(is_plural("boxes"));
//! assert!(is_singular("box"));
//! ```
//!
//! The free functions use a shared [InflectionEngine](engine::InflectionEngine)
//! built from the built-in tables. Use
//! [InflectionEngine::builder](engine::InflectionEngine::builder) to add words
//! or rules of your own, and [noun::Noun] when the result should keep the
//! casing of the input.
//!
//! # Logging
//!
//! The crate logs through the [log](https://docs.rs/log) facade. Each suffix
//! rule that fires or declines is logged at trace level.

mod tables;
mod util;

pub mod engine;
pub mod error;
pub mod lexicon;
pub mod noun;
pub mod rule;
pub mod search;
pub mod term;

pub use engine::{is_ignored, is_plural, is_singular, to_plural, to_singular};
