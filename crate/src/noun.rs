//! The [Noun] struct, a case-preserving wrapper around an
//! [InflectionEngine].
//!
//! The engine itself always returns lower-case words. A `Noun` gives the
//! result the same casing as the word it was created from.
//!
//! # Examples
//!
//! ```
//! use en_wordtools::noun::Noun;
//! use en_wordtools::term::Term; // Provides most of the interesting methods
//!
//! let noun = Noun::new("Lady");
//! let plural = noun.plural();
//! assert_eq!(plural, "Ladies");
//!
//! let singular = noun.singular();
//! assert_eq!(singular, "Lady");
//!
//! assert!(noun.is_singular());
//! assert!(!noun.is_plural());
//! ```
use crate::{
    engine::{self, InflectionEngine},
    term::Term,
    util,
};
use std::borrow::Cow;

/// A `Noun` is a single noun.
#[derive(Clone, Debug)]
pub struct Noun<'a> {
    word: &'a str,
    engine: &'a InflectionEngine,
}

impl<'a> Noun<'a> {
    /// Creates a noun that is inflected with the given engine instead of the
    /// default one.
    pub fn with_engine(word: &'a str, engine: &'a InflectionEngine) -> Self {
        Self { word, engine }
    }
}

impl<'a> Term<'a> for Noun<'a> {
    /// Creates a new noun from a string. Note that nothing in the code
    /// actually ensures that this is a noun, so you could write
    /// `Noun::new("eat")` and it would work, for some value of "work".
    fn new(word: &'a str) -> Self {
        Self {
            word,
            engine: engine::default_engine(),
        }
    }

    fn singular(&self) -> Cow<'a, str> {
        util::fix_case(self.word, self.engine.to_singular(self.word))
    }

    fn plural(&self) -> Cow<'a, str> {
        util::fix_case(self.word, self.engine.to_plural(self.word))
    }

    fn is_singular(&self) -> bool {
        self.engine.is_singular(self.word)
    }

    fn is_plural(&self) -> bool {
        self.engine.is_plural(self.word)
    }
}
