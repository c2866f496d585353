//! Dictionary lookups of lemmas and word families.
//!
//! A [Lexicon] maps a word to its lemma (the canonical root form, e.g.
//! "running" to "run") and a lemma to the words in its family. The
//! inflection engine never consults a lexicon. Callers that want both
//! combine them, as [search](crate::search) does.
//!
//! [MemoryLexicon] keeps its data partitioned by the first letter of each
//! word, the same layout as the per-letter data files such lexicons are
//! usually shipped as. Reading those files is left to the caller.

use crate::util;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static PARTITIONED_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[a-z][a-z0-9]*\z").expect("Could not parse partitioned word regex")
});

pub trait Lexicon {
    /// Returns the lemma for the word, or the word itself if it is unknown.
    fn lemma(&self, word: &str) -> String;

    /// Returns the words whose lemma is `lemma`. This is empty when the
    /// lemma is unknown.
    fn word_family(&self, lemma: &str) -> Vec<String>;

    /// Returns the words related to `word`: its lemma's family, plus the
    /// lemma itself when it differs from the word. The word itself is left
    /// out unless `inclusive` is true.
    fn related_words(&self, word: &str, inclusive: bool) -> Vec<String> {
        let word = util::normalize(word);
        let lemma = self.lemma(&word);
        let mut words = self.word_family(&lemma);
        if *word != lemma && !words.contains(&lemma) {
            words.push(lemma);
        }
        if !inclusive {
            words.retain(|w| *w != *word);
        }
        words
    }
}

/// An in-memory [Lexicon].
///
/// ```
/// use en_wordtools::lexicon::{Lexicon, MemoryLexicon};
///
/// let mut lexicon = MemoryLexicon::new();
/// lexicon.insert_lemma("ran", "run");
/// lexicon.insert_family("run", ["ran", "running", "runs"]);
///
/// assert_eq!(lexicon.lemma("ran"), "run");
/// assert_eq!(lexicon.related_words("ran", false), vec!["running", "runs", "run"]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryLexicon {
    lemmas: HashMap<char, HashMap<String, String>>,
    families: HashMap<char, HashMap<String, Vec<String>>>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the lemma for a word. Returns false, and records nothing, if
    /// the word cannot be stored (see [MemoryLexicon::partition_for]).
    pub fn insert_lemma(&mut self, word: &str, lemma: &str) -> bool {
        let word = util::normalize(word);
        let c = match partition_for(&word) {
            Some(c) => c,
            None => return false,
        };
        self.lemmas
            .entry(c)
            .or_default()
            .insert(word.into_owned(), util::normalize(lemma).into_owned());
        true
    }

    /// Records the family of a lemma, replacing any family it already had.
    /// Returns false, and records nothing, if the lemma cannot be stored.
    pub fn insert_family<I, S>(&mut self, lemma: &str, words: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lemma = util::normalize(lemma);
        let c = match partition_for(&lemma) {
            Some(c) => c,
            None => return false,
        };
        let mut family: Vec<String> = vec![];
        for w in words {
            let w = util::normalize(w.as_ref()).into_owned();
            if !w.is_empty() && !family.contains(&w) {
                family.push(w);
            }
        }
        self.families
            .entry(c)
            .or_default()
            .insert(lemma.into_owned(), family);
        true
    }

    /// Returns the number of words with a recorded lemma.
    pub fn len(&self) -> usize {
        self.lemmas.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the partition a word is stored under: its first letter. Only
    /// non-empty ASCII alphanumeric words starting with a letter have one.
    pub fn partition_for(word: &str) -> Option<char> {
        partition_for(&util::normalize(word))
    }
}

impl Lexicon for MemoryLexicon {
    fn lemma(&self, word: &str) -> String {
        let word = util::normalize(word);
        let found = partition_for(&word)
            .and_then(|c| self.lemmas.get(&c))
            .and_then(|words| words.get(&*word));
        match found {
            Some(lemma) => lemma.clone(),
            None => {
                trace!("no lemma for '{}'", word);
                word.into_owned()
            }
        }
    }

    fn word_family(&self, lemma: &str) -> Vec<String> {
        let lemma = util::normalize(lemma);
        partition_for(&lemma)
            .and_then(|c| self.families.get(&c))
            .and_then(|families| families.get(&*lemma))
            .cloned()
            .unwrap_or_default()
    }
}

fn partition_for(word: &str) -> Option<char> {
    if !PARTITIONED_WORD_REGEX.is_match(word) {
        return None;
    }
    word.chars().next()
}
