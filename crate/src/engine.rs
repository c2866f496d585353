//! The inflection engine.
//!
//! An [InflectionEngine] holds immutable tables and converts words between
//! singular and plural. Every operation trims and lower-cases its input
//! first, and every transformation returns the lower-cased form. Inflection
//! never fails: a word that matches nothing is returned as is (singular) or
//! with "s" appended (plural).
//!
//! Input is expected to be a single alphabetic word. Anything else is
//! handled on a best effort basis, with trimming and lower-casing as the
//! only normalization.
//!
//! # Examples
//!
//! ```
//! use en_wordtools::engine::InflectionEngine;
//!
//! let engine = InflectionEngine::new();
//! assert_eq!(engine.to_plural("lady"), "ladies");
//! assert_eq!(engine.to_singular("Children"), "child");
//! assert!(engine.is_plural("boxes"));
//! assert!(engine.is_singular("sheep") && engine.is_plural("sheep"));
//! ```
use crate::{
    error::ConfigError,
    rule::{Rule, SuffixTable},
    tables,
    util::{self, char_len, split_tail},
};
use log::{debug, trace};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

static DEFAULT_ENGINE: Lazy<InflectionEngine> = Lazy::new(InflectionEngine::new);

/// Returns the shared engine built from the built-in tables.
pub fn default_engine() -> &'static InflectionEngine {
    &DEFAULT_ENGINE
}

/// [InflectionEngine::to_plural] on the default engine.
pub fn to_plural(word: &str) -> String {
    DEFAULT_ENGINE.to_plural(word)
}

/// [InflectionEngine::to_singular] on the default engine.
pub fn to_singular(word: &str) -> String {
    DEFAULT_ENGINE.to_singular(word)
}

/// [InflectionEngine::is_plural] on the default engine.
pub fn is_plural(word: &str) -> bool {
    DEFAULT_ENGINE.is_plural(word)
}

/// [InflectionEngine::is_singular] on the default engine.
pub fn is_singular(word: &str) -> bool {
    DEFAULT_ENGINE.is_singular(word)
}

/// [InflectionEngine::is_ignored] on the default engine.
pub fn is_ignored(word: &str) -> bool {
    DEFAULT_ENGINE.is_ignored(word)
}

/// Converts English nouns between singular and plural.
///
/// The engine is immutable once built, so one instance can be shared freely
/// between threads.
#[derive(Debug)]
pub struct InflectionEngine {
    irregular_plurals: HashMap<String, String>,
    irregular_singulars: HashMap<String, String>,
    invariant: HashSet<String>,
    ignore_endings: Vec<String>,
    plural: SuffixTable,
    singular: SuffixTable,
}

impl Default for InflectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InflectionEngine {
    /// Creates an engine with the built-in tables.
    pub fn new() -> Self {
        Self::builder()
            .build()
            .expect("The built-in inflection tables are invalid")
    }

    /// Returns a builder seeded with the built-in tables.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Returns true if the word is spelled the same in both numbers, either
    /// because it is listed as invariant ("aircraft") or because it ends with
    /// an ignored ending ("sheep", "swordfish", "japanese").
    pub fn is_ignored(&self, word: &str) -> bool {
        self.ignored(&util::normalize(word))
    }

    /// Returns the plural of `word`.
    pub fn to_plural(&self, word: &str) -> String {
        self.plural_of(&util::normalize(word))
    }

    /// Returns the singular of `word`.
    pub fn to_singular(&self, word: &str) -> String {
        self.singular_of(&util::normalize(word))
    }

    /// Returns true if the word is singular. Ignored words are both singular
    /// and plural.
    ///
    /// There is no list of singular words. A word counts as singular when
    /// singularizing it changes nothing, or when pluralizing it changes
    /// something. This means a plural that no rule recognizes, such as
    /// "brethren", is reported as singular.
    pub fn is_singular(&self, word: &str) -> bool {
        self.singular_normalized(&util::normalize(word))
    }

    /// Returns true if the word is plural. Ignored words are both singular
    /// and plural. For every other word this is the opposite of
    /// [InflectionEngine::is_singular], so a singular that looks like a
    /// regular plural, such as "lens", is reported as plural.
    pub fn is_plural(&self, word: &str) -> bool {
        let word = util::normalize(word);
        if self.ignored(&word) {
            return true;
        }
        !self.singular_normalized(&word)
    }

    fn singular_normalized(&self, word: &str) -> bool {
        self.ignored(word) || self.singular_of(word) == word || self.plural_of(word) != word
    }

    fn ignored(&self, word: &str) -> bool {
        if self.invariant.contains(word) {
            return true;
        }
        self.ignore_endings
            .iter()
            .any(|ending| word.ends_with(ending.as_str()))
    }

    fn plural_of(&self, word: &str) -> String {
        if self.ignored(word) {
            return word.to_string();
        }
        if let Some(plural) = self.irregular_plurals.get(word) {
            trace!("'{}' is irregular and became '{}'", word, plural);
            return plural.clone();
        }
        if self.irregular_singulars.contains_key(word) {
            trace!("'{}' is already an irregular plural", word);
            return word.to_string();
        }

        for n in (1..=char_len(word).min(self.plural.longest())).rev() {
            let (stem, tail) = match split_tail(word, n) {
                Some(split) => split,
                None => continue,
            };
            match self.plural.get(tail) {
                Some(rule) => match rule.apply(stem, tail) {
                    Some(new) => {
                        trace!("'{}' matched plural suffix '{}' and became '{}'", word, tail, new);
                        return new;
                    }
                    None => trace!("plural suffix '{}' declined '{}'", tail, word),
                },
                None => {
                    if self.plural.is_result(tail) {
                        trace!("'{}' already ends with plural suffix '{}'", word, tail);
                        return word.to_string();
                    }
                    if stem.is_empty() && self.singular.get(tail).is_some() {
                        trace!("'{}' is itself a plural ending", word);
                        return word.to_string();
                    }
                }
            }
        }
        if self.singular.get(word).is_some() {
            trace!("'{}' is itself a plural ending", word);
            return word.to_string();
        }

        match self.plural.fallback() {
            Some(fallback) => format!("{}{}", word, fallback),
            None => word.to_string(),
        }
    }

    fn singular_of(&self, word: &str) -> String {
        if word.is_empty()
            || self.invariant.contains(word)
            || self.irregular_plurals.contains_key(word)
        {
            return word.to_string();
        }
        if let Some(singular) = self.irregular_singulars.get(word) {
            trace!("'{}' is irregular and became '{}'", word, singular);
            return singular.clone();
        }
        if self.ignored(word) {
            return word.to_string();
        }

        for n in (1..=char_len(word).min(self.singular.longest())).rev() {
            let (stem, tail) = match split_tail(word, n) {
                Some(split) => split,
                None => continue,
            };
            if let Some(rule) = self.singular.get(tail) {
                match rule.apply(stem, tail) {
                    Some(new) => {
                        trace!("'{}' matched singular suffix '{}' and became '{}'", word, tail, new);
                        return new;
                    }
                    None => trace!("singular suffix '{}' declined '{}'", tail, word),
                }
            }
        }

        match self.singular.fallback() {
            Some(fallback) => format!("{}{}", word, fallback),
            None => word.to_string(),
        }
    }
}

/// Builds an [InflectionEngine], optionally extending or replacing the
/// built-in tables.
///
/// Every word and suffix is trimmed and lower-cased as it is added. Adding a
/// rule for a suffix that already has one replaces it, as does adding an
/// irregular plural for a word that already has one.
///
/// ```
/// use en_wordtools::engine::InflectionEngine;
///
/// let engine = InflectionEngine::builder()
///     .irregular("cherub", "cherubim")
///     .invariant("bison")
///     .build()
///     .unwrap();
/// assert_eq!(engine.to_plural("cherub"), "cherubim");
/// assert_eq!(engine.to_singular("cherubim"), "cherub");
/// assert_eq!(engine.to_plural("bison"), "bison");
/// ```
#[derive(Debug)]
pub struct EngineBuilder {
    irregular: Vec<(String, String)>,
    invariant: Vec<String>,
    ignore_endings: Vec<String>,
    plural_rules: Vec<(String, Rule)>,
    singular_rules: Vec<(String, Rule)>,
    plural_fallback: Option<String>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            irregular: tables::IRREGULAR_WORDS
                .iter()
                .map(|(s, p)| (s.to_string(), p.to_string()))
                .collect(),
            invariant: tables::INVARIANT_WORDS.iter().map(|w| w.to_string()).collect(),
            ignore_endings: tables::IGNORE_ENDINGS.iter().map(|e| e.to_string()).collect(),
            plural_rules: tables::plural_rules(),
            singular_rules: tables::singular_rules(),
            plural_fallback: Some(tables::PLURAL_FALLBACK.to_string()),
        }
    }
}

impl EngineBuilder {
    /// Returns a builder with no words and no rules. The only behavior left
    /// is appending "s" to make a plural.
    pub fn empty() -> Self {
        Self {
            irregular: vec![],
            invariant: vec![],
            ignore_endings: vec![],
            plural_rules: vec![],
            singular_rules: vec![],
            plural_fallback: Some(tables::PLURAL_FALLBACK.to_string()),
        }
    }

    pub fn irregular(mut self, singular: &str, plural: &str) -> Self {
        self.irregular
            .push((normalized(singular), normalized(plural)));
        self
    }

    pub fn invariant(mut self, word: &str) -> Self {
        self.invariant.push(normalized(word));
        self
    }

    pub fn ignore_ending(mut self, ending: &str) -> Self {
        self.ignore_endings.push(normalized(ending));
        self
    }

    pub fn plural_rule(mut self, suffix: &str, rule: Rule) -> Self {
        self.plural_rules.push((normalized(suffix), rule));
        self
    }

    pub fn singular_rule(mut self, suffix: &str, rule: Rule) -> Self {
        self.singular_rules.push((normalized(suffix), rule));
        self
    }

    /// Validates the tables and builds the engine.
    pub fn build(self) -> Result<InflectionEngine, ConfigError> {
        let plural_table = SuffixTable::build("plural", self.plural_rules, self.plural_fallback)?;
        let singular_table = SuffixTable::build("singular", self.singular_rules, None)?;

        let mut invariant = HashSet::with_capacity(self.invariant.len());
        for word in self.invariant {
            if word.is_empty() {
                return Err(ConfigError::EmptyWord { list: "invariant" });
            }
            invariant.insert(word);
        }

        let mut ignore_endings = Vec::with_capacity(self.ignore_endings.len());
        for ending in self.ignore_endings {
            if ending.is_empty() {
                return Err(ConfigError::EmptyWord { list: "ignore ending" });
            }
            if !ignore_endings.contains(&ending) {
                ignore_endings.push(ending);
            }
        }

        let mut plural_of: HashMap<String, String> = HashMap::with_capacity(self.irregular.len());
        for (singular, plural) in &self.irregular {
            if singular.is_empty() || plural.is_empty() {
                return Err(ConfigError::EmptyWord { list: "irregular" });
            }
            if invariant.contains(singular) {
                return Err(ConfigError::ConflictingEntry {
                    word: singular.clone(),
                });
            }
            plural_of.insert(singular.clone(), plural.clone());
        }

        // When two singulars share a plural, the one added first wins.
        let mut singular_of: HashMap<String, String> = HashMap::with_capacity(plural_of.len());
        for (singular, plural) in self.irregular {
            if plural_of.get(&singular) == Some(&plural) {
                singular_of.entry(plural).or_insert(singular);
            }
        }

        debug!(
            "built inflection engine with {} plural rules, {} singular rules, {} irregular words, {} invariant words and {} ignored endings",
            plural_table.len(),
            singular_table.len(),
            plural_of.len(),
            invariant.len(),
            ignore_endings.len(),
        );

        Ok(InflectionEngine {
            irregular_plurals: plural_of,
            irregular_singulars: singular_of,
            invariant,
            ignore_endings,
            plural: plural_table,
            singular: singular_table,
        })
    }
}

fn normalized(word: &str) -> String {
    util::normalize(word).into_owned()
}

#[cfg(test)]
mod tests {
    use super::{EngineBuilder, InflectionEngine};
    use crate::{
        error::ConfigError,
        rule::{Condition, Rule},
    };

    #[test]
    fn to_plural() {
        let engine = InflectionEngine::new();
        let tests = [
            // default
            ("cat", "cats"),
            ("dog", "dogs"),
            ("book", "books"),
            // literal suffixes
            ("box", "boxes"),
            ("church", "churches"),
            ("bush", "bushes"),
            ("class", "classes"),
            ("wolf", "wolves"),
            ("leaf", "leaves"),
            ("curriculum", "curricula"),
            ("datum", "data"),
            ("medium", "media"),
            ("analysis", "analyses"),
            ("crisis", "crises"),
            ("quiz", "quizzes"),
            ("tomato", "tomatoes"),
            ("buffalo", "buffaloes"),
            ("cactus", "cacti"),
            ("bus", "buses"),
            ("virus", "viruses"),
            ("status", "statuses"),
            ("matrix", "matrices"),
            // conditional suffixes
            ("lady", "ladies"),
            ("city", "cities"),
            ("day", "days"),
            ("boy", "boys"),
            ("key", "keys"),
            ("knife", "knives"),
            ("wife", "wives"),
            ("giraffe", "giraffes"),
            ("fireman", "firemen"),
            ("human", "humans"),
            // irregular
            ("child", "children"),
            ("mouse", "mice"),
            ("man", "men"),
            ("woman", "women"),
            ("person", "people"),
            ("tooth", "teeth"),
            ("foot", "feet"),
            ("goose", "geese"),
            ("ox", "oxen"),
            ("criterion", "criteria"),
            ("phenomenon", "phenomena"),
            ("potato", "potatoes"),
            ("hero", "heroes"),
            ("photo", "photos"),
            ("piano", "pianos"),
            ("chef", "chefs"),
            ("soliloquy", "soliloquies"),
            // ignored
            ("sheep", "sheep"),
            ("deer", "deer"),
            ("swordfish", "swordfish"),
            ("japanese", "japanese"),
            ("aircraft", "aircraft"),
            ("series", "series"),
            ("news", "news"),
            // already plural
            ("cats", "cats"),
            ("boxes", "boxes"),
            ("churches", "churches"),
            ("wolves", "wolves"),
            ("ladies", "ladies"),
            ("statuses", "statuses"),
            ("buses", "buses"),
            ("children", "children"),
            ("mice", "mice"),
            ("data", "data"),
            ("menus", "menus"),
            ("movies", "movies"),
            ("virii", "virii"),
            ("mulae", "mulae"),
            // normalization
            ("  Lady ", "ladies"),
            ("CHURCH", "churches"),
            ("", "s"),
            ("  ", "s"),
        ];
        for (singular, plural) in tests {
            assert_eq!(
                engine.to_plural(singular),
                plural,
                "to_plural({:?}) = {:?}",
                singular,
                plural,
            );
        }
    }

    #[test]
    fn to_singular() {
        let engine = InflectionEngine::new();
        let tests = [
            ("cats", "cat"),
            ("days", "day"),
            ("boxes", "box"),
            ("churches", "church"),
            ("bushes", "bush"),
            ("classes", "class"),
            ("glasses", "glass"),
            ("houses", "house"),
            ("ladies", "lady"),
            ("cities", "city"),
            ("movies", "movie"),
            ("cookies", "cookie"),
            ("knives", "knife"),
            ("wives", "wife"),
            ("lives", "life"),
            ("wolves", "wolf"),
            ("leaves", "leaf"),
            ("loaves", "loaf"),
            ("archives", "archive"),
            ("firemen", "fireman"),
            ("men", "man"),
            ("women", "woman"),
            ("children", "child"),
            ("people", "person"),
            ("mice", "mouse"),
            ("geese", "goose"),
            ("teeth", "tooth"),
            ("feet", "foot"),
            ("oxen", "ox"),
            ("statuses", "status"),
            ("viruses", "virus"),
            ("buses", "bus"),
            ("cacti", "cactus"),
            ("criteria", "criterion"),
            ("data", "datum"),
            ("curricula", "curriculum"),
            ("analyses", "analysis"),
            ("crises", "crisis"),
            ("theses", "thesis"),
            ("heroes", "hero"),
            ("potatoes", "potato"),
            ("tomatoes", "tomato"),
            ("quizzes", "quiz"),
            ("matrices", "matrix"),
            ("indices", "index"),
            // already singular
            ("cat", "cat"),
            ("status", "status"),
            ("bus", "bus"),
            ("child", "child"),
            ("s", "s"),
            // ignored
            ("sheep", "sheep"),
            ("series", "series"),
            ("news", "news"),
            ("salmon", "salmon"),
            ("graffiti", "graffiti"),
            // normalization
            (" Ladies\n", "lady"),
            ("", ""),
        ];
        for (plural, singular) in tests {
            assert_eq!(
                engine.to_singular(plural),
                singular,
                "to_singular({:?}) = {:?}",
                plural,
                singular,
            );
        }
    }

    #[test]
    fn plural_is_idempotent() {
        let engine = InflectionEngine::new();
        for word in [
            "cat", "box", "church", "lady", "day", "knife", "wolf", "status", "virus", "child",
            "mouse", "criterion", "sheep", "datum", "quiz", "human", "leaf", "house",
        ] {
            let plural = engine.to_plural(word);
            assert_eq!(
                engine.to_plural(&plural),
                plural,
                "to_plural(to_plural({})) = {}",
                word,
                plural,
            );
        }
    }

    #[test]
    fn regular_round_trip() {
        let engine = InflectionEngine::new();
        for word in [
            "cat", "box", "church", "bush", "class", "lady", "city", "day", "knife", "wolf",
            "leaf", "house", "status", "bus", "quiz", "tomato", "analysis", "curriculum", "datum",
            "fireman",
        ] {
            let plural = engine.to_plural(word);
            assert_eq!(
                engine.to_singular(&plural),
                word,
                "to_singular(to_plural({})) = {} (via {})",
                word,
                word,
                plural,
            );
        }
    }

    #[test]
    fn is_ignored() {
        let engine = InflectionEngine::new();
        let tests = [
            ("sheep", true),
            ("Sheep ", true),
            ("deer", true),
            ("reindeer", true),
            ("goldfish", true),
            ("measles", true),
            ("chinese", true),
            ("aircraft", true),
            ("information", true),
            ("and", true),
            ("cat", false),
            ("cats", false),
            ("children", false),
            ("ee", false),
            ("", false),
        ];
        for (word, expect) in tests {
            assert_eq!(
                engine.is_ignored(word),
                expect,
                "is_ignored({:?}) = {}",
                word,
                expect,
            );
        }
    }

    #[test]
    fn classify() {
        let engine = InflectionEngine::new();
        // (word, is_singular, is_plural)
        let tests = [
            ("cat", true, false),
            ("cats", false, true),
            ("box", true, false),
            ("boxes", false, true),
            ("lady", true, false),
            ("ladies", false, true),
            ("status", true, false),
            ("statuses", false, true),
            ("child", true, false),
            ("children", false, true),
            ("mouse", true, false),
            ("mice", false, true),
            ("bus", true, false),
            ("Buses", false, true),
            ("sheep", true, true),
            ("aircraft", true, true),
            ("", true, false),
            // No rule recognizes these, so the classification is a guess
            // derived from the transformations.
            ("brethren", true, false),
            ("lens", false, true),
        ];
        for (word, singular, plural) in tests {
            assert_eq!(
                engine.is_singular(word),
                singular,
                "is_singular({:?}) = {}",
                word,
                singular,
            );
            assert_eq!(
                engine.is_plural(word),
                plural,
                "is_plural({:?}) = {}",
                word,
                plural,
            );
        }
    }

    #[test]
    fn classification_is_exclusive_unless_ignored() {
        let engine = InflectionEngine::new();
        for word in [
            "cat", "cats", "church", "churches", "knife", "knives", "person", "people", "datum",
            "data", "fish", "news", "deer", "series", "brethren", "lens", "quiz", "quizzes",
        ] {
            if engine.is_ignored(word) {
                assert!(engine.is_singular(word), "{} is singular", word);
                assert!(engine.is_plural(word), "{} is plural", word);
            } else {
                assert_ne!(
                    engine.is_singular(word),
                    engine.is_plural(word),
                    "{} is exactly one of singular or plural",
                    word,
                );
            }
        }
    }

    #[test]
    fn default_engine_functions() {
        assert_eq!(super::to_plural("child"), "children");
        assert_eq!(super::to_singular("children"), "child");
        assert!(super::is_plural("children"));
        assert!(super::is_singular("child"));
        assert!(super::is_ignored("sheep"));
        assert_eq!(super::default_engine().to_plural("mouse"), "mice");
    }

    #[test]
    fn builder_extends_tables() {
        let engine = InflectionEngine::builder()
            .irregular(" Cactus ", "Cactuses")
            .invariant("bison")
            .ignore_ending("craft")
            .plural_rule(
                "o",
                Rule::conditional(Condition::not_after("aeiou"), "oes"),
            )
            .singular_rule("im", Rule::literal(""))
            .singular_rule("kibbutzim", Rule::literal("kibbutz"))
            .build()
            .expect("valid tables");

        let tests = [
            ("cactus", "cactuses"),
            ("bison", "bison"),
            ("hovercraft", "hovercraft"),
            ("echo", "echoes"),
            ("zoo", "zoos"),
            ("lady", "ladies"),
            ("kibbutzim", "kibbutzim"),
        ];
        for (singular, plural) in tests {
            assert_eq!(
                engine.to_plural(singular),
                plural,
                "to_plural({}) = {}",
                singular,
                plural,
            );
        }
        assert_eq!(engine.to_singular("cactuses"), "cactus");
        assert_eq!(engine.to_singular("cherubim"), "cherub");
        assert!(engine.is_ignored("bison"));
        assert!(engine.is_ignored("spacecraft"));
    }

    #[test]
    fn empty_builder() {
        let engine = EngineBuilder::empty().build().expect("valid tables");
        assert_eq!(engine.to_plural("lady"), "ladys");
        assert_eq!(engine.to_plural("child"), "childs");
        assert_eq!(engine.to_singular("ladies"), "ladies");
        assert!(!engine.is_ignored("sheep"));
    }

    #[test]
    fn builder_errors() {
        let tests = [
            (
                InflectionEngine::builder().plural_rule(" ", Rule::literal("s")),
                ConfigError::EmptySuffix { table: "plural" },
            ),
            (
                InflectionEngine::builder().singular_rule("", Rule::literal("")),
                ConfigError::EmptySuffix { table: "singular" },
            ),
            (
                InflectionEngine::builder().invariant(""),
                ConfigError::EmptyWord { list: "invariant" },
            ),
            (
                InflectionEngine::builder().ignore_ending("\t"),
                ConfigError::EmptyWord {
                    list: "ignore ending",
                },
            ),
            (
                InflectionEngine::builder().irregular("cherub", ""),
                ConfigError::EmptyWord { list: "irregular" },
            ),
            (
                InflectionEngine::builder().irregular("Moose", "meese"),
                ConfigError::ConflictingEntry {
                    word: "moose".to_string(),
                },
            ),
            (
                InflectionEngine::builder()
                    .plural_rule("y", Rule::conditional(Condition::not_after(""), "ies")),
                ConfigError::InvalidCondition {
                    suffix: "y".to_string(),
                    reason: "the excluded character class is empty".to_string(),
                },
            ),
        ];
        for (builder, expect) in tests {
            assert_eq!(builder.build().expect_err("invalid tables"), expect);
        }
    }

    #[test]
    fn shared_between_threads() {
        let engine = std::sync::Arc::new(InflectionEngine::new());
        let handles = (0..4)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || engine.to_plural("child"))
            })
            .collect::<Vec<_>>();
        for h in handles {
            assert_eq!(h.join().expect("thread panicked"), "children");
        }
    }
}
