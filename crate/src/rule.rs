//! Suffix rules and the tables that hold them.
//!
//! A [SuffixTable] maps a word ending to a [Rule]. The engine looks up tails
//! of a word longest first, so a rule for "status" always wins over a rule
//! for "us".

use crate::error::ConfigError;
use std::collections::{HashMap, HashSet};

/// A test on the character immediately before a suffix. Conditional rules
/// only fire when their condition holds, so "y" becomes "ies" after "d" in
/// "lady" but not after "a" in "day".
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    excluded: String,
    allow_word_start: bool,
}

impl Condition {
    /// The suffix must be preceded by a character that is not one of
    /// `excluded`. A word consisting of only the suffix does not match.
    pub fn not_after(excluded: &str) -> Self {
        Self {
            excluded: excluded.to_string(),
            allow_word_start: false,
        }
    }

    /// Like [Condition::not_after], but a word consisting of only the suffix
    /// matches too.
    pub fn not_after_or_start(excluded: &str) -> Self {
        Self {
            excluded: excluded.to_string(),
            allow_word_start: true,
        }
    }

    /// Returns true if the rule may fire on a word whose text before the
    /// suffix is `stem`.
    pub fn holds(&self, stem: &str) -> bool {
        match stem.chars().next_back() {
            Some(c) => !self.excluded.contains(c),
            None => self.allow_word_start,
        }
    }

    fn validate(&self, suffix: &str) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidCondition {
            suffix: suffix.to_string(),
            reason: reason.to_string(),
        };
        if self.excluded.is_empty() {
            return Err(invalid("the excluded character class is empty"));
        }
        if self
            .excluded
            .chars()
            .any(|c| c.is_uppercase() || c.is_whitespace())
        {
            return Err(invalid(
                "the excluded character class contains characters that never appear in a normalized word",
            ));
        }
        Ok(())
    }
}

/// What to do with a word ending.
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    /// Replace the suffix with this text.
    Literal(String),
    /// Replace the suffix with `replacement` only when `condition` holds.
    Conditional {
        condition: Condition,
        replacement: String,
    },
}

impl Rule {
    pub fn literal(replacement: &str) -> Self {
        Rule::Literal(replacement.to_string())
    }

    pub fn conditional(condition: Condition, replacement: &str) -> Self {
        Rule::Conditional {
            condition,
            replacement: replacement.to_string(),
        }
    }

    /// Applies the rule to a word split into `stem` and `suffix`. Returns
    /// `None` when the rule declines, in which case the caller moves on to
    /// shorter suffixes.
    ///
    /// A literal rule declines only if it would produce an empty word. A
    /// conditional rule also declines when its condition does not hold or
    /// when it would leave the word unchanged.
    pub(crate) fn apply(&self, stem: &str, suffix: &str) -> Option<String> {
        let new = match self {
            Rule::Literal(replacement) => format!("{}{}", stem, replacement),
            Rule::Conditional {
                condition,
                replacement,
            } => {
                if !condition.holds(stem) || replacement == suffix {
                    return None;
                }
                format!("{}{}", stem, replacement)
            }
        };
        if new.is_empty() {
            return None;
        }
        Some(new)
    }

    fn literal_replacement(&self) -> Option<&str> {
        match self {
            Rule::Literal(r) => Some(r),
            Rule::Conditional { .. } => None,
        }
    }

    fn validate(&self, suffix: &str) -> Result<(), ConfigError> {
        match self {
            Rule::Literal(_) => Ok(()),
            Rule::Conditional {
                condition,
                replacement,
            } => {
                if replacement.is_empty() {
                    return Err(ConfigError::InvalidCondition {
                        suffix: suffix.to_string(),
                        reason: "the replacement is empty".to_string(),
                    });
                }
                condition.validate(suffix)
            }
        }
    }
}

/// An immutable map from word endings to rules, plus an optional fallback
/// suffix appended when no rule fires.
#[derive(Debug)]
pub struct SuffixTable {
    rules: HashMap<String, Rule>,
    // Every literal replacement, plus the fallback. A word ending in one of
    // these already looks like the output of this table.
    results: HashSet<String>,
    fallback: Option<String>,
    longest: usize,
}

impl SuffixTable {
    /// Builds a table from `(suffix, rule)` pairs. When a suffix appears more
    /// than once the last rule wins.
    pub(crate) fn build(
        name: &'static str,
        entries: Vec<(String, Rule)>,
        fallback: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut rules = HashMap::with_capacity(entries.len());
        for (suffix, rule) in entries {
            if suffix.is_empty() {
                return Err(ConfigError::EmptySuffix { table: name });
            }
            rule.validate(&suffix)?;
            rules.insert(suffix, rule);
        }

        let mut results: HashSet<String> = rules
            .values()
            .filter_map(Rule::literal_replacement)
            .filter(|r| !r.is_empty())
            .map(String::from)
            .collect();
        if let Some(f) = &fallback {
            results.insert(f.clone());
        }

        let longest = rules
            .keys()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0);

        Ok(Self {
            rules,
            results,
            fallback,
            longest,
        })
    }

    pub fn get(&self, suffix: &str) -> Option<&Rule> {
        self.rules.get(suffix)
    }

    /// Returns true if `suffix` is something this table produces.
    pub fn is_result(&self, suffix: &str) -> bool {
        self.results.contains(suffix)
    }

    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// The length in characters of the longest suffix in the table.
    pub fn longest(&self) -> usize {
        self.longest
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Condition, Rule, SuffixTable};
    use crate::error::ConfigError;

    #[test]
    fn condition_holds() {
        let not_vowel = Condition::not_after("aeiouy");
        let not_u = Condition::not_after_or_start("u");
        let tests = [
            (&not_vowel, "lad", true),
            (&not_vowel, "da", false),
            (&not_vowel, "bo", false),
            (&not_vowel, "", false),
            (&not_u, "fire", true),
            (&not_u, "hu", false),
            (&not_u, "", true),
        ];
        for (condition, stem, expect) in tests {
            assert_eq!(
                condition.holds(stem),
                expect,
                "{:?}.holds({}) = {}",
                condition,
                stem,
                expect,
            );
        }
    }

    #[test]
    fn apply() {
        let ies = Rule::conditional(Condition::not_after("aeiouy"), "ies");
        let literal = Rule::literal("ches");
        let strip = Rule::literal("");
        let same = Rule::conditional(Condition::not_after("a"), "y");
        let tests = [
            (&ies, "lad", "y", Some("ladies")),
            (&ies, "da", "y", None),
            (&literal, "chur", "ch", Some("churches")),
            (&strip, "cat", "s", Some("cat")),
            (&strip, "", "s", None),
            (&same, "bo", "y", None),
        ];
        for (rule, stem, suffix, expect) in tests {
            assert_eq!(
                rule.apply(stem, suffix).as_deref(),
                expect,
                "{:?}.apply({}, {}) = {:?}",
                rule,
                stem,
                suffix,
                expect,
            );
        }
    }

    #[test]
    fn build_table() {
        let table = SuffixTable::build(
            "plural",
            vec![
                ("ch".to_string(), Rule::literal("ches")),
                ("status".to_string(), Rule::literal("statuses")),
                ("x".to_string(), Rule::literal("xes")),
                ("x".to_string(), Rule::literal("xen")),
                (
                    "y".to_string(),
                    Rule::conditional(Condition::not_after("aeiouy"), "ies"),
                ),
            ],
            Some("s".to_string()),
        )
        .expect("valid table");

        assert_eq!(table.len(), 4);
        assert_eq!(table.longest(), 6);
        assert_eq!(table.fallback(), Some("s"));
        assert_eq!(table.get("x"), Some(&Rule::literal("xen")));
        assert!(table.is_result("ches"));
        assert!(table.is_result("s"));
        assert!(!table.is_result("xes"));
        assert!(!table.is_result("ies"));
    }

    #[test]
    fn build_table_errors() {
        let tests = [
            (
                ("", Rule::literal("s")),
                ConfigError::EmptySuffix { table: "plural" },
            ),
            (
                (
                    "y",
                    Rule::conditional(Condition::not_after(""), "ies"),
                ),
                ConfigError::InvalidCondition {
                    suffix: "y".to_string(),
                    reason: "the excluded character class is empty".to_string(),
                },
            ),
            (
                ("y", Rule::conditional(Condition::not_after("aeiou"), "")),
                ConfigError::InvalidCondition {
                    suffix: "y".to_string(),
                    reason: "the replacement is empty".to_string(),
                },
            ),
        ];
        for ((suffix, rule), expect) in tests {
            let err = SuffixTable::build("plural", vec![(suffix.to_string(), rule)], None)
                .expect_err("invalid table");
            assert_eq!(err, expect);
        }

        let err = SuffixTable::build(
            "singular",
            vec![(
                "ies".to_string(),
                Rule::conditional(Condition::not_after("AEIOU"), "y"),
            )],
            None,
        )
        .expect_err("uppercase class");
        assert!(matches!(err, ConfigError::InvalidCondition { .. }));
    }
}
