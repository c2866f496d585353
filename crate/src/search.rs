//! Every form of a word a search index should match.
//!
//! ```
//! use en_wordtools::{engine::default_engine, search::search_forms};
//!
//! assert_eq!(search_forms(default_engine(), "Ladies"), vec!["ladies", "lady"]);
//! assert_eq!(search_forms(default_engine(), "cat"), vec!["cat", "cats"]);
//! ```
use crate::{engine::InflectionEngine, lexicon::Lexicon, util};

/// Returns the normalized word, its singular and its plural, without
/// duplicates. An empty word has no forms.
pub fn search_forms(engine: &InflectionEngine, word: &str) -> Vec<String> {
    let word = util::normalize(word);
    if word.is_empty() {
        return vec![];
    }
    let mut forms = vec![word.into_owned()];
    let singular = engine.to_singular(&forms[0]);
    let plural = engine.to_plural(&forms[0]);
    push_unique(&mut forms, singular);
    push_unique(&mut forms, plural);
    forms
}

/// Like [search_forms], followed by every word the lexicon relates to any of
/// those forms.
pub fn search_forms_with_lexicon<L>(
    engine: &InflectionEngine,
    lexicon: &L,
    word: &str,
) -> Vec<String>
where
    L: Lexicon + ?Sized,
{
    let mut forms = search_forms(engine, word);
    for i in 0..forms.len() {
        for related in lexicon.related_words(&forms[i], false) {
            push_unique(&mut forms, related);
        }
    }
    forms
}

fn push_unique(forms: &mut Vec<String>, form: String) {
    if !forms.contains(&form) {
        forms.push(form);
    }
}
