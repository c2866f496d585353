//! The built-in rule data. Lists are sorted A-Z within each table.

use crate::rule::{Condition, Rule};

/// Words ending with one of these are both singular and plural.
pub(crate) const IGNORE_ENDINGS: &[&str] = &[
    "deer", "fish", "lese", "measles", "media", "mese", "nese", "ois", "pox", "rese", "sheep",
    "ting",
];

/// Appended to a word when no plural rule applies.
pub(crate) const PLURAL_FALLBACK: &str = "s";

pub(crate) const PLURAL_ENDINGS: &[(&str, &str)] = &[
    ("af", "aves"),
    ("alias", "aliases"),
    ("alumnus", "alumni"),
    ("axis", "axes"),
    ("bacillus", "bacilli"),
    ("buffalo", "buffaloes"),
    ("cactus", "cacti"),
    ("ch", "ches"),
    ("chef", "chefs"),
    ("child", "children"),
    ("crisis", "crises"),
    ("ef", "eves"),
    ("focus", "foci"),
    ("fungus", "fungi"),
    ("hive", "hives"),
    ("ium", "ia"),
    ("lf", "lves"),
    ("louse", "lice"),
    // curriculum => curricula
    ("lum", "la"),
    ("matrix", "matrices"),
    ("mouse", "mice"),
    ("nucleus", "nuclei"),
    ("person", "people"),
    ("quiz", "quizzes"),
    ("quy", "quies"),
    ("radius", "radii"),
    ("rf", "rves"),
    ("s", "s"),
    ("sh", "shes"),
    ("sis", "ses"),
    ("ss", "sses"),
    ("status", "statuses"),
    ("stimulus", "stimuli"),
    ("syllabus", "syllabi"),
    ("terminus", "termini"),
    ("tomato", "tomatoes"),
    ("tum", "ta"),
    ("us", "uses"),
    ("vertex", "vertices"),
    ("x", "xes"),
];

// (suffix, characters that may not precede it, whether the suffix may be the
// whole word, replacement)
pub(crate) const PLURAL_CONDITIONALS: &[(&str, &str, bool, &str)] = &[
    // knife => knives, but not giraffe
    ("fe", "f", false, "ves"),
    // fireman => firemen, but not human
    ("man", "u", true, "men"),
    // lady => ladies, but not day or boy
    ("y", "aeiouy", false, "ies"),
];

pub(crate) const SINGULAR_ENDINGS: &[(&str, &str)] = &[
    ("aliases", "alias"),
    ("alumni", "alumnus"),
    ("analyses", "analysis"),
    ("aves", "af"),
    ("axes", "axis"),
    ("bacilli", "bacillus"),
    ("bases", "basis"),
    ("cacti", "cactus"),
    ("ches", "ch"),
    ("children", "child"),
    ("crises", "crisis"),
    ("cula", "culum"),
    ("diagnoses", "diagnosis"),
    ("drives", "drive"),
    ("eaus", "eau"),
    // believes => belief
    ("eves", "ef"),
    ("faxes", "fax"),
    ("foci", "focus"),
    ("fungi", "fungus"),
    ("hives", "hive"),
    ("ia", "ium"),
    ("indices", "index"),
    ("ives", "ife"),
    ("lice", "louse"),
    // shelves => shelf
    ("lves", "lf"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("menus", "menu"),
    ("mice", "mouse"),
    ("movies", "movie"),
    // formulae => formula
    ("mulae", "mula"),
    ("news", "news"),
    ("nuclei", "nucleus"),
    ("oes", "o"),
    ("ouses", "ouse"),
    ("oxen", "ox"),
    ("parentheses", "parenthesis"),
    ("people", "person"),
    ("prognoses", "prognosis"),
    ("quies", "quy"),
    ("quizzes", "quiz"),
    ("radii", "radius"),
    ("s", ""),
    ("ses", "sis"),
    ("shes", "sh"),
    ("shoes", "shoe"),
    ("sses", "ss"),
    ("statuses", "status"),
    ("stimuli", "stimulus"),
    ("syllabi", "syllabus"),
    ("synopses", "synopsis"),
    // quanta => quantum
    ("ta", "tum"),
    ("taxes", "tax"),
    ("termini", "terminus"),
    ("theses", "thesis"),
    ("tives", "tive"),
    ("us", "us"),
    ("vertices", "vertex"),
    ("virii", "virus"),
    ("waxes", "wax"),
    ("xes", "x"),
];

pub(crate) const SINGULAR_CONDITIONALS: &[(&str, &str, bool, &str)] = &[
    // disabilities => disability, but not monkeys
    ("ies", "aeiouy", false, "y"),
    // viruses => virus, but not causes
    ("uses", "a", false, "us"),
    // knives => knife, but not curves, hooves, slaves or leaves
    ("ves", "rfoa", false, "fe"),
];

/// Singular and plural pairs that no suffix rule produces.
pub(crate) const IRREGULAR_WORDS: &[(&str, &str)] = &[
    ("atlas", "atlases"),
    ("beef", "beefs"),
    ("belief", "beliefs"),
    ("brief", "briefs"),
    ("brother", "brothers"),
    ("cache", "caches"),
    ("cafe", "cafes"),
    ("chef", "chefs"),
    ("chief", "chiefs"),
    ("child", "children"),
    ("cookie", "cookies"),
    ("corpus", "corpuses"),
    ("cow", "cows"),
    ("criterion", "criteria"),
    ("foe", "foes"),
    ("foot", "feet"),
    ("formula", "formulae"),
    ("ganglion", "ganglions"),
    ("genie", "genies"),
    ("genus", "genera"),
    ("goose", "geese"),
    ("graffito", "graffiti"),
    ("halo", "halos"),
    ("hero", "heroes"),
    ("hoof", "hoofs"),
    ("lexicon", "lexica"),
    ("loaf", "loaves"),
    ("man", "men"),
    ("minimum", "minima"),
    ("money", "monies"),
    ("mongoose", "mongooses"),
    ("mouse", "mice"),
    ("move", "moves"),
    ("mucosa", "mucosae"),
    ("mythos", "mythoi"),
    ("niche", "niches"),
    ("numen", "numina"),
    ("occiput", "occiputs"),
    ("octopus", "octopuses"),
    ("opus", "opuses"),
    ("ox", "oxen"),
    ("passerby", "passersby"),
    ("person", "people"),
    ("phenomenon", "phenomena"),
    ("photo", "photos"),
    ("piano", "pianos"),
    ("potato", "potatoes"),
    ("referendum", "referenda"),
    ("roof", "roofs"),
    ("sex", "sexes"),
    ("sieve", "sieves"),
    ("soliloquy", "soliloquies"),
    ("spectrum", "spectra"),
    ("tooth", "teeth"),
    ("trilby", "trilbys"),
    ("turf", "turfs"),
    ("volcano", "volcanos"),
    ("woman", "women"),
];

/// Words spelled the same in singular and plural. A few function words are
/// here so they are never inflected.
pub(crate) const INVARIANT_WORDS: &[&str] = &[
    "aircraft",
    "and",
    "cattle",
    "chassis",
    "clippers",
    "debris",
    "diabetes",
    "equipment",
    "fair",
    "feedback",
    "gallows",
    "graffiti",
    "headquarters",
    "information",
    "innings",
    "machinery",
    "moose",
    "news",
    "nexus",
    "or",
    "oz",
    "pokemon",
    "proceedings",
    "research",
    "salmon",
    "series",
    "species",
    "stadia",
    "this",
    "weather",
];

pub(crate) fn plural_rules() -> Vec<(String, Rule)> {
    rules(PLURAL_ENDINGS, PLURAL_CONDITIONALS)
}

pub(crate) fn singular_rules() -> Vec<(String, Rule)> {
    rules(SINGULAR_ENDINGS, SINGULAR_CONDITIONALS)
}

fn rules(
    literals: &[(&str, &str)],
    conditionals: &[(&str, &str, bool, &str)],
) -> Vec<(String, Rule)> {
    let literals = literals
        .iter()
        .map(|(suffix, replacement)| (suffix.to_string(), Rule::literal(replacement)));
    let conditionals = conditionals
        .iter()
        .map(|(suffix, excluded, allow_word_start, replacement)| {
            let condition = if *allow_word_start {
                Condition::not_after_or_start(excluded)
            } else {
                Condition::not_after(excluded)
            };
            (
                suffix.to_string(),
                Rule::conditional(condition, replacement),
            )
        });
    literals.chain(conditionals).collect()
}
