//! Grapheme-mapping tables for Banglish → Bengali transliteration.
//!
//! All tables are immutable, process-wide constants: the raw pattern/glyph
//! pairs live in `const` slices below, and [`tables`] builds them into finite
//! maps exactly once (behind a [`OnceLock`]).  Nothing is ever inserted after
//! construction, so concurrent reads need no synchronisation.
//!
//! Table roles:
//! * **Consonants** — 1–3 ASCII chars → one Bengali consonant or conjunct.
//! * **Vowels (kar)** — 1–2 ASCII chars → one dependent vowel diacritic.
//! * **Independent vowels** — 1–2 ASCII chars → one standalone vowel letter.
//! * **Kar set** — exactly the value-range of the kar table; membership of
//!   *emitted* glyphs drives the double-diacritic guard in the engine.
//! * **Numerals** — single ASCII digit → Bengali digit.
//! * **Dictionary** — lower-cased whole Banglish word → full Bengali word,
//!   for irregular spellings no character rule gets right.
//!
//! Construction validates the tables once: an empty key, an over-long key,
//! a duplicate key within one table, or a consonant/vowel key collision is a
//! programmer error in the constants and aborts the process immediately —
//! a silently ambiguous table would transliterate wrongly without any signal.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Longest consonant pattern the engine will probe (3-then-2-then-1 scan).
pub const MAX_CONSONANT_LEN: usize = 3;
/// Longest vowel pattern the engine will probe.
pub const MAX_VOWEL_LEN: usize = 2;

// ---------------------------------------------------------------------------
// Raw mapping data
// ---------------------------------------------------------------------------

/// Consonants and conjuncts.  Longer patterns win over shorter ones at the
/// same scan position, so `chh` must never be reachable as `ch` + `h`.
const CONSONANTS: &[(&str, &str)] = &[
    // 3-character clusters
    ("chh", "ছ"),
    ("ksh", "ক্ষ"),
    // 2-character patterns
    ("kh", "খ"),
    ("gh", "ঘ"),
    ("ng", "ং"),
    ("ch", "চ"),
    ("jh", "ঝ"),
    ("ny", "ঞ"),
    ("th", "থ"),
    ("dh", "ধ"),
    ("ph", "ফ"),
    ("bh", "ভ"),
    ("sh", "শ"),
    ("rr", "ড়"),
    ("rh", "ঢ়"),
    ("gy", "জ্ঞ"),
    // single characters
    ("k", "ক"),
    ("q", "ক"),
    ("g", "গ"),
    ("c", "চ"),
    ("j", "জ"),
    ("z", "য"),
    ("t", "ত"),
    ("d", "দ"),
    ("n", "ন"),
    ("p", "প"),
    ("f", "ফ"),
    ("b", "ব"),
    ("v", "ভ"),
    ("m", "ম"),
    ("y", "য়"),
    ("r", "র"),
    ("l", "ল"),
    ("s", "স"),
    ("h", "হ"),
    ("x", "ক্স"),
];

/// Dependent vowel diacritics (kar).  The engine consults this table only
/// after the consonant table at the same pattern length.
const VOWELS: &[(&str, &str)] = &[
    ("aa", "া"),
    ("ii", "ী"),
    ("ee", "ী"),
    ("uu", "ূ"),
    ("oo", "ু"),
    ("oi", "ৈ"),
    ("ou", "ৌ"),
    ("ri", "ৃ"),
    ("a", "া"),
    ("i", "ি"),
    ("u", "ু"),
    ("e", "ে"),
    ("o", "ো"),
];

/// Standalone vowel letters, used word-initially or after nothing emitted.
/// Keyed by the same patterns as [`VOWELS`]; a 2-character vowel match with
/// no entry here falls back to its first character's entry.
const INDEPENDENT_VOWELS: &[(&str, &str)] = &[
    ("aa", "আ"),
    ("ii", "ঈ"),
    ("ee", "ঈ"),
    ("uu", "ঊ"),
    ("oo", "উ"),
    ("oi", "ঐ"),
    ("ou", "ঔ"),
    ("ri", "ঋ"),
    ("a", "আ"),
    ("i", "ই"),
    ("u", "উ"),
    ("e", "এ"),
    ("o", "ও"),
];

/// Bengali digits, converted digit-by-digit regardless of surroundings.
const NUMERALS: &[(&str, &str)] = &[
    ("0", "০"),
    ("1", "১"),
    ("2", "২"),
    ("3", "৩"),
    ("4", "৪"),
    ("5", "৫"),
    ("6", "৬"),
    ("7", "৭"),
    ("8", "৮"),
    ("9", "৯"),
];

/// Whole-word overrides.  Keys are lower-cased Banglish words; a hit
/// short-circuits the character engine entirely for that word.
const DICTIONARY: &[(&str, &str)] = &[
    ("ami", "আমি"),
    ("amra", "আমরা"),
    ("amar", "আমার"),
    ("tumi", "তুমি"),
    ("tomar", "তোমার"),
    ("apni", "আপনি"),
    ("se", "সে"),
    ("tara", "তারা"),
    ("ke", "কে"),
    ("ki", "কি"),
    ("keno", "কেন"),
    ("kemon", "কেমন"),
    ("kothay", "কোথায়"),
    ("ekhane", "এখানে"),
    ("okhane", "ওখানে"),
    ("ekhon", "এখন"),
    ("aj", "আজ"),
    ("kal", "কাল"),
    ("bhalo", "ভালো"),
    ("valo", "ভালো"),
    ("kharap", "খারাপ"),
    ("achi", "আছি"),
    ("acho", "আছো"),
    ("ache", "আছে"),
    ("chilo", "ছিল"),
    ("hobe", "হবে"),
    ("na", "না"),
    ("noy", "নয়"),
    ("ar", "আর"),
    ("ebong", "এবং"),
    ("kintu", "কিন্তু"),
    ("khub", "খুব"),
    ("onek", "অনেক"),
    ("kore", "করে"),
    ("korbo", "করব"),
    ("korchi", "করছি"),
    ("bolo", "বলো"),
    ("jabo", "যাব"),
    ("khabo", "খাব"),
    ("dhonnobad", "ধন্যবাদ"),
    ("bangla", "বাংলা"),
    ("bangladesh", "বাংলাদেশ"),
    ("bhasha", "ভাষা"),
    ("manush", "মানুষ"),
    ("shundor", "সুন্দর"),
    ("pani", "পানি"),
    ("bari", "বাড়ি"),
    ("boi", "বই"),
    ("school", "স্কুল"),
];

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// The fully built, validated lookup tables.  One instance per process.
pub struct Tables {
    pub consonants: HashMap<&'static str, &'static str>,
    pub vowels: HashMap<&'static str, &'static str>,
    pub independent_vowels: HashMap<&'static str, &'static str>,
    pub numerals: HashMap<&'static str, &'static str>,
    /// Value-range of [`Tables::vowels`]; membership of the last *emitted*
    /// glyph is what the engine tests, never the input.
    pub kar_set: HashSet<&'static str>,
    pub dictionary: HashMap<&'static str, &'static str>,
}

impl Tables {
    fn build() -> Self {
        let consonants = build_map("consonant", CONSONANTS, MAX_CONSONANT_LEN);
        let vowels = build_map("vowel", VOWELS, MAX_VOWEL_LEN);
        let independent_vowels =
            build_map("independent-vowel", INDEPENDENT_VOWELS, MAX_VOWEL_LEN);
        let numerals = build_map("numeral", NUMERALS, 1);
        let dictionary = build_map("dictionary", DICTIONARY, usize::MAX);

        // A pattern claimed by both roles would make the vowel entry
        // unreachable (consonant probing runs first at every length).
        for key in vowels.keys() {
            if consonants.contains_key(key) {
                panic!("pattern {key:?} present in both consonant and vowel tables");
            }
        }

        for (key, _) in DICTIONARY {
            if key.chars().any(|c| c.is_ascii_uppercase()) {
                panic!("dictionary key {key:?} must be lower-cased");
            }
        }

        let kar_set = vowels.values().copied().collect();

        Self {
            consonants,
            vowels,
            independent_vowels,
            numerals,
            kar_set,
            dictionary,
        }
    }
}

/// Build one table from its constant pair slice, enforcing the startup
/// invariants: non-empty keys, keys within the role's probe length, no
/// duplicate keys, non-empty values.
fn build_map(
    role: &str,
    pairs: &'static [(&'static str, &'static str)],
    max_key_len: usize,
) -> HashMap<&'static str, &'static str> {
    let mut map = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        if key.is_empty() {
            panic!("{role} table contains an empty pattern");
        }
        if key.chars().count() > max_key_len {
            panic!("{role} pattern {key:?} exceeds the {max_key_len}-char probe length");
        }
        if value.is_empty() {
            panic!("{role} pattern {key:?} maps to an empty glyph");
        }
        if map.insert(*key, *value).is_some() {
            panic!("duplicate key {key:?} in {role} table");
        }
    }
    map
}

/// The process-wide tables, built and validated on first use.
pub fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(Tables::build)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_build_without_panicking() {
        let t = tables();
        assert!(!t.consonants.is_empty());
        assert!(!t.vowels.is_empty());
        assert!(!t.independent_vowels.is_empty());
        assert_eq!(t.numerals.len(), 10);
        assert!(!t.dictionary.is_empty());
    }

    #[test]
    fn kar_set_is_exactly_the_vowel_value_range() {
        let t = tables();
        let values: HashSet<&str> = t.vowels.values().copied().collect();
        assert_eq!(t.kar_set, values);
    }

    #[test]
    fn consonant_and_vowel_keys_are_disjoint() {
        let t = tables();
        for key in t.vowels.keys() {
            assert!(
                !t.consonants.contains_key(key),
                "pattern {key:?} is claimed by both roles"
            );
        }
    }

    #[test]
    fn every_vowel_pattern_has_an_independent_form() {
        // Not required by the engine (it falls back to the raw character),
        // but the shipped tables keep the key sets aligned.
        let t = tables();
        for key in t.vowels.keys() {
            assert!(
                t.independent_vowels.contains_key(key),
                "vowel pattern {key:?} has no independent form"
            );
        }
    }

    #[test]
    fn pattern_lengths_respect_probe_bounds() {
        let t = tables();
        assert!(t
            .consonants
            .keys()
            .all(|k| (1..=MAX_CONSONANT_LEN).contains(&k.chars().count())));
        assert!(t
            .vowels
            .keys()
            .all(|k| (1..=MAX_VOWEL_LEN).contains(&k.chars().count())));
        assert!(t.numerals.keys().all(|k| k.len() == 1));
    }

    #[test]
    fn dictionary_keys_are_lower_cased_ascii() {
        let t = tables();
        for key in t.dictionary.keys() {
            assert!(key.is_ascii(), "dictionary key {key:?} is not ASCII");
            assert_eq!(
                *key,
                key.to_ascii_lowercase().as_str(),
                "dictionary key {key:?} is not lower-cased"
            );
        }
    }

    #[test]
    fn table_keys_are_ascii() {
        let t = tables();
        for key in t
            .consonants
            .keys()
            .chain(t.vowels.keys())
            .chain(t.independent_vowels.keys())
            .chain(t.numerals.keys())
        {
            assert!(key.is_ascii(), "pattern {key:?} is not ASCII");
        }
    }
}
