//! The transliteration engine: greedy longest-match scanning with
//! context-sensitive vowel placement.
//!
//! [`convert`] is the whole-text entry point; [`convert_word`] converts one
//! token.  Both are pure functions over the immutable tables — no I/O, no
//! locks, no failure mode.  Anything the tables do not recognise passes
//! through verbatim, so already-Bengali text, punctuation and stray symbols
//! survive unchanged and `convert` is idempotent on its own output.
//!
//! # Tokenization contract
//!
//! `convert` splits on the literal single space character and rejoins with a
//! single space.  Runs of spaces round-trip exactly (empty segments are
//! preserved); newlines and tabs stay *inside* tokens, where they fall
//! through the character engine untouched.
//!
//! # Vowel placement
//!
//! Bengali vowels have two written forms: an independent letter (word-initial
//! or standalone) and a dependent diacritic (kar) attached to the preceding
//! consonant.  A vowel matched at the start of a token, or before anything
//! has been emitted, takes the independent form.  A 1-character vowel whose
//! previously emitted glyph is itself a kar is emitted as its bare ASCII key
//! instead — two diacritics can never stack on one consonant.

use super::tables::{tables, Tables, MAX_CONSONANT_LEN, MAX_VOWEL_LEN};

/// Transliterate a full text.
///
/// Latin Banglish words come out in Bengali script; everything else is
/// preserved unchanged.  Word count and spacing are preserved exactly.
/// Empty input yields empty output.
///
/// # Example
/// ```rust
/// use banglish::translit::convert;
///
/// assert_eq!(convert("ami bhalo achi"), "আমি ভালো আছি");
/// assert_eq!(convert(""), "");
/// ```
pub fn convert(text: &str) -> String {
    let t = tables();
    text.split(' ')
        .map(|token| convert_token(token, t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Transliterate a single token through the character engine, bypassing the
/// dictionary.  Exposed for callers that feed one word at a time.
pub fn convert_word(word: &str) -> String {
    scan_word(word, tables())
}

/// One token: dictionary first (case-insensitive whole-word match), then the
/// character engine.
fn convert_token(token: &str, t: &Tables) -> String {
    if token.is_empty() {
        return String::new();
    }
    let lowered = token.to_ascii_lowercase();
    if let Some(bengali) = t.dictionary.get(lowered.as_str()) {
        return (*bengali).to_string();
    }
    scan_word(token, t)
}

/// Left-to-right greedy scan: 3, then 2, then 1 characters per step, with
/// consonant probing strictly before vowel probing at each length.
///
/// Probes are matched ASCII-lower-cased; on a total miss the *original*
/// character is emitted, so unmapped input (including its case) survives
/// verbatim.  Scan state is two explicit flags — whether anything has been
/// emitted, and whether the last emitted glyph was a kar — never recovered
/// by re-reading the output buffer.
fn scan_word(word: &str, t: &Tables) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len() * 2);
    let mut emitted_any = false;
    let mut last_was_kar = false;

    let mut i = 0;
    while i < chars.len() {
        // 3-character consonant cluster
        if i + MAX_CONSONANT_LEN <= chars.len() {
            let probe = lower_probe(&chars[i..i + MAX_CONSONANT_LEN]);
            if let Some(glyph) = t.consonants.get(probe.as_str()) {
                out.push_str(glyph);
                emitted_any = true;
                last_was_kar = false;
                i += MAX_CONSONANT_LEN;
                continue;
            }
        }

        // 2-character patterns: consonant before vowel
        if i + MAX_VOWEL_LEN <= chars.len() {
            let probe = lower_probe(&chars[i..i + MAX_VOWEL_LEN]);
            if let Some(glyph) = t.consonants.get(probe.as_str()) {
                out.push_str(glyph);
                emitted_any = true;
                last_was_kar = false;
                i += MAX_VOWEL_LEN;
                continue;
            }
            if let Some(kar) = t.vowels.get(probe.as_str()) {
                if i == 0 || !emitted_any {
                    // Independent form; a 2-char pattern without one falls
                    // back to its first character's entry.
                    let independent = t
                        .independent_vowels
                        .get(probe.as_str())
                        .or_else(|| t.independent_vowels.get(&probe[..1]));
                    match independent {
                        Some(glyph) => out.push_str(glyph),
                        None => out.extend(&chars[i..i + MAX_VOWEL_LEN]),
                    }
                    last_was_kar = false;
                } else {
                    out.push_str(kar);
                    last_was_kar = true;
                }
                emitted_any = true;
                i += MAX_VOWEL_LEN;
                continue;
            }
        }

        // Single characters: numeral, consonant, vowel, passthrough
        let original = chars[i];
        let lowered = original.to_ascii_lowercase();
        let mut buf = [0u8; 4];
        let key: &str = lowered.encode_utf8(&mut buf);

        if let Some(digit) = t.numerals.get(key) {
            out.push_str(digit);
            last_was_kar = false;
        } else if let Some(glyph) = t.consonants.get(key) {
            out.push_str(glyph);
            last_was_kar = false;
        } else if let Some(kar) = t.vowels.get(key) {
            if i == 0 || !emitted_any {
                match t.independent_vowels.get(key) {
                    Some(glyph) => out.push_str(glyph),
                    None => out.push(original),
                }
                last_was_kar = false;
            } else if last_was_kar {
                // Double-diacritic guard: the previous glyph is already a
                // kar, so emit the bare vowel letter key instead.
                out.push(lowered);
                last_was_kar = false;
            } else {
                out.push_str(kar);
                last_was_kar = true;
            }
        } else {
            out.push(original);
            // Membership is tested on emitted output: a passed-through glyph
            // that is itself a kar still arms the double-diacritic guard.
            let mut obuf = [0u8; 4];
            let emitted: &str = original.encode_utf8(&mut obuf);
            last_was_kar = t.kar_set.contains(emitted);
        }
        emitted_any = true;
        i += 1;
    }

    out
}

/// ASCII-lower-cased probe string for a window of the scan.
fn lower_probe(window: &[char]) -> String {
    window.iter().map(|c| c.to_ascii_lowercase()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translit::tables::tables;

    // -----------------------------------------------------------------------
    // Whole-text contract
    // -----------------------------------------------------------------------

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn word_count_and_spacing_are_preserved() {
        assert_eq!(convert("ami tumi"), "আমি তুমি");
        // Runs of spaces round-trip exactly.
        assert_eq!(convert("ami  tumi"), "আমি  তুমি");
        assert_eq!(convert(" ami "), " আমি ");
    }

    #[test]
    fn newlines_stay_inside_tokens_and_pass_through() {
        // Space-only tokenization: the newline is part of the token, falls
        // through the character engine, and survives verbatim.
        let out = convert("ek\ndui");
        assert!(out.contains('\n'));
        assert_eq!(out.matches('\n').count(), 1);
    }

    // -----------------------------------------------------------------------
    // Dictionary stage
    // -----------------------------------------------------------------------

    #[test]
    fn dictionary_hit_short_circuits_the_character_engine() {
        let t = tables();
        for (banglish, bengali) in [("ami", "আমি"), ("dhonnobad", "ধন্যবাদ"), ("boi", "বই")] {
            assert_eq!(convert(banglish), bengali);
            assert_eq!(*t.dictionary.get(banglish).unwrap(), bengali);
        }
    }

    #[test]
    fn dictionary_lookup_is_case_insensitive() {
        assert_eq!(convert("Ami"), "আমি");
        assert_eq!(convert("AMI"), "আমি");
        assert_eq!(convert("Bhalo"), "ভালো");
    }

    #[test]
    fn multi_char_probes_match_case_insensitively() {
        // The 3- and 2-character windows are lowered before probing, so
        // mixed case never splits a cluster into shorter matches.
        assert_eq!(convert("CHHuti"), convert("chhuti"));
        assert_eq!(convert("KHata"), "খাতা");
        assert_eq!(convert("nodII"), "নোদী");
    }

    #[test]
    fn substring_of_a_longer_token_does_not_trigger_the_dictionary() {
        // "amir" contains the dictionary key "ami" but must be converted
        // character by character.
        assert_eq!(convert("amir"), "আমির");
        // "ami," carries punctuation, so it is not a whole-word match either.
        assert_eq!(convert("ami,"), "আমি,");
    }

    #[test]
    fn every_dictionary_entry_round_trips_as_a_whole_word() {
        let t = tables();
        for (banglish, bengali) in &t.dictionary {
            assert_eq!(convert(banglish), *bengali, "dictionary word {banglish:?}");
        }
    }

    // -----------------------------------------------------------------------
    // Greedy longest match
    // -----------------------------------------------------------------------

    #[test]
    fn three_char_cluster_beats_shorter_matches() {
        // "chh" → ছ as one glyph, never চ + হ (ch + h) or anything shorter.
        let out = convert("chhuti");
        assert!(out.starts_with('ছ'), "got {out:?}");
        assert!(!out.contains('চ'), "got {out:?}");
        assert!(!out.contains('হ'), "got {out:?}");
    }

    #[test]
    fn two_char_consonant_beats_two_singles() {
        // "kh" → খ, never ক + হ.
        assert_eq!(convert("khata"), "খাতা");
    }

    #[test]
    fn consonant_probing_precedes_vowel_probing() {
        // At length 2 the consonant table wins; "sh" never parses as
        // s + h or as any vowel.
        let out = convert("shob");
        assert!(out.starts_with('শ'), "got {out:?}");
    }

    // -----------------------------------------------------------------------
    // Vowel disambiguation
    // -----------------------------------------------------------------------

    #[test]
    fn word_initial_vowel_takes_the_independent_form() {
        assert_eq!(convert("iti"), "ইতি");
        assert_eq!(convert("ural"), "উরাল");
        // 2-char vowel pattern at position 0.
        assert_eq!(convert("oushodh"), "ঔশোধ");
    }

    #[test]
    fn vowel_after_a_consonant_takes_the_kar_form() {
        assert_eq!(convert("mon"), "মোন");
        assert_eq!(convert("din"), "দিন");
        // 2-char vowel mid-word: "ii" → ী.
        assert_eq!(convert("nodii"), "নোদী");
    }

    #[test]
    fn double_diacritic_guard_emits_the_bare_key() {
        // k + a + o: the second vowel follows a kar, so it must come out as
        // the literal key "o", never a second diacritic stacked on ক.
        assert_eq!(convert("kao"), "কাo");
        // And scanning continues normally afterwards.
        assert_eq!(convert("kaol"), "কাoল");
    }

    #[test]
    fn guard_resets_after_the_bare_vowel() {
        // After the guard fires, the next vowel attaches to the next
        // consonant as usual.
        assert_eq!(convert("kaoto"), "কাoতো");
    }

    // -----------------------------------------------------------------------
    // Numerals
    // -----------------------------------------------------------------------

    #[test]
    fn digits_convert_digit_by_digit() {
        assert_eq!(convert("123"), "১২৩");
        assert_eq!(convert("2024"), "২০২৪");
    }

    #[test]
    fn digits_convert_inside_mixed_tokens() {
        assert_eq!(convert("b2b"), "ব২ব");
        assert_eq!(convert("kk9"), "কক৯");
    }

    // -----------------------------------------------------------------------
    // Passthrough
    // -----------------------------------------------------------------------

    #[test]
    fn bengali_text_passes_through_unchanged() {
        let text = "আমি ভালো আছি।";
        assert_eq!(convert(text), text);
    }

    #[test]
    fn convert_is_idempotent_on_its_own_output() {
        for input in ["ami bhalo achi", "chhuti 123", "kao!", "tumi kothay?"] {
            let once = convert(input);
            assert_eq!(convert(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn punctuation_and_symbols_survive_in_place() {
        assert_eq!(convert("ami, tumi!"), "আমি, তুমি!");
        // Parenthesised token misses the dictionary and goes through the
        // character engine; the parentheses survive in place.
        assert_eq!(convert("(boi)"), "(বৈ)");
        assert_eq!(convert("#2024"), "#২০২৪");
    }

    #[test]
    fn unmapped_characters_keep_their_original_case() {
        // 'w' has no mapping; probing is case-insensitive but passthrough
        // must emit the original character, upper case included.
        assert_eq!(convert_word("kW"), "কW");
        // A passed-through character still counts as emitted output, so the
        // following vowel takes the kar form.
        assert_eq!(convert_word("wo"), "wো");
    }

    // -----------------------------------------------------------------------
    // convert_word (single-token entry point)
    // -----------------------------------------------------------------------

    #[test]
    fn convert_word_bypasses_the_dictionary() {
        // "ami" through the character engine: আ + ম + ি.  The dictionary
        // happens to agree here, which is exactly why it is a good entry.
        assert_eq!(convert_word("ami"), "আমি");
        // "boi": b + oi → ব + ৈ through the rules, where the dictionary
        // says বই — proof the two paths differ.
        assert_eq!(convert_word("boi"), "বৈ");
        assert_eq!(convert("boi"), "বই");
    }

    #[test]
    fn convert_word_on_empty_input() {
        assert_eq!(convert_word(""), "");
    }
}
