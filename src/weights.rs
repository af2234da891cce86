//! Pronunciation weight model for Devanagari text.
//!
//! Each code point carries an approximate relative pronunciation duration:
//! independent vowels and consonants take roughly a unit, attached vowel
//! signs take fractions, and the virama subtracts weight because a
//! half-consonant shortens the syllable. Weights are dimensionless and only
//! ever used for proportional time allocation.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Bonus added when a word contains at least one base character, covering the
/// inherent vowel sound every bare consonant carries.
const BASE_CHARACTER_BONUS: f64 = 0.5;

/// Floor applied to every word weight. Keeps even a lone combining mark at a
/// strictly positive duration share, so downstream division never hits zero.
const MIN_WORD_WEIGHT: f64 = 0.1;

static DEVANAGARI_WEIGHTS: Lazy<HashMap<char, f64>> = Lazy::new(|| {
    HashMap::from([
        // Independent vowels
        ('अ', 1.0),
        ('आ', 1.5),
        ('इ', 1.0),
        ('ई', 1.5),
        ('उ', 1.0),
        ('ऊ', 1.5),
        ('ऋ', 1.0),
        ('ॠ', 1.5),
        ('ऌ', 1.0),
        ('ॡ', 1.5),
        ('ए', 1.5),
        ('ऐ', 2.0),
        ('ओ', 1.5),
        ('औ', 2.0),
        // Consonants
        ('क', 1.0),
        ('ख', 1.0),
        ('ग', 1.0),
        ('घ', 1.0),
        ('ङ', 1.0),
        ('च', 1.0),
        ('छ', 1.0),
        ('ज', 1.0),
        ('झ', 1.0),
        ('ञ', 1.0),
        ('ट', 1.0),
        ('ठ', 1.0),
        ('ड', 1.0),
        ('ढ', 1.0),
        ('ण', 1.0),
        ('त', 1.0),
        ('थ', 1.0),
        ('द', 1.0),
        ('ध', 1.0),
        ('न', 1.0),
        ('प', 1.0),
        ('फ', 1.0),
        ('ब', 1.0),
        ('भ', 1.0),
        ('म', 1.0),
        ('य', 1.0),
        ('र', 1.0),
        ('ल', 1.0),
        ('व', 1.0),
        ('श', 1.0),
        ('ष', 1.0),
        ('स', 1.0),
        ('ह', 1.0),
        // Vowel signs (matras)
        ('ा', 0.5),
        ('ि', 0.5),
        ('ी', 1.0),
        ('ु', 0.5),
        ('ू', 1.0),
        ('ृ', 0.5),
        ('ॄ', 1.0),
        ('ॢ', 0.5),
        ('ॣ', 1.0),
        ('े', 1.0),
        ('ै', 1.5),
        ('ो', 1.0),
        ('ौ', 1.5),
        // Nasalization and aspiration marks
        ('ं', 0.5),
        ('ः', 0.5),
        ('ँ', 0.5),
        // Virama marks a half-consonant
        ('्', -0.5),
        // Danda punctuation
        ('।', 0.5),
        ('॥', 0.5),
        (' ', 0.0),
    ])
});

/// Whether `c` is a base Devanagari character (independent vowel or
/// consonant), as opposed to a combining sign.
fn is_base_character(c: char) -> bool {
    ('\u{0905}'..='\u{0939}').contains(&c)
}

/// Pronunciation weight of a whole word.
///
/// Sums the per-character table weights (unmapped characters contribute
/// nothing), adds the inherent-vowel bonus when any base character is
/// present, and clamps to [`MIN_WORD_WEIGHT`]. Pure and deterministic.
pub fn word_weight(word: &str) -> f64 {
    let mut total: f64 = word
        .chars()
        .map(|c| DEVANAGARI_WEIGHTS.get(&c).copied().unwrap_or(0.0))
        .sum();

    if word.chars().any(is_base_character) {
        total += BASE_CHARACTER_BONUS;
    }

    total.max(MIN_WORD_WEIGHT)
}
