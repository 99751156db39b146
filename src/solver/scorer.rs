//! Word scoring
//!
//! Points follow the newspaper game's rules:
//! - Words shorter than 4 letters are worth 0 points
//! - 4-letter words are worth 1 point
//! - Longer words earn 1 point per letter
//! - A pangram, a word using every puzzle letter, earns 7 extra points

use crate::core::{LetterSet, MIN_WORD_LENGTH, PANGRAM_BONUS, Puzzle, SHORT_WORD_POINTS};

/// Score a word against the puzzle alphabet
///
/// `all_letters` is required ∪ extra. The word is not validated; scoring a
/// word the validator would reject gives a meaningless but well-defined
/// number.
///
/// # Examples
/// ```
/// use spelling_bee::core::LetterSet;
/// use spelling_bee::solver::word_score;
///
/// let all = LetterSet::normalize("ftpayec");
/// assert_eq!(word_score("face", &all), 1);
/// assert_eq!(word_score("effect", &all), 6);
/// assert_eq!(word_score("ftpayec", &all), 14); // pangram
/// ```
#[must_use]
pub fn word_score(word: &str, all_letters: &LetterSet) -> u32 {
    let length = word.chars().count();

    let base = match length {
        n if n < MIN_WORD_LENGTH => return 0,
        MIN_WORD_LENGTH => SHORT_WORD_POINTS,
        n => n as u32,
    };

    if is_pangram(word, all_letters) {
        base + PANGRAM_BONUS
    } else {
        base
    }
}

/// True when `word` uses every letter of `all_letters` at least once
#[must_use]
pub fn is_pangram(word: &str, all_letters: &LetterSet) -> bool {
    LetterSet::normalize(word).is_superset(all_letters)
}

impl Puzzle {
    /// Score `word` against this puzzle's alphabet
    ///
    /// The word is not validated first.
    #[must_use]
    pub fn score(&self, word: &str) -> u32 {
        word_score(word, self.all_letters())
    }
}
