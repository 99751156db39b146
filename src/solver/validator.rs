//! Word validation
//!
//! Decides whether a word can be built from the puzzle letters.

use crate::core::{LetterSet, MIN_WORD_LENGTH, Puzzle};

/// Check that `word` satisfies the construction rule
///
/// A valid word:
/// - is at least `MIN_WORD_LENGTH` characters long
/// - contains every required letter at least once
/// - uses only letters from required ∪ extra
///
/// Case is irrelevant on every input. An empty `required` set places no
/// required-letter constraint.
///
/// # Examples
/// ```
/// use spelling_bee::core::LetterSet;
/// use spelling_bee::solver::is_valid_word;
///
/// let required = LetterSet::normalize("f");
/// let extra = LetterSet::normalize("tpayec");
///
/// assert!(is_valid_word("Face", &required, &extra));
/// assert!(!is_valid_word("Faced", &required, &extra)); // 'd' not allowed
/// assert!(!is_valid_word("cat", &required, &extra)); // too short
/// ```
#[must_use]
pub fn is_valid_word(word: &str, required: &LetterSet, extra: &LetterSet) -> bool {
    if word.chars().count() < MIN_WORD_LENGTH {
        return false;
    }

    let word_letters = LetterSet::normalize(word);

    // Every required letter must appear
    if !word_letters.is_superset(required) {
        return false;
    }

    // Only puzzle letters may appear
    word_letters
        .iter()
        .all(|letter| required.contains(letter) || extra.contains(letter))
}

impl Puzzle {
    /// Check whether `word` can be built from this puzzle's letters
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new("F", "tpayec");
    /// assert!(puzzle.is_valid("Facet"));
    /// ```
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        is_valid_word(word, self.required(), self.extra())
    }
}

/// Keep only the words that pass `is_valid_word`, preserving input order
#[must_use]
pub fn filter_words<'a, S: AsRef<str>>(
    words: &'a [S],
    required: &LetterSet,
    extra: &LetterSet,
) -> Vec<&'a str> {
    words
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|word| is_valid_word(word, required, extra))
        .collect()
}
