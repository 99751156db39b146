//! Case-folded letter sets
//!
//! A `LetterSet` is the unit every membership test in the solver works on:
//! puzzle letters, the combined alphabet, and the distinct letters of a word.

use rustc_hash::FxHashSet;
use std::collections::hash_set;
use std::fmt;
use std::iter::Copied;

/// A set of lower-cased characters
///
/// Members are always stored in their lower-case form, so lookups and
/// comparisons never depend on the case of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSet {
    letters: FxHashSet<char>,
}

impl LetterSet {
    /// Build a set from raw characters, folding each to lower case
    ///
    /// Duplicates collapse silently and empty input yields an empty set.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// let set = LetterSet::normalize("HeLlo");
    /// assert_eq!(set.len(), 4);
    /// assert!(set.contains('h'));
    /// assert!(set.contains('L'));
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self::from_chars(raw.chars())
    }

    /// Build a set from any character iterator, folding each to lower case
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let letters = chars.into_iter().flat_map(char::to_lowercase).collect();
        Self { letters }
    }

    /// Combine two sets
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            letters: self.letters.union(&other.letters).copied().collect(),
        }
    }

    /// Check membership, ignoring the case of `letter`
    ///
    /// A letter whose lower-case form spans several characters is present
    /// only if every one of them is.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        letter.to_lowercase().all(|c| self.letters.contains(&c))
    }

    /// True when every member of `other` is also in `self`
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.letters.is_superset(&other.letters)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterate the members in no particular order
    pub fn iter(&self) -> Copied<hash_set::Iter<'_, char>> {
        self.letters.iter().copied()
    }

    /// Members in ascending order, for stable display
    #[must_use]
    pub fn sorted(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.iter().collect();
        letters.sort_unstable();
        letters
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}

impl<'a> IntoIterator for &'a LetterSet {
    type Item = char;
    type IntoIter = Copied<hash_set::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.sorted() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
