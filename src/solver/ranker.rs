//! Result ranking
//!
//! Filters a raw word list down to the valid words and orders them by
//! ascending score, breaking ties by the raw word text.

use super::scorer::{is_pangram, word_score};
use super::validator::{filter_words, is_valid_word};
use crate::core::LetterSet;
use log::debug;
use rayon::prelude::*;
use std::cmp::Ordering;

/// A valid word together with its points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
    pub pangram: bool,
}

impl ScoredWord {
    fn new(word: &str, all_letters: &LetterSet) -> Self {
        Self {
            word: word.to_string(),
            score: word_score(word, all_letters),
            pangram: is_pangram(word, all_letters),
        }
    }

    /// Ranking order: score first, then the word as given
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Ranks candidate words for one puzzle
///
/// The parallel mode spreads the filter and score pass over rayon's pool.
/// Both modes produce identical output since the ranking order is total.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    parallel: bool,
}

impl Ranker {
    #[must_use]
    pub const fn new(parallel: bool) -> Self {
        Self { parallel }
    }

    #[must_use]
    pub const fn sequential() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub const fn parallel() -> Self {
        Self::new(true)
    }

    #[inline]
    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Filter, score and order `words`
    ///
    /// Invalid words are dropped silently; an empty result is not an error.
    #[must_use]
    pub fn rank_scored<S: AsRef<str> + Sync>(
        &self,
        words: &[S],
        required: &LetterSet,
        extra: &LetterSet,
    ) -> Vec<ScoredWord> {
        let all_letters = required.union(extra);

        let scored: Vec<ScoredWord> = if self.parallel {
            let mut scored: Vec<ScoredWord> = words
                .par_iter()
                .map(AsRef::<str>::as_ref)
                .filter(|word| is_valid_word(word, required, extra))
                .map(|word| ScoredWord::new(word, &all_letters))
                .collect();
            scored.par_sort_by(ScoredWord::rank_cmp);
            scored
        } else {
            let mut scored: Vec<ScoredWord> = filter_words(words, required, extra)
                .into_iter()
                .map(|word| ScoredWord::new(word, &all_letters))
                .collect();
            scored.sort_by(ScoredWord::rank_cmp);
            scored
        };

        debug!(
            "ranked {} of {} candidate words ({} pangrams)",
            scored.len(),
            words.len(),
            scored.iter().filter(|s| s.pangram).count()
        );

        scored
    }

    /// Like `rank_scored`, returning only the words
    #[must_use]
    pub fn rank<S: AsRef<str> + Sync>(
        &self,
        words: &[S],
        required: &LetterSet,
        extra: &LetterSet,
    ) -> Vec<String> {
        self.rank_scored(words, required, extra)
            .into_iter()
            .map(|scored| scored.word)
            .collect()
    }
}

/// Rank `words` sequentially
///
/// # Examples
/// ```
/// use spelling_bee::core::LetterSet;
/// use spelling_bee::solver::rank;
///
/// let required = LetterSet::normalize("f");
/// let extra = LetterSet::normalize("tpayec");
/// let words = ["effect", "face", "grommet", "facet"];
///
/// assert_eq!(rank(&words, &required, &extra), ["face", "facet", "effect"]);
/// ```
#[must_use]
pub fn rank<S: AsRef<str> + Sync>(
    words: &[S],
    required: &LetterSet,
    extra: &LetterSet,
) -> Vec<String> {
    Ranker::sequential().rank(words, required, extra)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "face",
        "facet",
        "effect",
        "catface",
        "caffeate",
        "affectate",
        "faced",
        "grommet",
        "clicker",
    ];

    fn puzzle_sets() -> (LetterSet, LetterSet) {
        (LetterSet::normalize("f"), LetterSet::normalize("tpayec"))
    }

    #[test]
    fn ranks_the_example_puzzle() {
        let (required, extra) = puzzle_sets();
        assert_eq!(
            rank(WORDS, &required, &extra),
            ["face", "facet", "effect", "catface", "caffeate", "affectate"]
        );
    }

    #[test]
    fn scored_entries_carry_points() {
        let (required, extra) = puzzle_sets();
        let scores: Vec<u32> = Ranker::sequential()
            .rank_scored(WORDS, &required, &extra)
            .iter()
            .map(|s| s.score)
            .collect();
        assert_eq!(scores, [1, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn input_order_does_not_matter() {
        let (required, extra) = puzzle_sets();
        let mut reversed = WORDS.to_vec();
        reversed.reverse();
        assert_eq!(
            rank(&reversed, &required, &extra),
            rank(WORDS, &required, &extra)
        );
    }

    #[test]
    fn ties_break_alphabetically() {
        let (required, extra) = puzzle_sets();
        let words = ["feet", "cafe", "face", "fate"];
        assert_eq!(
            rank(&words, &required, &extra),
            ["cafe", "face", "fate", "feet"]
        );
    }

    #[test]
    fn tie_break_uses_raw_case() {
        let (required, extra) = puzzle_sets();
        let words = ["face", "Fate", "cafe"];
        // 'F' sorts before lowercase letters
        assert_eq!(rank(&words, &required, &extra), ["Fate", "cafe", "face"]);
    }

    #[test]
    fn pangrams_rank_by_bonus_score() {
        let (required, extra) = puzzle_sets();
        let words = ["ftpayecpay", "affectate", "ftpayec", "face"];
        let ranked = Ranker::sequential().rank_scored(&words, &required, &extra);
        let order: Vec<&str> = ranked.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(order, ["face", "affectate", "ftpayec", "ftpayecpay"]);
        assert!(ranked[2].pangram && ranked[3].pangram);
        assert!(!ranked[0].pangram);
    }

    #[test]
    fn output_is_totally_ordered() {
        let (required, extra) = puzzle_sets();
        let words = [
            "tape", "Face", "effect", "fete", "cafe", "typeface", "feat", "pacey", "affect",
        ];
        let ranked = Ranker::sequential().rank_scored(&words, &required, &extra);
        for pair in ranked.windows(2) {
            assert!(pair[0].score <= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(pair[0].word <= pair[1].word);
            }
        }
    }

    #[test]
    fn ranks_exactly_the_filtered_words() {
        let (required, extra) = puzzle_sets();
        for ranker in [Ranker::sequential(), Ranker::parallel()] {
            let mut ranked = ranker.rank(WORDS, &required, &extra);
            let mut filtered: Vec<String> = filter_words(WORDS, &required, &extra)
                .into_iter()
                .map(String::from)
                .collect();
            ranked.sort();
            filtered.sort();
            assert_eq!(ranked, filtered);
        }
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let (required, extra) = puzzle_sets();
        let words: [&str; 0] = [];
        assert!(rank(&words, &required, &extra).is_empty());
    }

    #[test]
    fn too_short_words_give_empty_output() {
        let (required, extra) = puzzle_sets();
        assert!(rank(&["abc"], &required, &extra).is_empty());
    }

    #[test]
    fn parallel_matches_sequential() {
        let (required, extra) = puzzle_sets();
        let mut words: Vec<String> = WORDS.iter().map(ToString::to_string).collect();
        words.extend(["feat", "cafe", "Face", "typeface", "ftpayec"].map(String::from));
        assert_eq!(
            Ranker::parallel().rank_scored(&words, &required, &extra),
            Ranker::sequential().rank_scored(&words, &required, &extra)
        );
        assert!(Ranker::parallel().is_parallel());
        assert!(!Ranker::default().is_parallel());
    }
}
