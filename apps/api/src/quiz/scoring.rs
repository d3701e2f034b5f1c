//! Answer tally and dominant-category selection.
//!
//! Pure functions over a caller-owned `AnswerSet` and the injected `QuestionBank`.

use serde::Serialize;
use tracing::debug;

use crate::quiz::bank::QuestionBank;
use crate::quiz::models::{AnswerSet, Category, CategoryTally};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizScore {
    pub tally: CategoryTally,
    pub dominant: Category,
}

/// Counts one answer per answered question against that question's category.
/// Unanswered questions contribute nothing; positions the bank does not know are skipped.
pub fn tally_answers(answers: &AnswerSet, bank: &QuestionBank) -> CategoryTally {
    let mut tally = CategoryTally::default();
    for position in answers.question_indices() {
        match bank.category_of(position) {
            Some(category) => tally.increment(category),
            None => debug!("Ignoring answer for unknown question position {position}"),
        }
    }
    tally
}

/// Highest-count category. The current winner is only replaced when strictly
/// exceeded, so ties resolve to the earliest category in `Category::ALL`.
pub fn dominant_category(tally: &CategoryTally) -> Category {
    let [first, rest @ ..] = Category::ALL;
    rest.into_iter().fold(first, |winner, candidate| {
        if tally.get(candidate) > tally.get(winner) {
            candidate
        } else {
            winner
        }
    })
}

pub fn score_answers(answers: &AnswerSet, bank: &QuestionBank) -> QuizScore {
    let tally = tally_answers(answers, bank);
    QuizScore {
        tally,
        dominant: dominant_category(&tally),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::recommendation::lookup_recommendation;
    use crate::quiz::recommendation::RecommendationKey;

    fn answers(pairs: &[(usize, i64)]) -> AnswerSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_reference_answers_pick_spatial() {
        let bank = QuestionBank::aptitude();
        let score = score_answers(&answers(&[(0, 0), (1, 0), (2, 2), (3, 0), (4, 2)]), &bank);

        assert_eq!(
            score.tally,
            CategoryTally {
                logical: 1,
                verbal: 1,
                numerical: 1,
                spatial: 2,
            }
        );
        assert_eq!(score.dominant, Category::Spatial);

        let record = lookup_recommendation(&RecommendationKey::Category(score.dominant));
        assert_eq!(record.stream, "Creative & Design");
    }

    #[test]
    fn test_empty_answers_pick_first_canonical_category() {
        let score = score_answers(&AnswerSet::new(), &QuestionBank::aptitude());
        assert_eq!(score.tally, CategoryTally::default());
        assert_eq!(score.dominant, Category::Logical);
    }

    #[test]
    fn test_partial_answers_only_count_answered_questions() {
        let score = score_answers(&answers(&[(1, 3), (3, 1)]), &QuestionBank::aptitude());
        assert_eq!(score.tally.total(), 2);
        assert_eq!(score.tally.verbal, 1);
        assert_eq!(score.tally.numerical, 1);
        // verbal precedes numerical in canonical order
        assert_eq!(score.dominant, Category::Verbal);
    }

    #[test]
    fn test_out_of_range_option_still_counts() {
        let score = score_answers(&answers(&[(0, 42), (1, -1)]), &QuestionBank::aptitude());
        assert_eq!(score.tally.logical, 1);
        assert_eq!(score.tally.verbal, 1);
    }

    #[test]
    fn test_unknown_question_position_is_ignored() {
        let score = score_answers(&answers(&[(2, 0), (9, 0)]), &QuestionBank::aptitude());
        assert_eq!(score.tally.total(), 1);
        assert_eq!(score.dominant, Category::Spatial);
    }

    #[test]
    fn test_category_comes_from_question_not_option() {
        use crate::quiz::models::Question;
        let numeric = Question {
            id: 1,
            prompt: "Pick one",
            options: ["a", "b", "c", "d"],
            category: Category::Numerical,
        };
        let bank = QuestionBank::new(vec![numeric.clone(), numeric]);
        let score = score_answers(&answers(&[(0, 0), (1, 3)]), &bank);
        assert_eq!(score.tally.numerical, 2);
        assert_eq!(score.dominant, Category::Numerical);
    }

    #[test]
    fn test_tie_keeps_earlier_category() {
        let tally = CategoryTally {
            logical: 0,
            verbal: 2,
            numerical: 2,
            spatial: 2,
        };
        assert_eq!(dominant_category(&tally), Category::Verbal);
    }

    #[test]
    fn test_strictly_greater_later_category_wins() {
        let tally = CategoryTally {
            logical: 1,
            verbal: 1,
            numerical: 3,
            spatial: 2,
        };
        assert_eq!(dominant_category(&tally), Category::Numerical);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_full_answer_set_tallies_to_bank_size(options in proptest::collection::vec(-5i64..10, 5)) {
            let bank = QuestionBank::aptitude();
            let answers: AnswerSet = options.into_iter().enumerate().collect();
            let tally = tally_answers(&answers, &bank);
            prop_assert_eq!(tally.total(), 5);
        }

        #[test]
        fn prop_scoring_is_idempotent(
            pairs in proptest::collection::btree_map(0usize..8, 0i64..4, 0..8)
        ) {
            let bank = QuestionBank::aptitude();
            let answers: AnswerSet = pairs.into_iter().collect();
            let first = score_answers(&answers, &bank);
            let second = score_answers(&answers, &bank);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_dominant_has_maximum_count(
            logical in 0u32..6, verbal in 0u32..6, numerical in 0u32..6, spatial in 0u32..6
        ) {
            let tally = CategoryTally { logical, verbal, numerical, spatial };
            let dominant = dominant_category(&tally);
            let max = Category::ALL.iter().map(|c| tally.get(*c)).max().unwrap_or(0);
            prop_assert_eq!(tally.get(dominant), max);
            for earlier in Category::ALL.iter().take_while(|c| **c != dominant) {
                prop_assert!(tally.get(*earlier) < max);
            }
        }
    }
}
