//! Quiz state machine: a fixed arena of question slots plus a one-way
//! completed flag.
//!
//! Every quiz is created with exactly `QUESTION_COUNT` empty slots. Answers
//! overwrite slots in place; completion is recomputed after every write as
//! the conjunction of all non-blank answers and can only ever flip to true.
//! All transition checks run before any slot is touched.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Number of question slots in every quiz. Fixed at creation, never resized.
pub const QUESTION_COUNT: usize = 10;

/// One question slot. Both fields are overwritten verbatim when an answer is
/// recorded; content is not validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizSlot {
    pub question: String,
    pub answer: String,
}

/// The slot arena as stored in `quizzes.questions`.
pub type Questions = [QuizSlot; QUESTION_COUNT];

/// Returns a fresh arena of empty slots.
pub fn empty_questions() -> Questions {
    std::array::from_fn(|_| QuizSlot::default())
}

/// True when every slot holds a non-blank answer (whitespace-only counts as
/// unanswered).
pub fn all_answered(questions: &Questions) -> bool {
    questions.iter().all(|slot| !slot.answer.trim().is_empty())
}

/// Records one answer into the arena.
///
/// Rejects writes to a completed quiz and out-of-range indexes before
/// touching any slot. Returns the new completed flag, computed from the full
/// arena in the same step that stored the answer.
pub fn record_answer(
    questions: &mut Questions,
    completed: bool,
    index: i64,
    question: &str,
    answer: &str,
) -> Result<bool, AppError> {
    if completed {
        return Err(AppError::QuizCompleted);
    }
    if index < 0 || index >= QUESTION_COUNT as i64 {
        return Err(AppError::QuestionIndex(index));
    }

    let slot = &mut questions[index as usize];
    slot.question = question.to_string();
    slot.answer = answer.to_string();

    Ok(all_answered(questions))
}

/// Decodes the stored JSONB slot array into the typed arena.
/// A malformed stored arena is an internal fault, not a client error.
pub fn questions_from_value(value: serde_json::Value) -> Result<Questions, AppError> {
    serde_json::from_value(value).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Stored quiz questions are malformed: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered(n: usize) -> Questions {
        let mut questions = empty_questions();
        for slot in questions.iter_mut().take(n) {
            slot.question = "Q".to_string();
            slot.answer = "A".to_string();
        }
        questions
    }

    #[test]
    fn test_empty_questions_has_ten_blank_slots() {
        let questions = empty_questions();
        assert_eq!(questions.len(), QUESTION_COUNT);
        assert!(questions.iter().all(|s| s.question.is_empty() && s.answer.is_empty()));
    }

    #[test]
    fn test_record_answer_fills_slot_without_completing() {
        let mut questions = empty_questions();
        let completed =
            record_answer(&mut questions, false, 0, "Favorite subject?", "Math").unwrap();

        assert!(!completed);
        assert_eq!(questions[0].question, "Favorite subject?");
        assert_eq!(questions[0].answer, "Math");
        assert!(questions[1].answer.is_empty());
    }

    #[test]
    fn test_answer_overwrites_slot_verbatim() {
        let mut questions = empty_questions();
        record_answer(&mut questions, false, 3, "Old question?", "old").unwrap();
        record_answer(&mut questions, false, 3, "New question?", "  new  ").unwrap();

        assert_eq!(questions[3].question, "New question?");
        assert_eq!(questions[3].answer, "  new  ");
    }

    #[test]
    fn test_tenth_answer_completes_in_same_call() {
        let mut questions = answered(9);
        assert!(!all_answered(&questions));

        let completed = record_answer(&mut questions, false, 9, "Last one?", "Done").unwrap();
        assert!(completed);
    }

    #[test]
    fn test_blank_answer_does_not_count_toward_completion() {
        let mut questions = answered(9);
        let completed = record_answer(&mut questions, false, 9, "Last one?", "   ").unwrap();
        assert!(!completed);
    }

    #[test]
    fn test_completed_quiz_rejects_further_answers() {
        let mut questions = answered(QUESTION_COUNT);
        let result = record_answer(&mut questions, true, 0, "Sneaky?", "late");
        assert!(matches!(result, Err(AppError::QuizCompleted)));
        // Gate runs before any write
        assert_eq!(questions[0].question, "Q");
        assert_eq!(questions[0].answer, "A");
    }

    #[test]
    fn test_index_ten_is_out_of_range() {
        let mut questions = empty_questions();
        let result = record_answer(&mut questions, false, 10, "Q", "A");
        assert!(matches!(result, Err(AppError::QuestionIndex(10))));
    }

    #[test]
    fn test_negative_index_is_out_of_range() {
        let mut questions = empty_questions();
        let result = record_answer(&mut questions, false, -1, "Q", "A");
        assert!(matches!(result, Err(AppError::QuestionIndex(-1))));
    }

    #[test]
    fn test_out_of_range_write_leaves_arena_untouched() {
        let mut questions = empty_questions();
        let _ = record_answer(&mut questions, false, 42, "Q", "A");
        assert!(questions.iter().all(|s| s.answer.is_empty()));
    }

    #[test]
    fn test_questions_round_trip_through_json() {
        let questions = answered(4);
        let value = serde_json::to_value(&questions).unwrap();
        let decoded = questions_from_value(value).unwrap();
        assert_eq!(decoded, questions);
    }

    #[test]
    fn test_wrong_length_stored_arena_is_internal_error() {
        let value = serde_json::json!([{"question": "", "answer": ""}]);
        let result = questions_from_value(value);
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
