use chrono::Utc;

use crate::models::domain::quiz_attempt::{
    Feedback, FeedbackKind, QuestionResult, QuizAttempt, ReviewEntry,
};
use crate::models::domain::QuestionRecord;

pub struct ScoringService;

impl ScoringService {
    /// Grade every question by comparing the selected value with the stored
    /// correct value. Unanswered or out-of-range selections count as wrong.
    pub fn grade<O: AsRef<[String]>>(
        shuffled_options: &[O],
        selected_index: &[Option<usize>],
        correct_answer_values: &[String],
    ) -> QuizAttempt {
        let question_results: Vec<QuestionResult> = shuffled_options
            .iter()
            .zip(correct_answer_values)
            .enumerate()
            .map(|(question_index, (options, correct_value))| {
                let selected_value = selected_index
                    .get(question_index)
                    .copied()
                    .flatten()
                    .and_then(|idx| options.as_ref().get(idx))
                    .cloned();
                let is_correct = selected_value.as_deref() == Some(correct_value.as_str());

                QuestionResult {
                    question_index,
                    selected_value,
                    correct_value: correct_value.clone(),
                    is_correct,
                }
            })
            .collect();

        let score = question_results.iter().filter(|r| r.is_correct).count();

        QuizAttempt {
            score,
            total: question_results.len(),
            question_results,
            graded_at: Utc::now(),
        }
    }

    pub fn feedback(attempt: &QuizAttempt) -> Feedback {
        let summary = format!("Your score: {}/{}", attempt.score, attempt.total);

        if attempt.is_perfect() {
            return Feedback {
                kind: FeedbackKind::Celebration,
                summary,
                message: "Perfect score! You answered every question correctly.".to_string(),
            };
        }

        let message = match attempt.incorrect_count() {
            1 => "Almost perfect! You got 1 question wrong. Let's review it:".to_string(),
            n => format!(
                "Almost there! You got {} questions wrong. Let's review them:",
                n
            ),
        };

        Feedback {
            kind: FeedbackKind::Warning,
            summary,
            message,
        }
    }

    /// Project the incorrect questions of an attempt for review.
    pub fn review(questions: &[QuestionRecord], attempt: &QuizAttempt) -> Vec<ReviewEntry> {
        attempt
            .question_results
            .iter()
            .filter(|result| !result.is_correct)
            .filter_map(|result| {
                questions.get(result.question_index).map(|question| ReviewEntry {
                    question_number: result.question_index + 1,
                    prompt: question.prompt().to_string(),
                    your_answer: result.selected_value.clone(),
                    correct_answer: result.correct_value.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(correct: &str, a: &str, b: &str) -> [String; 3] {
        [a.to_string(), correct.to_string(), b.to_string()]
    }

    fn five_questions() -> (Vec<[String; 3]>, Vec<String>) {
        let shuffled = vec![
            options("A1", "B1", "C1"),
            options("A2", "B2", "C2"),
            options("A3", "B3", "C3"),
            options("A4", "B4", "C4"),
            options("A5", "B5", "C5"),
        ];
        let correct = (1..=5).map(|i| format!("A{}", i)).collect();
        (shuffled, correct)
    }

    fn records() -> Vec<QuestionRecord> {
        (1..=5)
            .map(|i| {
                QuestionRecord::new(
                    format!("Question {}?", i),
                    format!("A{}", i),
                    format!("B{}", i),
                    format!("C{}", i),
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn grade_counts_matching_values() {
        let (shuffled, correct) = five_questions();
        // correct value sits at index 1 of every shuffled list
        let selected = vec![Some(1), Some(1), Some(0), Some(1), Some(2)];

        let attempt = ScoringService::grade(&shuffled, &selected, &correct);

        assert_eq!(attempt.score, 3);
        assert_eq!(attempt.total, 5);
        let flags: Vec<bool> = attempt.question_results.iter().map(|r| r.is_correct).collect();
        assert_eq!(flags, vec![true, true, false, true, false]);
    }

    #[test]
    fn grade_treats_unanswered_and_out_of_range_as_incorrect() {
        let (shuffled, correct) = five_questions();
        let selected = vec![None, Some(7), Some(1), Some(1), Some(1)];

        let attempt = ScoringService::grade(&shuffled, &selected, &correct);

        assert_eq!(attempt.score, 3);
        assert_eq!(attempt.question_results[0].selected_value, None);
        assert_eq!(attempt.question_results[1].selected_value, None);
        assert!(!attempt.question_results[0].is_correct);
    }

    #[test]
    fn grade_treats_default_index_on_wrong_option_as_incorrect() {
        let (shuffled, correct) = five_questions();
        let selected = vec![Some(0); 5];

        let attempt = ScoringService::grade(&shuffled, &selected, &correct);

        assert_eq!(attempt.score, 0);
        assert_eq!(attempt.question_results[0].selected_value.as_deref(), Some("B1"));
    }

    #[test]
    fn feedback_celebrates_perfect_score() {
        let (shuffled, correct) = five_questions();
        let attempt = ScoringService::grade(&shuffled, &[Some(1); 5], &correct);

        let feedback = ScoringService::feedback(&attempt);

        assert_eq!(feedback.kind, FeedbackKind::Celebration);
        assert_eq!(feedback.summary, "Your score: 5/5");
    }

    #[test]
    fn feedback_uses_singular_wording_for_one_wrong_answer() {
        let (shuffled, correct) = five_questions();
        let selected = vec![Some(1), Some(1), Some(1), Some(1), Some(0)];
        let attempt = ScoringService::grade(&shuffled, &selected, &correct);

        let feedback = ScoringService::feedback(&attempt);

        assert_eq!(feedback.kind, FeedbackKind::Warning);
        assert_eq!(
            feedback.message,
            "Almost perfect! You got 1 question wrong. Let's review it:"
        );
    }

    #[test]
    fn feedback_uses_plural_wording_for_several_wrong_answers() {
        let (shuffled, correct) = five_questions();
        let selected = vec![Some(1), Some(0), Some(1), Some(1), Some(0)];
        let attempt = ScoringService::grade(&shuffled, &selected, &correct);

        let feedback = ScoringService::feedback(&attempt);

        assert_eq!(feedback.kind, FeedbackKind::Warning);
        assert_eq!(
            feedback.message,
            "Almost there! You got 2 questions wrong. Let's review them:"
        );
        assert_eq!(feedback.summary, "Your score: 3/5");
    }

    #[test]
    fn review_lists_only_incorrect_questions() {
        let (shuffled, correct) = five_questions();
        let selected = vec![Some(1), None, Some(1), Some(2), Some(1)];
        let attempt = ScoringService::grade(&shuffled, &selected, &correct);

        let review = ScoringService::review(&records(), &attempt);

        assert_eq!(review.len(), 2);
        assert_eq!(review[0].question_number, 2);
        assert_eq!(review[0].prompt, "Question 2?");
        assert_eq!(review[0].your_answer, None);
        assert_eq!(review[0].correct_answer, "A2");
        assert_eq!(review[1].question_number, 4);
        assert_eq!(review[1].your_answer.as_deref(), Some("C4"));
    }
}
