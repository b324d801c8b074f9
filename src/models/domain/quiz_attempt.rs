use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of grading every question of a session once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizAttempt {
    pub score: usize,
    pub total: usize,
    pub question_results: Vec<QuestionResult>,
    pub graded_at: DateTime<Utc>,
}

impl QuizAttempt {
    pub fn incorrect_count(&self) -> usize {
        self.total - self.score
    }

    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionResult {
    pub question_index: usize,
    pub selected_value: Option<String>,
    pub correct_value: String,
    pub is_correct: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Celebration,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub summary: String,
    pub message: String,
}

/// A question the user got wrong, as shown after grading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReviewEntry {
    pub question_number: usize,
    pub prompt: String,
    pub your_answer: Option<String>,
    pub correct_answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_attempt(score: usize, total: usize) -> QuizAttempt {
        QuizAttempt {
            score,
            total,
            question_results: vec![],
            graded_at: Utc::now(),
        }
    }

    #[test]
    fn quiz_attempt_counts_incorrect_questions() {
        let attempt = make_attempt(3, 5);

        assert_eq!(attempt.incorrect_count(), 2);
        assert!(!attempt.is_perfect());
    }

    #[test]
    fn quiz_attempt_detects_perfect_score() {
        assert!(make_attempt(5, 5).is_perfect());
    }

    #[test]
    fn feedback_kind_serializes_lowercase() {
        let json = serde_json::to_string(&FeedbackKind::Celebration).expect("kind should serialize");
        assert_eq!(json, "\"celebration\"");
    }
}
