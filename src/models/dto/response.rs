use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::quiz_attempt::{Feedback, ReviewEntry};
use crate::models::domain::QuizSession;
use crate::services::scoring_service::ScoringService;

/// One question as the quiz form shows it. Correct answers are not exposed.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected_index: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStatus {
    Generated,
    Graded,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub id: Uuid,
    pub status: QuizStatus,
    pub question_count: usize,
    pub questions: Vec<QuestionView>,
    pub created_at: DateTime<Utc>,
}

impl From<&QuizSession> for QuizResponse {
    fn from(session: &QuizSession) -> Self {
        let questions = session
            .questions()
            .iter()
            .zip(session.shuffled_options())
            .zip(session.selected_index())
            .enumerate()
            .map(|(index, ((question, options), selected))| QuestionView {
                index,
                prompt: question.prompt().to_string(),
                options: options.to_vec(),
                selected_index: *selected,
            })
            .collect();

        QuizResponse {
            id: session.id(),
            status: if session.last_attempt().is_some() {
                QuizStatus::Graded
            } else {
                QuizStatus::Generated
            },
            question_count: session.question_count(),
            questions,
            created_at: session.created_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeResponse {
    pub id: Uuid,
    pub score: usize,
    pub total: usize,
    pub incorrect_count: usize,
    pub feedback: Feedback,
    pub review: Vec<ReviewEntry>,
    pub graded_at: DateTime<Utc>,
}

impl GradeResponse {
    /// Build the response from the session's latest attempt, if it has one.
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        let attempt = session.last_attempt()?;

        Some(GradeResponse {
            id: session.id(),
            score: attempt.score,
            total: attempt.total,
            incorrect_count: attempt.incorrect_count(),
            feedback: ScoringService::feedback(attempt),
            review: ScoringService::review(session.questions(), attempt),
            graded_at: attempt.graded_at,
        })
    }
}
