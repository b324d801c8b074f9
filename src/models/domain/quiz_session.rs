use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::constants::OPTION_COUNT;
use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz_attempt::QuizAttempt;
use crate::models::domain::QuestionRecord;
use crate::services::option_randomizer::randomize_options;
use crate::services::scoring_service::ScoringService;

/// State of one user's quiz, from generation to grading.
///
/// Option order is fixed in [`QuizSession::generate`] and only ever read
/// afterwards. Replacing the questions means building a new session.
#[derive(Clone, Debug)]
pub struct QuizSession {
    id: Uuid,
    questions: Vec<QuestionRecord>,
    shuffled_options: Vec<[String; OPTION_COUNT]>,
    selected_index: Vec<Option<usize>>,
    correct_answer_values: Vec<String>,
    last_attempt: Option<QuizAttempt>,
    created_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn generate<R: Rng + ?Sized>(
        id: Uuid,
        questions: Vec<QuestionRecord>,
        rng: &mut R,
    ) -> Self {
        let (shuffled_options, correct_answer_values): (Vec<_>, Vec<_>) = questions
            .iter()
            .map(|question| randomize_options(question, &mut *rng))
            .unzip();

        Self {
            id,
            selected_index: vec![None; questions.len()],
            questions,
            shuffled_options,
            correct_answer_values,
            last_attempt: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn shuffled_options(&self) -> &[[String; OPTION_COUNT]] {
        &self.shuffled_options
    }

    pub fn selected_index(&self) -> &[Option<usize>] {
        &self.selected_index
    }

    pub fn correct_answer_values(&self) -> &[String] {
        &self.correct_answer_values
    }

    pub fn last_attempt(&self) -> Option<&QuizAttempt> {
        self.last_attempt.as_ref()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Record (or clear, with `None`) the user's choice for one question.
    ///
    /// Any earlier grade is dropped, since it no longer matches the selections.
    pub fn select(&mut self, question_index: usize, selection: Option<usize>) -> AppResult<()> {
        let slot = self.selected_index.get_mut(question_index).ok_or_else(|| {
            AppError::NotFound(format!("Question {} not found", question_index + 1))
        })?;

        if let Some(option_index) = selection {
            if option_index >= OPTION_COUNT {
                return Err(AppError::ValidationError(format!(
                    "Option index {} is out of range (0..{})",
                    option_index, OPTION_COUNT
                )));
            }
        }

        *slot = selection;
        self.last_attempt = None;
        Ok(())
    }

    /// Grade the current selections and remember the result.
    pub fn grade(&mut self) -> &QuizAttempt {
        let attempt = ScoringService::grade(
            &self.shuffled_options,
            &self.selected_index,
            &self.correct_answer_values,
        );
        self.last_attempt.insert(attempt)
    }
}
