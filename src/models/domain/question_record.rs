use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// One generated question with its correct answer and two distractors.
///
/// Fields are private so a record cannot change after it has been validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    prompt: String,
    correct_answer: String,
    distractor_1: String,
    distractor_2: String,
}

impl QuestionRecord {
    /// Builds a record, rejecting empty fields and repeated answers.
    pub fn new(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        distractor_1: impl Into<String>,
        distractor_2: impl Into<String>,
    ) -> AppResult<Self> {
        let record = Self {
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            distractor_1: distractor_1.into(),
            distractor_2: distractor_2.into(),
        };

        let fields = [
            ("question", &record.prompt),
            ("correct answer", &record.correct_answer),
            ("first distractor", &record.distractor_1),
            ("second distractor", &record.distractor_2),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AppError::MalformedQuizData(format!("{} is empty", name)));
        }

        let answers = record.answers().map(|answer| answer.trim().to_lowercase());
        if answers[0] == answers[1] || answers[0] == answers[2] || answers[1] == answers[2] {
            return Err(AppError::MalformedQuizData(format!(
                "answers for \"{}\" are not distinct",
                record.prompt
            )));
        }

        Ok(record)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn distractors(&self) -> [&str; 2] {
        [&self.distractor_1, &self.distractor_2]
    }

    /// The three answers with the correct one first.
    pub fn answers(&self) -> [&str; 3] {
        [&self.correct_answer, &self.distractor_1, &self.distractor_2]
    }
}
