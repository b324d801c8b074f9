use crate::constants::QUESTION_COUNT;
use crate::errors::{AppError, AppResult};
use crate::models::domain::QuestionRecord;

/// Decode the generator's raw output into exactly `QUESTION_COUNT` records.
///
/// The input must be a JSON array of `[question, correct, distractor,
/// distractor]` string arrays. Anything else fails the whole parse.
pub fn parse_quiz_data(raw: &str) -> AppResult<Vec<QuestionRecord>> {
    let rows: Vec<[String; 4]> = serde_json::from_str(raw.trim())?;

    if rows.len() != QUESTION_COUNT {
        return Err(AppError::MalformedQuizData(format!(
            "expected {} questions, got {}",
            QUESTION_COUNT,
            rows.len()
        )));
    }

    rows.into_iter()
        .enumerate()
        .map(|(i, [prompt, correct, first, second])| {
            QuestionRecord::new(prompt, correct, first, second).map_err(|err| match err {
                AppError::MalformedQuizData(msg) => {
                    AppError::MalformedQuizData(format!("question {}: {}", i + 1, msg))
                }
                other => other,
            })
        })
        .collect()
}
