use rand::{seq::SliceRandom, Rng};

use crate::constants::OPTION_COUNT;
use crate::models::domain::QuestionRecord;

/// Shuffles a question's answers and returns them with the correct value.
///
/// The correct value is read from the record's `correct_answer` field before
/// shuffling, so graders compare by value and never by position.
pub fn randomize_options<R: Rng + ?Sized>(
    record: &QuestionRecord,
    rng: &mut R,
) -> ([String; OPTION_COUNT], String) {
    let correct_value = record.correct_answer().to_string();
    let mut options = record.answers().map(str::to_string);
    options.shuffle(rng);
    (options, correct_value)
}
