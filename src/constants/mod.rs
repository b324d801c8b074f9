pub mod quiz_prompt;

pub use quiz_prompt::{OPTION_COUNT, QUESTION_COUNT, QUIZ_GENERATION_PROMPT};
