pub mod question_record;
pub mod quiz_attempt;
pub mod quiz_session;

pub use question_record::QuestionRecord;
pub use quiz_attempt::QuizAttempt;
pub use quiz_session::QuizSession;
