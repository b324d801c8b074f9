use std::sync::Arc;

use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::QuizSession,
        dto::{
            request::{GenerateQuizRequest, SelectAnswerRequest},
            response::{GradeResponse, QuizResponse},
        },
    },
    repositories::SessionRepository,
    services::{
        extractor_service::{truncate_chars, TextExtractor},
        generator_service::QuestionGenerator,
        quiz_parser::parse_quiz_data,
    },
};

/// Runs the upload → extract → generate → parse pipeline and owns the
/// session lifecycle that follows it.
pub struct QuizService {
    extractor: Arc<dyn TextExtractor>,
    generator: Arc<dyn QuestionGenerator>,
    repository: Arc<dyn SessionRepository>,
    max_source_chars: usize,
}

impl QuizService {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        generator: Arc<dyn QuestionGenerator>,
        repository: Arc<dyn SessionRepository>,
        max_source_chars: usize,
    ) -> Self {
        Self {
            extractor,
            generator,
            repository,
            max_source_chars,
        }
    }

    pub async fn create_quiz(&self, request: GenerateQuizRequest) -> AppResult<QuizResponse> {
        let session = self.build_session(Uuid::new_v4(), request).await?;
        let session = self.repository.create(session).await?;

        log::info!("Created quiz session {}", session.id());
        Ok(QuizResponse::from(&session))
    }

    /// Generate a new quiz under an existing session id, discarding the old
    /// questions, options, selections and grade together.
    pub async fn regenerate_quiz(
        &self,
        id: &Uuid,
        request: GenerateQuizRequest,
    ) -> AppResult<QuizResponse> {
        self.get_session(id).await?;

        let session = self.build_session(*id, request).await?;
        let session = self.repository.replace(session).await?;

        log::info!("Regenerated quiz session {}", id);
        Ok(QuizResponse::from(&session))
    }

    pub async fn get_quiz(&self, id: &Uuid) -> AppResult<QuizResponse> {
        let session = self.get_session(id).await?;
        Ok(QuizResponse::from(&session))
    }

    pub async fn select_answer(
        &self,
        id: &Uuid,
        question_index: usize,
        request: SelectAnswerRequest,
    ) -> AppResult<QuizResponse> {
        let selection = request.selected_index;
        let session = self
            .repository
            .update(
                id,
                Box::new(move |session: &mut QuizSession| {
                    session.select(question_index, selection)
                }),
            )
            .await?;

        Ok(QuizResponse::from(&session))
    }

    pub async fn submit_quiz(&self, id: &Uuid) -> AppResult<GradeResponse> {
        let session = self
            .repository
            .update(
                id,
                Box::new(|session: &mut QuizSession| {
                    session.grade();
                    Ok(())
                }),
            )
            .await?;

        let response = GradeResponse::from_session(&session)
            .ok_or_else(|| AppError::InternalError("Graded session has no attempt".to_string()))?;

        log::info!(
            "Graded quiz session {}: {}/{}",
            id,
            response.score,
            response.total
        );
        Ok(response)
    }

    pub async fn delete_quiz(&self, id: &Uuid) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("Deleted quiz session {}", id);
        Ok(())
    }

    async fn get_session(&self, id: &Uuid) -> AppResult<QuizSession> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz session '{}' not found", id)))
    }

    async fn build_session(&self, id: Uuid, request: GenerateQuizRequest) -> AppResult<QuizSession> {
        request.validate()?;

        let text = self.extract_text(request.document).await?;
        let text = truncate_chars(&text, self.max_source_chars);

        let raw = self.generator.generate(text, &request.credential).await?;
        let questions = parse_quiz_data(&raw).inspect_err(|e| {
            log::warn!("Rejected generator output for session {}: {}", id, e);
        })?;

        let mut rng = rand::thread_rng();
        Ok(QuizSession::generate(id, questions, &mut rng))
    }

    async fn extract_text(&self, document: Vec<u8>) -> AppResult<String> {
        let extractor = Arc::clone(&self.extractor);

        tokio::task::spawn_blocking(move || extractor.extract(&document))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    AppError::Extraction("The document could not be read".to_string())
                } else {
                    AppError::InternalError(format!("Extraction task failed: {}", e))
                }
            })?
    }
}
