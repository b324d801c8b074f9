use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{InMemorySessionRepository, SessionRepository},
    services::{
        extractor_service::{PdfTextExtractor, TextExtractor},
        generator_service::{OpenAiQuestionGenerator, QuestionGenerator},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let extractor = Arc::new(PdfTextExtractor);
        let generator = Arc::new(OpenAiQuestionGenerator::new(client, &config));
        let repository = Arc::new(InMemorySessionRepository::with_limits(
            Duration::from_secs(config.session_ttl_seconds),
            config.max_sessions,
        ));

        Ok(Self::with_components(config, extractor, generator, repository))
    }

    /// Build the state around caller-supplied collaborators.
    pub fn with_components(
        config: Config,
        extractor: Arc<dyn TextExtractor>,
        generator: Arc<dyn QuestionGenerator>,
        repository: Arc<dyn SessionRepository>,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(
            extractor,
            generator,
            repository,
            config.max_source_chars,
        ));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
