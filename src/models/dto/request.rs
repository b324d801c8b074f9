use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::constants::OPTION_COUNT;
use crate::errors::{AppError, AppResult};

pub const MISSING_DOCUMENT_MESSAGE: &str = "Please provide a valid PDF document";
pub const MISSING_API_KEY_MESSAGE: &str = "Please fill out the OpenAI API Key to proceed. If you don't have one, you can obtain it at https://platform.openai.com/account/api-keys";

/// Inputs for generating a quiz: the uploaded document and the credential
/// passed through to the model provider.
pub struct GenerateQuizRequest {
    pub document: Vec<u8>,
    pub credential: SecretString,
}

impl GenerateQuizRequest {
    pub fn new(document: impl Into<Vec<u8>>, credential: Option<&str>) -> Self {
        Self {
            document: document.into(),
            credential: SecretString::from(credential.unwrap_or_default().trim().to_string()),
        }
    }

    /// The document is checked before the key, matching the order users fill the form.
    pub fn validate(&self) -> AppResult<()> {
        if self.document.is_empty() {
            return Err(AppError::ValidationError(MISSING_DOCUMENT_MESSAGE.to_string()));
        }
        if self.credential.expose_secret().is_empty() {
            return Err(AppError::ValidationError(MISSING_API_KEY_MESSAGE.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SelectAnswerRequest {
    #[validate(custom(function = "validate_option_index"))]
    pub selected_index: Option<usize>,
}

fn validate_option_index(index: usize) -> Result<(), ValidationError> {
    if index >= OPTION_COUNT {
        let mut error = ValidationError::new("range");
        error.message = Some(format!("must be less than {}", OPTION_COUNT).into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_requires_document_first() {
        let request = GenerateQuizRequest::new(Vec::new(), None);

        match request.validate() {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, MISSING_DOCUMENT_MESSAGE),
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn generate_request_requires_api_key() {
        let request = GenerateQuizRequest::new(b"%PDF".to_vec(), Some("   "));

        match request.validate() {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, MISSING_API_KEY_MESSAGE),
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn generate_request_trims_credential() {
        let request = GenerateQuizRequest::new(b"%PDF".to_vec(), Some(" sk-test \n"));

        assert!(request.validate().is_ok());
        assert_eq!(request.credential.expose_secret(), "sk-test");
    }

    #[test]
    fn select_answer_request_validates_range() {
        let ok: SelectAnswerRequest = serde_json::from_str(r#"{"selected_index": 2}"#).unwrap();
        assert!(ok.validate().is_ok());

        let cleared: SelectAnswerRequest = serde_json::from_str(r#"{"selected_index": null}"#).unwrap();
        assert!(cleared.validate().is_ok());

        let last = SelectAnswerRequest {
            selected_index: Some(OPTION_COUNT - 1),
        };
        assert!(last.validate().is_ok());

        let bad = SelectAnswerRequest {
            selected_index: Some(OPTION_COUNT),
        };
        assert!(bad.validate().is_err());
    }
}
