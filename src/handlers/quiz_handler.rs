use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{GenerateQuizRequest, SelectAnswerRequest},
};

/// Header carrying the model provider credential.
pub const API_KEY_HEADER: &str = "X-Api-Key";

fn generate_request(req: &HttpRequest, body: web::Bytes) -> GenerateQuizRequest {
    let credential = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    GenerateQuizRequest::new(body.to_vec(), credential)
}

#[post("/api/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let response = state
        .quiz_service
        .create_quiz(generate_request(&req, body))
        .await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[put("/api/quizzes/{id}/answers/{question}")]
pub async fn select_answer(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, usize)>,
    request: web::Json<SelectAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let (id, question) = path.into_inner();
    let request = request.into_inner();
    request.validate()?;

    let quiz = state
        .quiz_service
        .select_answer(&id, question, request)
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/api/quizzes/{id}/submit")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let graded = state.quiz_service.submit_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(graded))
}

#[post("/api/quizzes/{id}/regenerate")]
pub async fn regenerate_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .regenerate_quiz(&id, generate_request(&req, body))
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/api/quizzes/{id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete_quiz(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
