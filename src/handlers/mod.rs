pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

pub use health_handler::health_check;
pub use quiz_handler::{
    create_quiz, delete_quiz, get_quiz, regenerate_quiz, select_answer, submit_quiz,
    API_KEY_HEADER,
};

/// Register every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(create_quiz)
        .service(get_quiz)
        .service(select_answer)
        .service(submit_quiz)
        .service(regenerate_quiz)
        .service(delete_quiz);
}
