pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{chat, quiz, recommendation, resume, users};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Account API
        .route("/api/v1/users", post(users::handlers::handle_register))
        .route(
            "/api/v1/users/profile",
            get(users::handlers::handle_get_user_profile)
                .put(users::handlers::handle_setup_profile),
        )
        // Resume API
        .route(
            "/api/v1/resumes/upload",
            post(resume::handlers::handle_upload_resume),
        )
        .route(
            "/api/v1/resumes",
            get(resume::handlers::handle_get_resume_detail),
        )
        // Quiz API
        .route("/api/v1/quiz", post(quiz::handlers::handle_create_quiz))
        .route(
            "/api/v1/quiz/:quiz_id/answer",
            post(quiz::handlers::handle_answer_question),
        )
        .route(
            "/api/v1/quiz/answers",
            get(quiz::handlers::handle_quiz_answers),
        )
        .route(
            "/api/v1/quiz/next-question",
            post(quiz::handlers::handle_next_question),
        )
        // Recommendation API
        .route(
            "/api/v1/recommendations",
            post(recommendation::handlers::handle_generate_recommendation)
                .get(recommendation::handlers::handle_get_recommendation),
        )
        // Advisor chat
        .route("/api/v1/chat", post(chat::handlers::handle_chat))
        .with_state(state)
}
