// src/web/registration_handlers.rs
use crate::{
    error::AppResult,
    models::registration::{SignUp, StudentSignUp, TeacherSignUp, TutorSignUp},
    services::registration_service,
    state::AppState,
    web::extract::AppJson,
};
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Registered {
    pub user_id: i64,
}

async fn register(state: &AppState, signup: SignUp) -> AppResult<(StatusCode, Json<Registered>)> {
    let user_id = registration_service::register(&state.db_pool, signup, state.bcrypt_cost).await?;
    Ok((StatusCode::CREATED, Json(Registered { user_id })))
}

/// POST /signup/student
pub async fn handle_student_signup(
    State(state): State<AppState>,
    AppJson(form): AppJson<StudentSignUp>,
) -> AppResult<(StatusCode, Json<Registered>)> {
    tracing::info!("POST /signup/student: {}", form.username);
    register(&state, SignUp::Student(form)).await
}

/// POST /signup/teacher
pub async fn handle_teacher_signup(
    State(state): State<AppState>,
    AppJson(form): AppJson<TeacherSignUp>,
) -> AppResult<(StatusCode, Json<Registered>)> {
    tracing::info!("POST /signup/teacher: {}", form.username);
    register(&state, SignUp::Teacher(form)).await
}

/// POST /signup/tutor
pub async fn handle_tutor_signup(
    State(state): State<AppState>,
    AppJson(form): AppJson<TutorSignUp>,
) -> AppResult<(StatusCode, Json<Registered>)> {
    tracing::info!("POST /signup/tutor: {}", form.username);
    register(&state, SignUp::Tutor(form)).await
}
