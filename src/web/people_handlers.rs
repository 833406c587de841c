// src/web/people_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        filters::{StudentFilter, TeacherFilter, TutorFilter},
        profile::{Student, Teacher, Tutor},
        user::User,
    },
    services::{filter_service, people_service},
    state::AppState,
    web::extract::AppQuery,
};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};

// --- Teachers ---

/// GET /teachers?name=&company=&course=
pub async fn list_teachers(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<TeacherFilter>,
) -> AppResult<Json<Vec<Teacher>>> {
    let teachers = filter_service::filter_teachers(&state.db_pool, &filter).await?;
    Ok(Json(teachers))
}

pub async fn show_teacher(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Teacher>> {
    people_service::find_teacher(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

pub async fn handle_delete_teacher(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    people_service::delete_teacher(&state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Students ---

/// GET /students?name=&course=&homework1=&homework2=&project=&final_mark=
pub async fn list_students(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<StudentFilter>,
) -> AppResult<Json<Vec<Student>>> {
    let students = filter_service::filter_students(&state.db_pool, &filter).await?;
    Ok(Json(students))
}

pub async fn show_student(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Student>> {
    people_service::find_student(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

pub async fn handle_delete_student(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    people_service::delete_student(&state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Tutors ---

/// GET /tutors?name=&course=&education=
pub async fn list_tutors(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<TutorFilter>,
) -> AppResult<Json<Vec<Tutor>>> {
    let tutors = filter_service::filter_tutors(&state.db_pool, &filter).await?;
    Ok(Json(tutors))
}

pub async fn show_tutor(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Tutor>> {
    people_service::find_tutor(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

pub async fn handle_delete_tutor(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    people_service::delete_tutor(&state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Users ---

pub async fn show_user(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<User>> {
    people_service::find_user(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// DELETE /users/{id} - removes the profile as well
pub async fn handle_delete_user(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    people_service::delete_user(&state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
