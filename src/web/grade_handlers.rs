// src/web/grade_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::grade::{Grade, GradeScores, RecordScores},
    services::grade_service,
    state::AppState,
    web::extract::AppJson,
};
use axum::extract::{Json, Path, State};

/// PUT /grades - scores for a (course, student) pair
pub async fn handle_record_scores(
    State(state): State<AppState>,
    AppJson(request): AppJson<RecordScores>,
) -> AppResult<Json<Grade>> {
    let grade = grade_service::record_scores(&state.db_pool, request).await?;
    Ok(Json(grade))
}

/// GET /grades/{id}
pub async fn show_grade(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Grade>> {
    grade_service::find_grade(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// PUT /grades/{id}
pub async fn handle_update_grade(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(scores): AppJson<GradeScores>,
) -> AppResult<Json<Grade>> {
    let grade = grade_service::update_grade(&state.db_pool, id, scores).await?;
    Ok(Json(grade))
}

/// GET /students/{id}/grades
pub async fn list_student_grades(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> AppResult<Json<Vec<Grade>>> {
    let grades = grade_service::grades_for_student(&state.db_pool, student_id).await?;
    Ok(Json(grades))
}
