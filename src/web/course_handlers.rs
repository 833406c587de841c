// src/web/course_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        course::{Course, CourseForm, Lesson, LessonForm},
        filters::{CourseFilter, LessonFilter},
    },
    services::{course_service, filter_service},
    state::AppState,
    web::extract::{AppJson, AppQuery},
};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};

// --- Courses ---

/// GET /courses?name=&price=&duration=
pub async fn list_courses(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<CourseFilter>,
) -> AppResult<Json<Vec<Course>>> {
    let courses = filter_service::filter_courses(&state.db_pool, &filter).await?;
    Ok(Json(courses))
}

/// POST /courses
pub async fn handle_create_course(
    State(state): State<AppState>,
    AppJson(form): AppJson<CourseForm>,
) -> AppResult<(StatusCode, Json<Course>)> {
    let course = course_service::create_course(&state.db_pool, form).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /courses/{id}
pub async fn show_course(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Course>> {
    course_service::find_course(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// PUT /courses/{id}
pub async fn handle_update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(form): AppJson<CourseForm>,
) -> AppResult<Json<Course>> {
    let course = course_service::update_course(&state.db_pool, id, form).await?;
    Ok(Json(course))
}

/// DELETE /courses/{id}
pub async fn handle_delete_course(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    course_service::delete_course(&state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /courses/{id}/teachers/{teacher_id}
pub async fn handle_assign_teacher(
    State(state): State<AppState>,
    Path((course_id, teacher_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    course_service::assign_teacher(&state.db_pool, course_id, teacher_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /courses/{id}/tutors/{tutor_id}
pub async fn handle_assign_tutor(
    State(state): State<AppState>,
    Path((course_id, tutor_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    course_service::assign_tutor(&state.db_pool, course_id, tutor_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /courses/{id}/students/{student_id}
pub async fn handle_enroll_student(
    State(state): State<AppState>,
    Path((course_id, student_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    course_service::enroll_student(&state.db_pool, course_id, student_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /courses/{id}/lessons
pub async fn list_course_lessons(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Lesson>>> {
    if course_service::find_course(&state.db_pool, id).await?.is_none() {
        return Err(AppError::NotFound);
    }
    let lessons = course_service::lessons_for_course(&state.db_pool, id).await?;
    Ok(Json(lessons))
}

// --- Lessons ---

/// GET /lessons?title=&teacher=&course=
pub async fn list_lessons(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<LessonFilter>,
) -> AppResult<Json<Vec<Lesson>>> {
    let lessons = filter_service::filter_lessons(&state.db_pool, &filter).await?;
    Ok(Json(lessons))
}

/// POST /lessons
pub async fn handle_create_lesson(
    State(state): State<AppState>,
    AppJson(form): AppJson<LessonForm>,
) -> AppResult<(StatusCode, Json<Lesson>)> {
    let lesson = course_service::create_lesson(&state.db_pool, form).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

/// GET /lessons/{id}
pub async fn show_lesson(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Lesson>> {
    course_service::find_lesson(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// PUT /lessons/{id}
pub async fn handle_update_lesson(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(form): AppJson<LessonForm>,
) -> AppResult<Json<Lesson>> {
    let lesson = course_service::update_lesson(&state.db_pool, id, form).await?;
    Ok(Json(lesson))
}

/// DELETE /lessons/{id}
pub async fn handle_delete_lesson(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    course_service::delete_lesson(&state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
