// src/web/routes.rs
use crate::{
    state::AppState,
    web::{course_handlers, grade_handlers, home_handlers, people_handlers, registration_handlers},
};
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Registration ---
    let signup_routes = Router::new()
        .route("/student", post(registration_handlers::handle_student_signup))
        .route("/teacher", post(registration_handlers::handle_teacher_signup))
        .route("/tutor", post(registration_handlers::handle_tutor_signup));

    // --- Catalog ---
    let course_routes = Router::new()
        .route("/", get(course_handlers::list_courses).post(course_handlers::handle_create_course))
        .route(
            "/{id}",
            get(course_handlers::show_course)
                .put(course_handlers::handle_update_course)
                .delete(course_handlers::handle_delete_course),
        )
        .route("/{id}/lessons", get(course_handlers::list_course_lessons))
        .route("/{id}/teachers/{teacher_id}", post(course_handlers::handle_assign_teacher))
        .route("/{id}/tutors/{tutor_id}", post(course_handlers::handle_assign_tutor))
        .route("/{id}/students/{student_id}", post(course_handlers::handle_enroll_student));

    let lesson_routes = Router::new()
        .route("/", get(course_handlers::list_lessons).post(course_handlers::handle_create_lesson))
        .route(
            "/{id}",
            get(course_handlers::show_lesson)
                .put(course_handlers::handle_update_lesson)
                .delete(course_handlers::handle_delete_lesson),
        );

    // --- People ---
    let people_routes = Router::new()
        .route("/teachers", get(people_handlers::list_teachers))
        .route(
            "/teachers/{id}",
            get(people_handlers::show_teacher).delete(people_handlers::handle_delete_teacher),
        )
        .route("/students", get(people_handlers::list_students))
        .route(
            "/students/{id}",
            get(people_handlers::show_student).delete(people_handlers::handle_delete_student),
        )
        .route("/students/{id}/grades", get(grade_handlers::list_student_grades))
        .route("/tutors", get(people_handlers::list_tutors))
        .route(
            "/tutors/{id}",
            get(people_handlers::show_tutor).delete(people_handlers::handle_delete_tutor),
        )
        .route(
            "/users/{id}",
            get(people_handlers::show_user).delete(people_handlers::handle_delete_user),
        );

    // --- Grades ---
    let grade_routes = Router::new()
        .route("/", put(grade_handlers::handle_record_scores))
        .route(
            "/{id}",
            get(grade_handlers::show_grade).put(grade_handlers::handle_update_grade),
        );

    // --- Final router ---
    Router::new()
        .route("/health", get(home_handlers::health))
        .route("/stats", get(home_handlers::show_stats))
        .nest("/signup", signup_routes)
        .nest("/courses", course_routes)
        .nest("/lessons", lesson_routes)
        .nest("/grades", grade_routes)
        .merge(people_routes)
        .with_state(app_state)
}
