// src/services/people_service.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        profile::{Student, Teacher, Tutor},
        user::User,
    },
};
use sqlx::SqlitePool;

pub async fn find_user(db_pool: &SqlitePool, user_id: i64) -> AppResult<Option<User>> {
    tracing::debug!("Fetching user {}", user_id);
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, is_student, is_teacher, is_tutor, date_joined
        FROM users
        WHERE id = ?1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db_pool)
    .await?;

    if user.is_some() {
        tracing::debug!("User {} found.", user_id);
    } else {
        tracing::debug!("User {} not found.", user_id);
    }
    Ok(user)
}

/// Deletes a user; its profile and everything hanging off it go too.
pub async fn delete_user(db_pool: &SqlitePool, user_id: i64) -> AppResult<()> {
    tracing::info!("Deleting user {}", user_id);
    delete_by_id(db_pool, "users", user_id).await
}

pub async fn find_teacher(db_pool: &SqlitePool, teacher_id: i64) -> AppResult<Option<Teacher>> {
    tracing::debug!("Fetching teacher {}", teacher_id);
    let teacher = sqlx::query_as::<_, Teacher>(
        r#"
        SELECT id, user_id, name, email, role, education, company, experience
        FROM teachers
        WHERE id = ?1
        "#,
    )
    .bind(teacher_id)
    .fetch_optional(db_pool)
    .await?;
    Ok(teacher)
}

pub async fn find_student(db_pool: &SqlitePool, student_id: i64) -> AppResult<Option<Student>> {
    tracing::debug!("Fetching student {}", student_id);
    let student = sqlx::query_as::<_, Student>("SELECT id, user_id, name, email FROM students WHERE id = ?1")
        .bind(student_id)
        .fetch_optional(db_pool)
        .await?;
    Ok(student)
}

pub async fn find_tutor(db_pool: &SqlitePool, tutor_id: i64) -> AppResult<Option<Tutor>> {
    tracing::debug!("Fetching tutor {}", tutor_id);
    let tutor = sqlx::query_as::<_, Tutor>("SELECT id, user_id, name, email, education FROM tutors WHERE id = ?1")
        .bind(tutor_id)
        .fetch_optional(db_pool)
        .await?;
    Ok(tutor)
}

/// The teacher's lessons stay, with `teacher_id` cleared.
pub async fn delete_teacher(db_pool: &SqlitePool, teacher_id: i64) -> AppResult<()> {
    tracing::info!("Deleting teacher {}", teacher_id);
    delete_by_id(db_pool, "teachers", teacher_id).await
}

pub async fn delete_student(db_pool: &SqlitePool, student_id: i64) -> AppResult<()> {
    tracing::info!("Deleting student {}", student_id);
    delete_by_id(db_pool, "students", student_id).await
}

pub async fn delete_tutor(db_pool: &SqlitePool, tutor_id: i64) -> AppResult<()> {
    tracing::info!("Deleting tutor {}", tutor_id);
    delete_by_id(db_pool, "tutors", tutor_id).await
}

async fn delete_by_id(db_pool: &SqlitePool, table: &'static str, id: i64) -> AppResult<()> {
    let sql = format!("DELETE FROM {} WHERE id = ?1", table);
    let rows_affected = sqlx::query(&sql)
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Delete failed: {} row {} not found.", table, id);
        Err(AppError::NotFound)
    } else {
        tracing::info!("✅ Deleted {} row {}.", table, id);
        Ok(())
    }
}
