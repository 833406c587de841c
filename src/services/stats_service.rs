// src/services/stats_service.rs
use crate::{error::AppResult, models::stats::SchoolStats};
use sqlx::SqlitePool;

/// Counts courses, teachers and students. Recomputed on every call.
pub async fn calc_school_stats(db_pool: &SqlitePool) -> AppResult<SchoolStats> {
    let (courses, teachers, students): (i64, i64, i64) = sqlx::query_as(
        r#"
        SELECT
            (SELECT COUNT(*) FROM courses),
            (SELECT COUNT(*) FROM teachers),
            (SELECT COUNT(*) FROM students)
        "#,
    )
    .fetch_one(db_pool)
    .await?;

    tracing::debug!(
        "School stats: {} course(s), {} teacher(s), {} student(s)",
        courses,
        teachers,
        students
    );
    Ok(SchoolStats {
        courses,
        teachers,
        students,
    })
}
