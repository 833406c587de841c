// src/services/grade_service.rs
use crate::{
    error::{AppError, AppResult},
    models::grade::{compute_final_mark, Grade, GradeScores, RecordScores},
    services::row_exists,
};
use sqlx::{SqliteConnection, SqlitePool};
use validator::Validate;

const GRADE_COLUMNS: &str = "id, course_id, student_id, homework1, homework2, project, final_mark";

/// Creates the ungraded row that links a student to a course. A student
/// already on the course keeps its existing row.
pub(crate) async fn enroll(conn: &mut SqliteConnection, course_id: i64, student_id: i64) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT OR IGNORE INTO grades (course_id, student_id, homework1, homework2, project, final_mark)
        VALUES (?1, ?2, NULL, NULL, NULL, ?3)
        "#,
    )
    .bind(course_id)
    .bind(student_id)
    .bind(compute_final_mark(None, None, None))
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// Single write path for scores: recomputes the final mark, then persists.
async fn write_scores(conn: &mut SqliteConnection, grade: &mut Grade) -> AppResult<()> {
    grade.normalize();
    sqlx::query(
        r#"
        UPDATE grades
        SET homework1 = ?1, homework2 = ?2, project = ?3, final_mark = ?4
        WHERE id = ?5
        "#,
    )
    .bind(grade.homework1)
    .bind(grade.homework2)
    .bind(grade.project)
    .bind(grade.final_mark)
    .bind(grade.id)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

async fn fetch_for_pair(
    conn: &mut SqliteConnection,
    course_id: i64,
    student_id: i64,
) -> AppResult<Option<Grade>> {
    let sql = format!("SELECT {} FROM grades WHERE course_id = ?1 AND student_id = ?2", GRADE_COLUMNS);
    let grade = sqlx::query_as::<_, Grade>(&sql)
        .bind(course_id)
        .bind(student_id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(grade)
}

/// Sets the scores of a student on a course, enrolling the student first if
/// needed. Returns the stored row.
pub async fn record_scores(db_pool: &SqlitePool, request: RecordScores) -> AppResult<Grade> {
    tracing::info!(
        "Recording scores for student {} on course {}: {:?}",
        request.student_id,
        request.course_id,
        request.scores
    );
    request.scores.validate()?;

    let mut tx = db_pool.begin().await?;

    let mut grade = match fetch_for_pair(&mut *tx, request.course_id, request.student_id).await? {
        Some(grade) => grade,
        None => {
            if !row_exists(&mut *tx, "courses", request.course_id).await? {
                return Err(AppError::UnknownCourse(request.course_id));
            }
            if !row_exists(&mut *tx, "students", request.student_id).await? {
                return Err(AppError::UnknownReference("Student", request.student_id));
            }
            enroll(&mut *tx, request.course_id, request.student_id).await?;
            fetch_for_pair(&mut *tx, request.course_id, request.student_id)
                .await?
                .ok_or(AppError::InternalServerError)?
        }
    };

    grade.apply(&request.scores);
    write_scores(&mut *tx, &mut grade).await?;

    tx.commit().await?;
    tracing::info!("✅ Grade {} saved (final mark {:?}).", grade.id, grade.final_mark);
    Ok(grade)
}

/// Replaces the scores of an existing grade row.
pub async fn update_grade(db_pool: &SqlitePool, grade_id: i64, scores: GradeScores) -> AppResult<Grade> {
    tracing::info!("Updating grade {}: {:?}", grade_id, scores);
    scores.validate()?;

    let mut tx = db_pool.begin().await?;
    let sql = format!("SELECT {} FROM grades WHERE id = ?1", GRADE_COLUMNS);
    let mut grade = sqlx::query_as::<_, Grade>(&sql)
        .bind(grade_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotFound)?;

    grade.apply(&scores);
    write_scores(&mut *tx, &mut grade).await?;
    tx.commit().await?;

    tracing::info!("✅ Grade {} updated (final mark {:?}).", grade.id, grade.final_mark);
    Ok(grade)
}

pub async fn find_grade(db_pool: &SqlitePool, grade_id: i64) -> AppResult<Option<Grade>> {
    tracing::debug!("Fetching grade {}", grade_id);
    let sql = format!("SELECT {} FROM grades WHERE id = ?1", GRADE_COLUMNS);
    let grade = sqlx::query_as::<_, Grade>(&sql)
        .bind(grade_id)
        .fetch_optional(db_pool)
        .await?;
    Ok(grade)
}

/// Every course a student is on, in course order.
pub async fn grades_for_student(db_pool: &SqlitePool, student_id: i64) -> AppResult<Vec<Grade>> {
    tracing::debug!("Fetching grades for student {}", student_id);
    let sql = format!(
        "SELECT {} FROM grades WHERE student_id = ?1 ORDER BY course_id ASC, id ASC",
        GRADE_COLUMNS
    );
    let grades = sqlx::query_as::<_, Grade>(&sql)
        .bind(student_id)
        .fetch_all(db_pool)
        .await?;
    Ok(grades)
}
