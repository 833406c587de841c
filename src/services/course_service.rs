// src/services/course_service.rs
use crate::{
    error::{AppError, AppResult},
    models::course::{Course, CourseForm, Lesson, LessonForm},
    services::{grade_service, row_exists},
};
use sqlx::{SqliteConnection, SqlitePool};
use validator::Validate;

// --- Courses ---

pub async fn create_course(db_pool: &SqlitePool, form: CourseForm) -> AppResult<Course> {
    tracing::info!("Creating course '{}'", form.name);
    let duration = form.check()?;

    let id = sqlx::query("INSERT INTO courses (name, description, duration, price) VALUES (?1, ?2, ?3, ?4)")
        .bind(&form.name)
        .bind(&form.description)
        .bind(duration.months())
        .bind(form.price)
        .execute(db_pool)
        .await?
        .last_insert_rowid();

    tracing::info!("✅ Course '{}' created with id {}.", form.name, id);
    Ok(Course {
        id,
        name: form.name,
        description: form.description,
        duration: duration.months(),
        price: form.price,
    })
}

pub async fn find_course(db_pool: &SqlitePool, course_id: i64) -> AppResult<Option<Course>> {
    tracing::debug!("Fetching course {}", course_id);
    let course = sqlx::query_as::<_, Course>(
        "SELECT id, name, description, duration, price FROM courses WHERE id = ?1",
    )
    .bind(course_id)
    .fetch_optional(db_pool)
    .await?;
    Ok(course)
}

pub async fn update_course(db_pool: &SqlitePool, course_id: i64, form: CourseForm) -> AppResult<Course> {
    tracing::info!("Updating course {}", course_id);
    let duration = form.check()?;

    let rows_affected = sqlx::query(
        r#"
        UPDATE courses
        SET name = ?1, description = ?2, duration = ?3, price = ?4
        WHERE id = ?5
        "#,
    )
    .bind(&form.name)
    .bind(&form.description)
    .bind(duration.months())
    .bind(form.price)
    .bind(course_id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Update failed: course {} not found.", course_id);
        return Err(AppError::NotFound);
    }
    tracing::info!("✅ Course {} updated.", course_id);
    Ok(Course {
        id: course_id,
        name: form.name,
        description: form.description,
        duration: duration.months(),
        price: form.price,
    })
}

/// Removes a course together with its lessons, staffing and grades.
pub async fn delete_course(db_pool: &SqlitePool, course_id: i64) -> AppResult<()> {
    tracing::info!("Deleting course {}", course_id);
    let rows_affected = sqlx::query("DELETE FROM courses WHERE id = ?1")
        .bind(course_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Delete failed: course {} not found.", course_id);
        return Err(AppError::NotFound);
    }
    tracing::info!("✅ Course {} deleted.", course_id);
    Ok(())
}

// --- Staffing and enrollment ---

async fn require_course(conn: &mut SqliteConnection, course_id: i64) -> AppResult<()> {
    if row_exists(conn, "courses", course_id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound)
    }
}

pub async fn assign_teacher(db_pool: &SqlitePool, course_id: i64, teacher_id: i64) -> AppResult<()> {
    tracing::info!("Assigning teacher {} to course {}", teacher_id, course_id);
    let mut tx = db_pool.begin().await?;
    require_course(&mut *tx, course_id).await?;
    if !row_exists(&mut *tx, "teachers", teacher_id).await? {
        return Err(AppError::UnknownReference("Teacher", teacher_id));
    }
    sqlx::query("INSERT OR IGNORE INTO course_teachers (course_id, teacher_id) VALUES (?1, ?2)")
        .bind(course_id)
        .bind(teacher_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}

pub async fn assign_tutor(db_pool: &SqlitePool, course_id: i64, tutor_id: i64) -> AppResult<()> {
    tracing::info!("Assigning tutor {} to course {}", tutor_id, course_id);
    let mut tx = db_pool.begin().await?;
    require_course(&mut *tx, course_id).await?;
    if !row_exists(&mut *tx, "tutors", tutor_id).await? {
        return Err(AppError::UnknownReference("Tutor", tutor_id));
    }
    sqlx::query("INSERT OR IGNORE INTO course_tutors (course_id, tutor_id) VALUES (?1, ?2)")
        .bind(course_id)
        .bind(tutor_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}

pub async fn enroll_student(db_pool: &SqlitePool, course_id: i64, student_id: i64) -> AppResult<()> {
    tracing::info!("Enrolling student {} on course {}", student_id, course_id);
    let mut tx = db_pool.begin().await?;
    require_course(&mut *tx, course_id).await?;
    if !row_exists(&mut *tx, "students", student_id).await? {
        return Err(AppError::UnknownReference("Student", student_id));
    }
    grade_service::enroll(&mut *tx, course_id, student_id).await?;
    tx.commit().await?;
    Ok(())
}

// --- Lessons ---

const LESSON_COLUMNS: &str = "id, title, course_id, teacher_id, link";

async fn check_lesson_refs(conn: &mut SqliteConnection, form: &LessonForm) -> AppResult<()> {
    if !row_exists(conn, "courses", form.course_id).await? {
        return Err(AppError::UnknownCourse(form.course_id));
    }
    if let Some(teacher_id) = form.teacher_id {
        if !row_exists(conn, "teachers", teacher_id).await? {
            return Err(AppError::UnknownReference("Teacher", teacher_id));
        }
    }
    Ok(())
}

pub async fn create_lesson(db_pool: &SqlitePool, form: LessonForm) -> AppResult<Lesson> {
    tracing::info!("Creating lesson '{}' on course {}", form.title, form.course_id);
    form.validate()?;

    let mut tx = db_pool.begin().await?;
    check_lesson_refs(&mut *tx, &form).await?;
    let id = sqlx::query("INSERT INTO lessons (title, course_id, teacher_id, link) VALUES (?1, ?2, ?3, ?4)")
        .bind(&form.title)
        .bind(form.course_id)
        .bind(form.teacher_id)
        .bind(&form.link)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();
    tx.commit().await?;

    tracing::info!("✅ Lesson {} created.", id);
    Ok(Lesson {
        id,
        title: form.title,
        course_id: form.course_id,
        teacher_id: form.teacher_id,
        link: form.link,
    })
}

pub async fn find_lesson(db_pool: &SqlitePool, lesson_id: i64) -> AppResult<Option<Lesson>> {
    tracing::debug!("Fetching lesson {}", lesson_id);
    let sql = format!("SELECT {} FROM lessons WHERE id = ?1", LESSON_COLUMNS);
    let lesson = sqlx::query_as::<_, Lesson>(&sql)
        .bind(lesson_id)
        .fetch_optional(db_pool)
        .await?;
    Ok(lesson)
}

pub async fn update_lesson(db_pool: &SqlitePool, lesson_id: i64, form: LessonForm) -> AppResult<Lesson> {
    tracing::info!("Updating lesson {}", lesson_id);
    form.validate()?;

    let mut tx = db_pool.begin().await?;
    if !row_exists(&mut *tx, "lessons", lesson_id).await? {
        tracing::warn!("Update failed: lesson {} not found.", lesson_id);
        return Err(AppError::NotFound);
    }
    check_lesson_refs(&mut *tx, &form).await?;
    sqlx::query(
        r#"
        UPDATE lessons
        SET title = ?1, course_id = ?2, teacher_id = ?3, link = ?4
        WHERE id = ?5
        "#,
    )
    .bind(&form.title)
    .bind(form.course_id)
    .bind(form.teacher_id)
    .bind(&form.link)
    .bind(lesson_id)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    Ok(Lesson {
        id: lesson_id,
        title: form.title,
        course_id: form.course_id,
        teacher_id: form.teacher_id,
        link: form.link,
    })
}

pub async fn delete_lesson(db_pool: &SqlitePool, lesson_id: i64) -> AppResult<()> {
    tracing::info!("Deleting lesson {}", lesson_id);
    let rows_affected = sqlx::query("DELETE FROM lessons WHERE id = ?1")
        .bind(lesson_id)
        .execute(db_pool)
        .await?
        .rows_affected();
    if rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

pub async fn lessons_for_course(db_pool: &SqlitePool, course_id: i64) -> AppResult<Vec<Lesson>> {
    tracing::debug!("Fetching lessons for course {}", course_id);
    let sql = format!(
        "SELECT {} FROM lessons WHERE course_id = ?1 ORDER BY id ASC",
        LESSON_COLUMNS
    );
    let lessons = sqlx::query_as::<_, Lesson>(&sql)
        .bind(course_id)
        .fetch_all(db_pool)
        .await?;
    Ok(lessons)
}
