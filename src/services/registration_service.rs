// src/services/registration_service.rs
use crate::{
    error::{AppError, AppResult},
    models::registration::SignUp,
    services::{auth_service, grade_service, row_exists},
};
use sqlx::{SqliteConnection, SqlitePool};

const USERNAME_TAKEN: &str = "A user with that username already exists.";

/// Registers a user together with its role profile and course links.
///
/// Validation runs before anything touches the database. The user row, the
/// profile row and every course association are then written in a single
/// transaction, so a failure at any step leaves no trace.
pub async fn register(db_pool: &SqlitePool, signup: SignUp, bcrypt_cost: u32) -> AppResult<i64> {
    let role = signup.role();
    tracing::info!("Registering {} '{}'", role.as_str(), signup.username());

    // 1. Field validation
    signup.validate()?;

    // 2. Hash before opening the transaction
    let password_hash = auth_service::hash_password(signup.password(), bcrypt_cost).await?;

    let mut tx = db_pool.begin().await?;

    // 3. Base user
    let taken: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1)")
        .bind(signup.username())
        .fetch_one(&mut *tx)
        .await?;
    if taken {
        tracing::warn!("Registration failed: username '{}' already exists.", signup.username());
        tx.rollback().await?;
        return Err(AppError::field("username", "unique", USERNAME_TAKEN));
    }

    let insert_sql = format!(
        "INSERT INTO users (username, password_hash, {}) VALUES (?1, ?2, 1)",
        role.flag_column()
    );
    let insert_user_result = sqlx::query(&insert_sql)
        .bind(signup.username())
        .bind(&password_hash)
        .execute(&mut *tx)
        .await;

    // A concurrent registration can still win the race on the UNIQUE index
    if let Err(sqlx::Error::Database(db_err)) = &insert_user_result {
        if db_err.is_unique_violation() {
            tracing::warn!("Registration failed: username '{}' already exists.", signup.username());
            tx.rollback().await?;
            return Err(AppError::field("username", "unique", USERNAME_TAKEN));
        }
    }
    let user_id = insert_user_result?.last_insert_rowid();

    // 4. Profile + 5. course associations
    let course_ids = signup.course_ids();
    match &signup {
        SignUp::Student(form) => {
            let student_id = sqlx::query("INSERT INTO students (user_id, name, email) VALUES (?1, ?2, ?3)")
                .bind(user_id)
                .bind(&form.name)
                .bind(&form.email)
                .execute(&mut *tx)
                .await?
                .last_insert_rowid();

            for course_id in &course_ids {
                ensure_course(&mut *tx, *course_id).await?;
                grade_service::enroll(&mut *tx, *course_id, student_id).await?;
            }
        }
        SignUp::Teacher(form) => {
            let teacher_id = sqlx::query(
                r#"
                INSERT INTO teachers (user_id, name, email, role, education, company, experience)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
            )
            .bind(user_id)
            .bind(&form.name)
            .bind(&form.email)
            .bind(&form.role)
            .bind(&form.education)
            .bind(&form.company)
            .bind(form.experience)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

            for course_id in &course_ids {
                ensure_course(&mut *tx, *course_id).await?;
                sqlx::query("INSERT OR IGNORE INTO course_teachers (course_id, teacher_id) VALUES (?1, ?2)")
                    .bind(course_id)
                    .bind(teacher_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }
        SignUp::Tutor(form) => {
            let tutor_id = sqlx::query("INSERT INTO tutors (user_id, name, email, education) VALUES (?1, ?2, ?3, ?4)")
                .bind(user_id)
                .bind(&form.name)
                .bind(&form.email)
                .bind(&form.education)
                .execute(&mut *tx)
                .await?
                .last_insert_rowid();

            for course_id in &course_ids {
                ensure_course(&mut *tx, *course_id).await?;
                sqlx::query("INSERT OR IGNORE INTO course_tutors (course_id, tutor_id) VALUES (?1, ?2)")
                    .bind(course_id)
                    .bind(tutor_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }
    }

    tx.commit().await?;
    tracing::info!(
        "✅ User '{}' (id {}) registered as {} with {} course(s).",
        signup.username(),
        user_id,
        role.as_str(),
        course_ids.len()
    );
    Ok(user_id)
}

/// Referential check for a selected course. The caller's transaction is
/// dropped (rolled back) when this fails.
async fn ensure_course(conn: &mut SqliteConnection, course_id: i64) -> AppResult<()> {
    if row_exists(conn, "courses", course_id).await? {
        Ok(())
    } else {
        tracing::warn!("Registration failed: course {} does not exist.", course_id);
        Err(AppError::UnknownCourse(course_id))
    }
}
