// tests/common/mod.rs
#![allow(dead_code)]

use schoolsite::{
    models::{
        course::{Course, CourseForm},
        registration::{SignUp, StudentSignUp, TeacherSignUp, TutorSignUp},
    },
    services::{course_service, registration_service},
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

pub const TEST_COST: u32 = schoolsite::config::MIN_BCRYPT_COST;

/// Fresh in-memory database with the schema applied. A single connection
/// keeps every query on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to create database");
    schoolsite::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

pub async fn course(pool: &SqlitePool, name: &str, price: i64, duration: i64) -> Course {
    course_service::create_course(
        pool,
        CourseForm {
            name: name.to_string(),
            description: format!("{} from scratch", name),
            duration,
            price,
        },
    )
    .await
    .expect("Failed to create course")
}

pub fn student_form(username: &str, name: &str, courses: Vec<i64>) -> StudentSignUp {
    StudentSignUp {
        username: username.to_string(),
        password: "s3cret-pass".to_string(),
        password_confirmation: "s3cret-pass".to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", username),
        courses,
    }
}

pub fn teacher_form(username: &str, name: &str, company: &str, courses: Vec<i64>) -> TeacherSignUp {
    TeacherSignUp {
        username: username.to_string(),
        password: "s3cret-pass".to_string(),
        password_confirmation: "s3cret-pass".to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", username),
        education: "Moscow State University".to_string(),
        company: company.to_string(),
        experience: 5,
        role: "lecturer".to_string(),
        courses,
    }
}

pub fn tutor_form(username: &str, name: &str, education: &str, courses: Vec<i64>) -> TutorSignUp {
    TutorSignUp {
        username: username.to_string(),
        password: "s3cret-pass".to_string(),
        password_confirmation: "s3cret-pass".to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", username),
        education: education.to_string(),
        courses,
    }
}

/// Registers a student and returns its profile id.
pub async fn student(pool: &SqlitePool, username: &str, name: &str, courses: Vec<i64>) -> i64 {
    let user_id = registration_service::register(
        pool,
        SignUp::Student(student_form(username, name, courses)),
        TEST_COST,
    )
    .await
    .expect("Failed to register student");
    profile_id(pool, "students", user_id).await
}

pub async fn teacher(pool: &SqlitePool, username: &str, name: &str, company: &str, courses: Vec<i64>) -> i64 {
    let user_id = registration_service::register(
        pool,
        SignUp::Teacher(teacher_form(username, name, company, courses)),
        TEST_COST,
    )
    .await
    .expect("Failed to register teacher");
    profile_id(pool, "teachers", user_id).await
}

pub async fn tutor(pool: &SqlitePool, username: &str, name: &str, education: &str, courses: Vec<i64>) -> i64 {
    let user_id = registration_service::register(
        pool,
        SignUp::Tutor(tutor_form(username, name, education, courses)),
        TEST_COST,
    )
    .await
    .expect("Failed to register tutor");
    profile_id(pool, "tutors", user_id).await
}

pub async fn profile_id(pool: &SqlitePool, table: &str, user_id: i64) -> i64 {
    sqlx::query_scalar(&format!("SELECT id FROM {} WHERE user_id = ?1", table))
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("profile row")
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("count query")
}
