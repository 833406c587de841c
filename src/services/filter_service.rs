// src/services/filter_service.rs
//! Read-only list views. Each function turns a filter struct into one SQL
//! query; supplied criteria are ANDed, substring checks use `instr` so they
//! stay case-sensitive.
use crate::{
    error::{AppError, AppResult},
    models::{
        course::{Course, CourseDuration, Lesson},
        filters::{CourseFilter, LessonFilter, StudentFilter, TeacherFilter, TutorFilter},
        profile::{Student, Teacher, Tutor},
    },
};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

fn push_contains(qb: &mut QueryBuilder<'_, Sqlite>, column: &str, needle: &str) {
    qb.push(" AND instr(")
        .push(column)
        .push(", ")
        .push_bind(needle.to_owned())
        .push(") > 0");
}

pub async fn filter_courses(db_pool: &SqlitePool, filter: &CourseFilter) -> AppResult<Vec<Course>> {
    tracing::debug!("Filtering courses: {:?}", filter);

    let mut qb = QueryBuilder::<Sqlite>::new(
        "SELECT c.id, c.name, c.description, c.duration, c.price FROM courses c WHERE 1 = 1",
    );
    if let Some(name) = &filter.name {
        push_contains(&mut qb, "c.name", name);
    }
    if let Some(price) = filter.price {
        qb.push(" AND c.price = ").push_bind(price);
    }
    if let Some(months) = filter.duration {
        let duration = CourseDuration::try_from(months).map_err(|e| {
            let mut errors = validator::ValidationErrors::new();
            errors.add("duration", e);
            AppError::Validation(errors)
        })?;
        qb.push(" AND c.duration = ").push_bind(duration.months());
    }
    qb.push(" ORDER BY c.id ASC");

    let courses = qb.build_query_as::<Course>().fetch_all(db_pool).await?;
    tracing::debug!("{} course(s) matched.", courses.len());
    Ok(courses)
}

pub async fn filter_teachers(db_pool: &SqlitePool, filter: &TeacherFilter) -> AppResult<Vec<Teacher>> {
    tracing::debug!("Filtering teachers: {:?}", filter);

    let mut qb = QueryBuilder::<Sqlite>::new(
        r#"
        SELECT t.id, t.user_id, t.name, t.email, t.role, t.education, t.company, t.experience
        FROM teachers t
        WHERE 1 = 1
        "#,
    );
    if let Some(name) = &filter.name {
        push_contains(&mut qb, "t.name", name);
    }
    if let Some(company) = &filter.company {
        qb.push(" AND t.company = ").push_bind(company.clone());
    }
    if let Some(course) = &filter.course {
        qb.push(
            " AND EXISTS (SELECT 1 FROM course_teachers ct JOIN courses c ON c.id = ct.course_id \
             WHERE ct.teacher_id = t.id",
        );
        push_contains(&mut qb, "c.name", course);
        qb.push(")");
    }
    qb.push(" ORDER BY t.name ASC, t.id ASC");

    let teachers = qb.build_query_as::<Teacher>().fetch_all(db_pool).await?;
    tracing::debug!("{} teacher(s) matched.", teachers.len());
    Ok(teachers)
}

pub async fn filter_students(db_pool: &SqlitePool, filter: &StudentFilter) -> AppResult<Vec<Student>> {
    tracing::debug!("Filtering students: {:?}", filter);

    let mut qb = QueryBuilder::<Sqlite>::new("SELECT s.id, s.user_id, s.name, s.email FROM students s WHERE 1 = 1");
    if let Some(name) = &filter.name {
        push_contains(&mut qb, "s.name", name);
    }

    // Course and score criteria must all hold for the same grade row.
    if filter.touches_grades() {
        qb.push(
            " AND EXISTS (SELECT 1 FROM grades g JOIN courses c ON c.id = g.course_id \
             WHERE g.student_id = s.id",
        );
        if let Some(course) = &filter.course {
            push_contains(&mut qb, "c.name", course);
        }
        if let Some(score) = filter.homework1 {
            qb.push(" AND g.homework1 = ").push_bind(score);
        }
        if let Some(score) = filter.homework2 {
            qb.push(" AND g.homework2 = ").push_bind(score);
        }
        if let Some(score) = filter.project {
            qb.push(" AND g.project = ").push_bind(score);
        }
        if let Some(mark) = filter.final_mark {
            qb.push(" AND g.final_mark = ").push_bind(mark);
        }
        qb.push(")");
    }
    qb.push(" ORDER BY s.name ASC, s.id ASC");

    let students = qb.build_query_as::<Student>().fetch_all(db_pool).await?;
    tracing::debug!("{} student(s) matched.", students.len());
    Ok(students)
}

pub async fn filter_tutors(db_pool: &SqlitePool, filter: &TutorFilter) -> AppResult<Vec<Tutor>> {
    tracing::debug!("Filtering tutors: {:?}", filter);

    let mut qb = QueryBuilder::<Sqlite>::new(
        "SELECT tu.id, tu.user_id, tu.name, tu.email, tu.education FROM tutors tu WHERE 1 = 1",
    );
    if let Some(name) = &filter.name {
        push_contains(&mut qb, "tu.name", name);
    }
    if let Some(education) = &filter.education {
        push_contains(&mut qb, "tu.education", education);
    }
    if let Some(course) = &filter.course {
        qb.push(
            " AND EXISTS (SELECT 1 FROM course_tutors ct JOIN courses c ON c.id = ct.course_id \
             WHERE ct.tutor_id = tu.id",
        );
        push_contains(&mut qb, "c.name", course);
        qb.push(")");
    }
    qb.push(" ORDER BY tu.name ASC, tu.id ASC");

    let tutors = qb.build_query_as::<Tutor>().fetch_all(db_pool).await?;
    tracing::debug!("{} tutor(s) matched.", tutors.len());
    Ok(tutors)
}

pub async fn filter_lessons(db_pool: &SqlitePool, filter: &LessonFilter) -> AppResult<Vec<Lesson>> {
    tracing::debug!("Filtering lessons: {:?}", filter);

    let mut qb = QueryBuilder::<Sqlite>::new(
        r#"
        SELECT l.id, l.title, l.course_id, l.teacher_id, l.link
        FROM lessons l
        JOIN courses c ON c.id = l.course_id
        LEFT JOIN teachers t ON t.id = l.teacher_id
        WHERE 1 = 1
        "#,
    );
    if let Some(title) = &filter.title {
        push_contains(&mut qb, "l.title", title);
    }
    // instr(NULL, ..) is NULL, so lessons without a teacher drop out here
    if let Some(teacher) = &filter.teacher {
        push_contains(&mut qb, "t.name", teacher);
    }
    if let Some(course) = &filter.course {
        push_contains(&mut qb, "c.name", course);
    }
    qb.push(" ORDER BY l.course_id ASC, l.id ASC");

    let lessons = qb.build_query_as::<Lesson>().fetch_all(db_pool).await?;
    tracing::debug!("{} lesson(s) matched.", lessons.len());
    Ok(lessons)
}
