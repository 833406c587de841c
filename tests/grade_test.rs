// tests/grade_test.rs
mod common;

use common::*;
use schoolsite::{
    error::AppError,
    models::grade::{GradeScores, RecordScores},
    services::grade_service,
};

fn scores(h1: Option<i64>, h2: Option<i64>, p: Option<i64>) -> GradeScores {
    GradeScores {
        homework1: h1,
        homework2: h2,
        project: p,
    }
}

#[tokio::test]
async fn final_mark_appears_once_all_scores_are_set() {
    let pool = test_pool().await;
    let python = course(&pool, "Python Basics", 40_000, 6).await;
    let student_id = student(&pool, "ivan", "Ivan Petrovich", vec![python.id]).await;

    let partial = grade_service::record_scores(
        &pool,
        RecordScores {
            course_id: python.id,
            student_id,
            scores: scores(Some(4), Some(5), None),
        },
    )
    .await
    .unwrap();
    assert_eq!(partial.final_mark, None);

    let full = grade_service::record_scores(
        &pool,
        RecordScores {
            course_id: python.id,
            student_id,
            scores: scores(Some(4), Some(5), Some(3)),
        },
    )
    .await
    .unwrap();
    assert_eq!(full.id, partial.id);
    assert_eq!(full.final_mark, Some(4.0));

    let stored = grade_service::find_grade(&pool, full.id).await.unwrap().unwrap();
    assert_eq!(stored.final_mark, Some(4.0));
    assert_eq!(count(&pool, "grades").await, 1);
}

#[tokio::test]
async fn clearing_a_score_clears_the_final_mark() {
    let pool = test_pool().await;
    let python = course(&pool, "Python Basics", 40_000, 6).await;
    let student_id = student(&pool, "ivan", "Ivan Petrovich", vec![python.id]).await;
    let grade_id = grade_service::grades_for_student(&pool, student_id).await.unwrap()[0].id;

    let graded = grade_service::update_grade(&pool, grade_id, scores(Some(5), Some(5), Some(4)))
        .await
        .unwrap();
    assert_eq!(graded.final_mark, Some(14.0 / 3.0));

    let cleared = grade_service::update_grade(&pool, grade_id, scores(Some(5), None, Some(4)))
        .await
        .unwrap();
    assert_eq!(cleared.final_mark, None);

    let stored = grade_service::find_grade(&pool, grade_id).await.unwrap().unwrap();
    assert_eq!(stored.final_mark, None);
}

#[tokio::test]
async fn rewriting_unchanged_scores_keeps_the_same_mark() {
    let pool = test_pool().await;
    let python = course(&pool, "Python Basics", 40_000, 6).await;
    let student_id = student(&pool, "ivan", "Ivan Petrovich", vec![python.id]).await;
    let grade_id = grade_service::grades_for_student(&pool, student_id).await.unwrap()[0].id;

    let same = scores(Some(3), Some(4), Some(4));
    let first = grade_service::update_grade(&pool, grade_id, same).await.unwrap();
    let second = grade_service::update_grade(&pool, grade_id, same).await.unwrap();
    let third = grade_service::update_grade(&pool, grade_id, same).await.unwrap();

    assert_eq!(first.final_mark, Some(11.0 / 3.0));
    assert_eq!(first.final_mark, second.final_mark);
    assert_eq!(second.final_mark, third.final_mark);
}

#[tokio::test]
async fn out_of_scale_scores_are_rejected_and_not_stored() {
    let pool = test_pool().await;
    let python = course(&pool, "Python Basics", 40_000, 6).await;
    let student_id = student(&pool, "ivan", "Ivan Petrovich", vec![python.id]).await;

    let err = grade_service::record_scores(
        &pool,
        RecordScores {
            course_id: python.id,
            student_id,
            scores: scores(Some(6), Some(1), Some(4)),
        },
    )
    .await
    .unwrap_err();
    match err {
        AppError::Validation(errors) => {
            let fields = errors.field_errors();
            assert!(fields.contains_key("homework1"));
            assert!(fields.contains_key("homework2"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    let grades = grade_service::grades_for_student(&pool, student_id).await.unwrap();
    assert_eq!(grades[0].homework1, None);
}

#[tokio::test]
async fn recording_scores_enrolls_a_new_student() {
    let pool = test_pool().await;
    let python = course(&pool, "Python Basics", 40_000, 6).await;
    let rust = course(&pool, "Rust in Depth", 60_000, 12).await;
    let student_id = student(&pool, "ivan", "Ivan Petrovich", vec![python.id]).await;

    grade_service::record_scores(
        &pool,
        RecordScores {
            course_id: rust.id,
            student_id,
            scores: scores(Some(5), Some(5), Some(5)),
        },
    )
    .await
    .unwrap();

    let grades = grade_service::grades_for_student(&pool, student_id).await.unwrap();
    assert_eq!(grades.len(), 2);
    assert_eq!(grades[0].course_id, python.id);
    assert_eq!(grades[1].course_id, rust.id);
    assert_eq!(grades[1].final_mark, Some(5.0));
}

#[tokio::test]
async fn scores_for_missing_course_or_student_are_referential_errors() {
    let pool = test_pool().await;
    let python = course(&pool, "Python Basics", 40_000, 6).await;
    let student_id = student(&pool, "ivan", "Ivan Petrovich", vec![]).await;

    let err = grade_service::record_scores(
        &pool,
        RecordScores {
            course_id: 404,
            student_id,
            scores: GradeScores::default(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::UnknownCourse(404)));

    let err = grade_service::record_scores(
        &pool,
        RecordScores {
            course_id: python.id,
            student_id: 404,
            scores: GradeScores::default(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::UnknownReference("Student", 404)));
    assert_eq!(count(&pool, "grades").await, 0);
}

#[tokio::test]
async fn updating_missing_grade_is_not_found() {
    let pool = test_pool().await;
    let err = grade_service::update_grade(&pool, 1, GradeScores::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}
