// src/models/grade.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A student's scores on one course. This row is also the student's enrollment.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Grade {
    pub id: i64,
    pub course_id: i64,
    pub student_id: i64,
    pub homework1: Option<i64>,
    pub homework2: Option<i64>,
    pub project: Option<i64>,
    pub final_mark: Option<f64>,
}

/// Mean of the three component scores, once all of them are set.
pub fn compute_final_mark(
    homework1: Option<i64>,
    homework2: Option<i64>,
    project: Option<i64>,
) -> Option<f64> {
    match (homework1, homework2, project) {
        (Some(h1), Some(h2), Some(p)) => Some((h1 + h2 + p) as f64 / 3.0),
        _ => None,
    }
}

impl Grade {
    /// Recomputes `final_mark` from the components. Called on every write.
    pub fn normalize(&mut self) -> Option<f64> {
        self.final_mark = compute_final_mark(self.homework1, self.homework2, self.project);
        self.final_mark
    }

    pub fn apply(&mut self, scores: &GradeScores) {
        self.homework1 = scores.homework1;
        self.homework2 = scores.homework2;
        self.project = scores.project;
        self.normalize();
    }
}

/// Component scores on the 2..=5 scale; absent means "not graded yet".
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, Validate, PartialEq)]
pub struct GradeScores {
    #[serde(default)]
    #[validate(range(min = 2, max = 5, message = "Scores range from 2 to 5."))]
    pub homework1: Option<i64>,
    #[serde(default)]
    #[validate(range(min = 2, max = 5, message = "Scores range from 2 to 5."))]
    pub homework2: Option<i64>,
    #[serde(default)]
    #[validate(range(min = 2, max = 5, message = "Scores range from 2 to 5."))]
    pub project: Option<i64>,
}

/// Body of `PUT /grades`: scores for a (course, student) pair.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordScores {
    pub course_id: i64,
    pub student_id: i64,
    #[serde(flatten)]
    pub scores: GradeScores,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(h1: Option<i64>, h2: Option<i64>, p: Option<i64>) -> Grade {
        Grade {
            id: 1,
            course_id: 1,
            student_id: 1,
            homework1: h1,
            homework2: h2,
            project: p,
            final_mark: None,
        }
    }

    #[test]
    fn final_mark_is_mean_of_components() {
        assert_eq!(compute_final_mark(Some(4), Some(5), Some(3)), Some(4.0));
        assert_eq!(compute_final_mark(Some(5), Some(5), Some(4)), Some(14.0 / 3.0));
        assert_eq!(compute_final_mark(Some(2), Some(2), Some(2)), Some(2.0));
    }

    #[test]
    fn final_mark_uses_real_division() {
        let mark = compute_final_mark(Some(3), Some(4), Some(4)).unwrap();
        assert!((mark - 11.0 / 3.0).abs() < f64::EPSILON);
        assert_ne!(mark, 3.0);
    }

    #[test]
    fn final_mark_absent_until_all_components_set() {
        assert_eq!(compute_final_mark(None, Some(5), Some(3)), None);
        assert_eq!(compute_final_mark(Some(4), None, Some(3)), None);
        assert_eq!(compute_final_mark(Some(4), Some(5), None), None);
        assert_eq!(compute_final_mark(None, None, None), None);
    }

    #[test]
    fn normalize_clears_stale_mark() {
        let mut g = grade(Some(4), Some(5), Some(3));
        assert_eq!(g.normalize(), Some(4.0));

        g.project = None;
        g.normalize();
        assert_eq!(g.final_mark, None);
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut g = grade(Some(5), Some(4), Some(4));
        let first = g.normalize();
        let second = g.normalize();
        assert_eq!(first, second);
        assert_eq!(g.final_mark, first);
    }

    #[test]
    fn scores_outside_scale_fail_validation() {
        let ok = GradeScores {
            homework1: Some(2),
            homework2: None,
            project: Some(5),
        };
        assert!(ok.validate().is_ok());

        let bad = GradeScores {
            homework1: Some(1),
            homework2: Some(6),
            project: None,
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("homework1"));
        assert!(fields.contains_key("homework2"));
        assert!(!fields.contains_key("project"));
    }
}
