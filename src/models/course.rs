// src/models/course.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

// --- Structures mirroring the DB tables ---

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub duration: i64, // months: 6, 12 or 18
    pub price: i64,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    pub course_id: i64,
    pub teacher_id: Option<i64>,
    pub link: Option<String>,
}

/// Course lengths offered by the school.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CourseDuration {
    #[default]
    SixMonths,
    TwelveMonths,
    EighteenMonths,
}

impl CourseDuration {
    pub fn months(&self) -> i64 {
        match self {
            CourseDuration::SixMonths => 6,
            CourseDuration::TwelveMonths => 12,
            CourseDuration::EighteenMonths => 18,
        }
    }
}

impl TryFrom<i64> for CourseDuration {
    type Error = ValidationError;

    fn try_from(months: i64) -> Result<Self, Self::Error> {
        match months {
            6 => Ok(CourseDuration::SixMonths),
            12 => Ok(CourseDuration::TwelveMonths),
            18 => Ok(CourseDuration::EighteenMonths),
            _ => Err(ValidationError::new("choice")
                .with_message(Cow::Borrowed("Duration must be 6, 12 or 18 months."))),
        }
    }
}

fn default_duration() -> i64 {
    CourseDuration::default().months()
}

fn default_price() -> i64 {
    50_000
}

/// Payload for creating or replacing a course.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CourseForm {
    #[validate(length(min = 1, max = 50, message = "Course name must be 1 to 50 characters."))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required."))]
    pub description: String,
    #[serde(default = "default_duration")]
    pub duration: i64,
    #[serde(default = "default_price")]
    #[validate(range(min = 0, message = "Price cannot be negative."))]
    pub price: i64,
}

impl CourseForm {
    /// Derived checks plus the duration choice, reported together.
    pub fn check(&self) -> Result<CourseDuration, ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        let duration = CourseDuration::try_from(self.duration);
        if let Err(e) = &duration {
            errors.add("duration", e.clone());
        }
        match duration {
            Ok(d) if errors.is_empty() => Ok(d),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LessonForm {
    #[validate(length(min = 1, max = 40, message = "Lesson title must be 1 to 40 characters."))]
    pub title: String,
    pub course_id: i64,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    #[validate(length(max = 100, message = "Link cannot exceed 100 characters."))]
    pub link: Option<String>,
}
