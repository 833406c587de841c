// src/models/filters.rs
//! Optional criteria for the list views. Every field that is set must match;
//! unset (or blank) fields impose no constraint. Text criteria are
//! case-sensitive substring matches unless noted as exact.
use serde::{de, Deserialize, Deserializer};
use std::{fmt, str::FromStr};

/// Blank query-string values (`?name=`) count as "not supplied".
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    /// Exact.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub price: Option<i64>,
    /// Exact; one of 6, 12, 18.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeacherFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    /// Exact.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub company: Option<String>,
    /// Matches any course the teacher is staffed on.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub course: Option<String>,
}

/// Grade criteria are matched against a single grade row, the one for the
/// course selected by `course` when that is given.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub course: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub homework1: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub homework2: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub project: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub final_mark: Option<f64>,
}

impl StudentFilter {
    pub(crate) fn touches_grades(&self) -> bool {
        self.course.is_some()
            || self.homework1.is_some()
            || self.homework2.is_some()
            || self.project.is_some()
            || self.final_mark.is_some()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TutorFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub course: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub education: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LessonFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub title: Option<String>,
    /// Teacher name; lessons without a teacher never match.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub teacher: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub course: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::Uri};

    fn parse<T: serde::de::DeserializeOwned>(uri: &str) -> T {
        let uri: Uri = uri.parse().unwrap();
        Query::<T>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn blank_values_are_ignored() {
        let f: CourseFilter = parse("/courses?name=&price=&duration=");
        assert!(f.name.is_none());
        assert!(f.price.is_none());
        assert!(f.duration.is_none());
    }

    #[test]
    fn supplied_values_are_parsed() {
        let f: CourseFilter = parse("/courses?name=Python&duration=12");
        assert_eq!(f.name.as_deref(), Some("Python"));
        assert_eq!(f.duration, Some(12));
        assert_eq!(f.price, None);

        let s: StudentFilter = parse("/students?course=Rust&final_mark=4.5");
        assert_eq!(s.final_mark, Some(4.5));
        assert!(s.touches_grades());
    }

    #[test]
    fn missing_query_gives_empty_filter() {
        let f: LessonFilter = parse("/lessons");
        assert!(f.title.is_none() && f.teacher.is_none() && f.course.is_none());
        assert!(!StudentFilter::default().touches_grades());
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let uri: Uri = "/courses?price=cheap".parse().unwrap();
        assert!(Query::<CourseFilter>::try_from_uri(&uri).is_err());
    }
}
