// src/models/profile.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::{fmt, str::FromStr};

// --- Role profiles, one per user ---

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Teacher {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub role: Option<String>, // "seminar leader" | "lecturer"
    pub education: Option<String>,
    pub company: Option<String>,
    pub experience: Option<i64>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Tutor {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub education: Option<String>,
}

/// What a teacher does on a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherRole {
    SeminarLeader,
    Lecturer,
}

impl TeacherRole {
    pub const ALL: [TeacherRole; 2] = [TeacherRole::SeminarLeader, TeacherRole::Lecturer];

    pub fn as_str(&self) -> &'static str {
        match self {
            TeacherRole::SeminarLeader => "seminar leader",
            TeacherRole::Lecturer => "lecturer",
        }
    }
}

impl fmt::Display for TeacherRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeacherRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TeacherRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown teacher role '{}'", s))
    }
}
