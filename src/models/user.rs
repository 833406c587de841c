// src/models/user.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// A row of the 'users' table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_student: bool,
    pub is_teacher: bool,
    pub is_tutor: bool,
    pub date_joined: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Tutor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Tutor => "tutor",
        }
    }

    /// Name of the role flag column in 'users'.
    pub(crate) fn flag_column(&self) -> &'static str {
        match self {
            Role::Student => "is_student",
            Role::Teacher => "is_teacher",
            Role::Tutor => "is_tutor",
        }
    }
}

impl User {
    /// The single role this user was registered with, if the flags agree on one.
    pub fn role(&self) -> Option<Role> {
        match (self.is_student, self.is_teacher, self.is_tutor) {
            (true, false, false) => Some(Role::Student),
            (false, true, false) => Some(Role::Teacher),
            (false, false, true) => Some(Role::Tutor),
            _ => None,
        }
    }
}
