// src/models/registration.rs
use crate::models::{profile::TeacherRole, user::Role};
use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

// --- Sign-up forms, one per role ---

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StudentSignUp {
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
    #[validate(must_match(other = "password", message = "The two password fields didn't match."))]
    pub password_confirmation: String,
    #[validate(length(min = 10, max = 100, message = "Name must be 10 to 100 characters."))]
    pub name: String,
    #[validate(
        email(message = "Enter a valid email address."),
        length(min = 5, max = 100, message = "Email must be 5 to 100 characters.")
    )]
    pub email: String,
    #[serde(default)]
    pub courses: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TeacherSignUp {
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
    #[validate(must_match(other = "password", message = "The two password fields didn't match."))]
    pub password_confirmation: String,
    #[validate(length(min = 10, max = 100, message = "Name must be 10 to 100 characters."))]
    pub name: String,
    #[validate(
        email(message = "Enter a valid email address."),
        length(min = 5, max = 100, message = "Email must be 5 to 100 characters.")
    )]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "Education must be 1 to 100 characters."))]
    pub education: String,
    #[validate(length(min = 1, max = 100, message = "Company must be 1 to 100 characters."))]
    pub company: String,
    #[validate(range(min = 0, max = 100, message = "Experience must be between 0 and 100 years."))]
    pub experience: i64,
    #[validate(custom(function = "validate_teacher_role"))]
    pub role: String,
    #[serde(default)]
    pub courses: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TutorSignUp {
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
    #[validate(must_match(other = "password", message = "The two password fields didn't match."))]
    pub password_confirmation: String,
    #[validate(length(min = 10, max = 100, message = "Name must be 10 to 100 characters."))]
    pub name: String,
    #[validate(
        email(message = "Enter a valid email address."),
        length(min = 5, max = 100, message = "Email must be 5 to 100 characters.")
    )]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "Education must be 1 to 100 characters."))]
    pub education: String,
    #[serde(default)]
    pub courses: Vec<i64>,
}

/// A registration request. Each variant creates exactly one profile.
#[derive(Debug, Clone)]
pub enum SignUp {
    Student(StudentSignUp),
    Teacher(TeacherSignUp),
    Tutor(TutorSignUp),
}

impl SignUp {
    pub fn role(&self) -> Role {
        match self {
            SignUp::Student(_) => Role::Student,
            SignUp::Teacher(_) => Role::Teacher,
            SignUp::Tutor(_) => Role::Tutor,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            SignUp::Student(f) => &f.username,
            SignUp::Teacher(f) => &f.username,
            SignUp::Tutor(f) => &f.username,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            SignUp::Student(f) => &f.password,
            SignUp::Teacher(f) => &f.password,
            SignUp::Tutor(f) => &f.password,
        }
    }

    /// Selected courses, duplicates removed, in first-seen order.
    pub fn course_ids(&self) -> Vec<i64> {
        let raw = match self {
            SignUp::Student(f) => &f.courses,
            SignUp::Teacher(f) => &f.courses,
            SignUp::Tutor(f) => &f.courses,
        };
        let mut ids: Vec<i64> = Vec::with_capacity(raw.len());
        for id in raw {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        ids
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            SignUp::Student(f) => f.validate(),
            SignUp::Teacher(f) => f.validate(),
            SignUp::Tutor(f) => f.validate(),
        }
    }
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    if len == 0 || len > 150 {
        return Err(ValidationError::new("length")
            .with_message(Cow::Borrowed("Username must be 1 to 150 characters.")));
    }
    let allowed = |c: char| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_');
    if !username.chars().all(allowed) {
        return Err(ValidationError::new("username").with_message(Cow::Borrowed(
            "Username may contain only letters, digits and @/./+/-/_ characters.",
        )));
    }
    Ok(())
}

fn validate_teacher_role(role: &str) -> Result<(), ValidationError> {
    role.parse::<TeacherRole>().map(|_| ()).map_err(|_| {
        ValidationError::new("choice")
            .with_message(Cow::Borrowed("Role must be 'seminar leader' or 'lecturer'."))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_form() -> StudentSignUp {
        StudentSignUp {
            username: "ivan.petrov".into(),
            password: "correct-horse".into(),
            password_confirmation: "correct-horse".into(),
            name: "Ivan Petrovich".into(),
            email: "ivan@example.com".into(),
            courses: vec![1, 2],
        }
    }

    fn teacher_form() -> TeacherSignUp {
        TeacherSignUp {
            username: "m.ivanova".into(),
            password: "correct-horse".into(),
            password_confirmation: "correct-horse".into(),
            name: "Maria Ivanova".into(),
            email: "maria@example.com".into(),
            education: "MSU".into(),
            company: "Yandex".into(),
            experience: 7,
            role: "lecturer".into(),
            courses: vec![],
        }
    }

    #[test]
    fn valid_student_passes() {
        assert!(SignUp::Student(student_form()).validate().is_ok());
    }

    #[test]
    fn invalid_email_is_a_field_error() {
        let mut form = student_form();
        form.email = "not-an-email".into();
        let errors = SignUp::Student(form).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn name_length_bounds() {
        let mut form = student_form();
        form.name = "Ivan".into();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        form.name = "x".repeat(101);
        assert!(form.validate().is_err());

        form.name = "x".repeat(10);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn password_confirmation_must_match() {
        let mut form = student_form();
        form.password_confirmation = "something-else".into();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password_confirmation"));
    }

    #[test]
    fn username_charset_is_restricted() {
        let mut form = student_form();
        form.username = "ivan petrov".into();
        assert!(form.validate().unwrap_err().field_errors().contains_key("username"));

        form.username = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn teacher_role_must_be_a_known_choice() {
        assert!(teacher_form().validate().is_ok());

        let mut form = teacher_form();
        form.role = "dean".into();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("role"));
    }

    #[test]
    fn teacher_experience_is_bounded() {
        let mut form = teacher_form();
        form.experience = -1;
        assert!(form.validate().unwrap_err().field_errors().contains_key("experience"));

        form.experience = 101;
        assert!(form.validate().is_err());

        form.experience = 100;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn course_ids_are_deduplicated() {
        let mut form = student_form();
        form.courses = vec![3, 1, 3, 2, 1];
        assert_eq!(SignUp::Student(form).course_ids(), vec![3, 1, 2]);
    }

    #[test]
    fn courses_default_to_empty() {
        let form: TutorSignUp = serde_json::from_str(
            r#"{"username":"olga","password":"12345678","password_confirmation":"12345678",
                "name":"Olga Sergeevna","email":"olga@example.com","education":"SPbU"}"#,
        )
        .unwrap();
        assert!(form.courses.is_empty());
        assert!(form.validate().is_ok());
    }
}
