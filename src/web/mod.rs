// src/web/mod.rs
pub mod course_handlers;
pub mod extract;
pub mod grade_handlers;
pub mod home_handlers;
pub mod people_handlers;
pub mod registration_handlers;
pub mod routes;
