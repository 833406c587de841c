// src/models/mod.rs
pub mod course;
pub mod filters;
pub mod grade;
pub mod profile;
pub mod registration;
pub mod stats;
pub mod user;
