// src/models/stats.rs
use serde::{Deserialize, Serialize};

/// Headline numbers for the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolStats {
    pub courses: i64,
    pub teachers: i64,
    pub students: i64,
}
