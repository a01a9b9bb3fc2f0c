use std::collections::HashMap;

use serde::Serialize;

use crate::problems::repo::Problem;

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_problems: i64,
    pub total_experiences: i64,
    pub total_certifications: i64,
    pub total_interview_questions: i64,
    pub total_learnings: i64,
    /// Only observed difficulty labels appear; nothing is zero-filled.
    pub problems_by_difficulty: HashMap<String, i64>,
    pub recent_problems: Vec<Problem>,
}
