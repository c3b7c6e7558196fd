use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub cost: u32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TechHub {
    pub id: String,
    pub name: String,
    pub location: String,
    pub logo: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub placement_rate: f64,     // percentage
    pub avg_salary_increase: f64, // percentage, may exceed 100
    pub completion_rate: f64,    // percentage
    pub rating: f64,             // 0.0 – 5.0
    pub review_count: u32,
    pub programs: Vec<Program>,
    pub verified: bool,
    pub price_range: String,
}

impl TechHub {
    pub fn program(&self, program_id: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == program_id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlacementStatus {
    Employed,
    Looking,
    Freelancing,
    #[serde(rename = "Further Studies")]
    FurtherStudies,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: String,
    pub hub_id: String,
    pub trainee_name: String,
    pub role: String,
    pub cohort: String,
    pub rating: f64,
    pub skills_learned: Vec<String>,
    pub teaching_rating: f64,
    pub instructor_rating: f64,
    pub project_quality: f64,
    pub placement_status: PlacementStatus,
    pub time_to_completion: String,
    pub content: String,
    pub date: NaiveDate,
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CandidateStatus {
    #[serde(rename = "Ready for Hire")]
    ReadyForHire,
    Interviewing,
    Placed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub hub_id: String,
    pub hub_name: String,
    pub skills: Vec<String>,
    pub assessment_score: u8, // 0 – 100
    pub portfolio_url: String,
    pub avatar: String,
    pub cohort: String,
    pub status: CandidateStatus,
}

impl Candidate {
    /// Only candidates ready for hire show up in employer talent discovery.
    pub fn visible_to_employers(&self) -> bool {
        self.status == CandidateStatus::ReadyForHire
    }
}
