use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TraineeStatus {
    #[serde(rename = "In Training")]
    InTraining,
    #[serde(rename = "Ready for Hire")]
    ReadyForHire,
    Interviewing,
    Placed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trainee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub program: String,
    pub status: TraineeStatus,
    pub progress: u8, // 0 – 100
}

impl Trainee {
    /// Ready-for-hire trainees are listed in employer talent discovery.
    pub fn visible_to_employers(&self) -> bool {
        self.status == TraineeStatus::ReadyForHire
    }

    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
            || self.program.to_lowercase().contains(&needle)
    }
}

const SEED_ROSTER: [(&str, &str, &str, &str, TraineeStatus, u8); 4] = [
    ("t1", "John Doe", "john@example.com", "Fullstack Web", TraineeStatus::InTraining, 65),
    ("t2", "Jane Smith", "jane@example.com", "Data Science", TraineeStatus::ReadyForHire, 100),
    ("t3", "Alex Johnson", "alex@example.com", "UI/UX Design", TraineeStatus::Interviewing, 100),
    ("t4", "Sarah Williams", "sarah@example.com", "Fullstack Web", TraineeStatus::Placed, 100),
];

pub fn seed_roster() -> Vec<Trainee> {
    SEED_ROSTER
        .iter()
        .map(|(id, name, email, program, status, progress)| Trainee {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            program: program.to_string(),
            status: *status,
            progress: *progress,
        })
        .collect()
}
