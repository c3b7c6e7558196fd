use serde::Serialize;

use crate::dashboard::trainees::{Trainee, TraineeStatus};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SentimentPoint {
    pub month: &'static str,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlacementPoint {
    pub name: &'static str,
    pub value: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub change: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HubAnalytics {
    pub stats: Vec<StatCard>,
    pub sentiment: Vec<SentimentPoint>,
    pub placement_by_program: Vec<PlacementPoint>,
}

const SENTIMENT: [(&str, f64); 6] = [
    ("Jan", 4.2),
    ("Feb", 4.4),
    ("Mar", 4.3),
    ("Apr", 4.8),
    ("May", 4.7),
    ("Jun", 4.9),
];

const PLACEMENT: [(&str, u8); 4] = [
    ("Fullstack", 85),
    ("UI/UX", 72),
    ("Data Sci", 92),
    ("Product", 68),
];

/// Outcome analytics for the hub dashboard. Trainee counts come from the live
/// roster; the historical series are fixed reference figures.
pub fn hub_analytics(roster: &[Trainee]) -> HubAnalytics {
    let placed = roster
        .iter()
        .filter(|t| t.status == TraineeStatus::Placed)
        .count();
    let placement_rate = if roster.is_empty() {
        0
    } else {
        placed * 100 / roster.len()
    };
    let latest_sentiment = SENTIMENT.last().map(|(_, s)| *s).unwrap_or_default();

    HubAnalytics {
        stats: vec![
            StatCard {
                label: "Active Trainees",
                value: roster.len().to_string(),
                change: "+12%",
            },
            StatCard {
                label: "Placement Rate",
                value: format!("{placement_rate}%"),
                change: "+5%",
            },
            StatCard {
                label: "Avg. Rating",
                value: format!("{latest_sentiment:.1}"),
                change: "+0.2",
            },
            StatCard {
                label: "Employer Partners",
                value: "24".to_string(),
                change: "+3",
            },
        ],
        sentiment: SENTIMENT
            .iter()
            .map(|(month, score)| SentimentPoint {
                month: *month,
                score: *score,
            })
            .collect(),
        placement_by_program: PLACEMENT
            .iter()
            .map(|(name, value)| PlacementPoint {
                name: *name,
                value: *value,
            })
            .collect(),
    }
}
