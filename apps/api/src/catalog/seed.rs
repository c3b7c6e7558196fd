// Built-in marketplace listings served when no other catalog source is configured.

use chrono::NaiveDate;

use crate::catalog::models::{
    Candidate, CandidateStatus, PlacementStatus, Program, Review, TechHub,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn program(id: &str, name: &str, duration: &str, cost: u32, description: &str) -> Program {
    Program {
        id: id.to_string(),
        name: name.to_string(),
        duration: duration.to_string(),
        cost,
        description: description.to_string(),
    }
}

pub fn seed_hubs() -> Vec<TechHub> {
    vec![
        TechHub {
            id: "1".to_string(),
            name: "Lagos Tech School".to_string(),
            location: "Lagos, Nigeria".to_string(),
            logo: "https://picsum.photos/seed/lts/200/200".to_string(),
            description:
                "Leading the digital revolution in Africa with world-class engineering training."
                    .to_string(),
            tech_stack: strings(&["React", "Node.js", "Python", "PostgreSQL"]),
            placement_rate: 88.0,
            avg_salary_increase: 150.0,
            completion_rate: 92.0,
            rating: 4.8,
            review_count: 124,
            verified: true,
            price_range: "$$".to_string(),
            programs: vec![
                program(
                    "p1",
                    "Fullstack Web Development",
                    "24 Weeks",
                    1200,
                    "Master frontend and backend.",
                ),
                program(
                    "p2",
                    "Data Science Intensive",
                    "16 Weeks",
                    950,
                    "ML and Data Analysis.",
                ),
            ],
        },
        TechHub {
            id: "2".to_string(),
            name: "Code Academy Nairobi".to_string(),
            location: "Nairobi, Kenya".to_string(),
            logo: "https://picsum.photos/seed/can/200/200".to_string(),
            description: "Practical, project-based learning for the modern developer.".to_string(),
            tech_stack: strings(&["Mobile", "Flutter", "Firebase", "Go"]),
            placement_rate: 82.0,
            avg_salary_increase: 110.0,
            completion_rate: 85.0,
            rating: 4.5,
            review_count: 98,
            verified: true,
            price_range: "$$$".to_string(),
            programs: vec![program(
                "p3",
                "Mobile App Mastery",
                "20 Weeks",
                1500,
                "iOS and Android with Flutter.",
            )],
        },
        TechHub {
            id: "3".to_string(),
            name: "DevBootcamp Cape Town".to_string(),
            location: "Cape Town, SA".to_string(),
            logo: "https://picsum.photos/seed/devbc/200/200".to_string(),
            description: "Accelerated career transitions into tech.".to_string(),
            tech_stack: strings(&["UI/UX", "Figma", "Webflow", "JavaScript"]),
            placement_rate: 75.0,
            avg_salary_increase: 85.0,
            completion_rate: 78.0,
            rating: 4.2,
            review_count: 45,
            verified: false,
            price_range: "$".to_string(),
            programs: vec![program(
                "p4",
                "UI/UX Design",
                "12 Weeks",
                600,
                "Industry-standard design training.",
            )],
        },
    ]
}

pub fn seed_reviews() -> Vec<Review> {
    vec![
        Review {
            id: "r1".to_string(),
            hub_id: "1".to_string(),
            trainee_name: "Amaka Eze".to_string(),
            role: "Frontend Developer".to_string(),
            cohort: "Spring 2023".to_string(),
            rating: 5.0,
            skills_learned: strings(&["React", "TypeScript", "Tailwind"]),
            teaching_rating: 5.0,
            instructor_rating: 4.0,
            project_quality: 5.0,
            placement_status: PlacementStatus::Employed,
            time_to_completion: "6 Months".to_string(),
            content: "The curriculum was intense but highly rewarding. The capstone project \
                      helped me land my job at a fintech firm within 2 weeks of graduating."
                .to_string(),
            date: NaiveDate::from_ymd_opt(2023, 11, 15).unwrap_or_default(),
            verified: true,
        },
        Review {
            id: "r2".to_string(),
            hub_id: "1".to_string(),
            trainee_name: "Kofi Mensah".to_string(),
            role: "Backend Engineer".to_string(),
            cohort: "Spring 2023".to_string(),
            rating: 4.0,
            skills_learned: strings(&["Node.js", "Express", "Redis"]),
            teaching_rating: 4.0,
            instructor_rating: 5.0,
            project_quality: 4.0,
            placement_status: PlacementStatus::Employed,
            time_to_completion: "6 Months".to_string(),
            content: "Instructors are world-class. A bit fast-paced for absolute beginners, \
                      but the support system is great."
                .to_string(),
            date: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap_or_default(),
            verified: true,
        },
    ]
}

pub fn seed_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "c1".to_string(),
            name: "Ibrahim Saliu".to_string(),
            hub_id: "1".to_string(),
            hub_name: "Lagos Tech School".to_string(),
            skills: strings(&["React", "Node.js", "AWS"]),
            assessment_score: 92,
            portfolio_url: "https://github.com".to_string(),
            avatar: "https://picsum.photos/seed/ibra/100/100".to_string(),
            cohort: "Q3 2023".to_string(),
            status: CandidateStatus::ReadyForHire,
        },
        Candidate {
            id: "c2".to_string(),
            name: "Sarah Kimani".to_string(),
            hub_id: "2".to_string(),
            hub_name: "Code Academy Nairobi".to_string(),
            skills: strings(&["Flutter", "Firebase", "Dart"]),
            assessment_score: 88,
            portfolio_url: "https://github.com".to_string(),
            avatar: "https://picsum.photos/seed/sara/100/100".to_string(),
            cohort: "Q4 2023".to_string(),
            status: CandidateStatus::Interviewing,
        },
    ]
}
