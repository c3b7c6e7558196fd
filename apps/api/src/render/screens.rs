use serde::Serialize;

use crate::catalog::models::{Candidate, Review, TechHub};
use crate::dashboard::analytics::HubAnalytics;
use crate::dashboard::trainees::Trainee;
use crate::dashboard::DashboardTab;
use crate::insights::slot::InsightState;
use crate::navigation::View;
use crate::wizard::review::{ReviewDraft, ReviewPlacement, ReviewStep};
use crate::wizard::signup::{HubApplication, PricingTier, SignupStep};

/// Everything a client needs to draw one screen, tagged by the view's fragment tag.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view")]
pub enum Screen {
    #[serde(rename = "home")]
    Home(HomeScreen),
    #[serde(rename = "hubs")]
    HubDirectory(DirectoryScreen),
    #[serde(rename = "hub-profile")]
    HubProfile(ProfileScreen),
    #[serde(rename = "employer")]
    EmployerDashboard(EmployerScreen),
    #[serde(rename = "hub-dashboard")]
    HubDashboard(DashboardScreen),
    #[serde(rename = "submit-review")]
    SubmitReview(SubmitReviewScreen),
    #[serde(rename = "insights")]
    Insights(InsightsScreen),
    #[serde(rename = "hub-signup")]
    HubSignup(SignupScreen),
    #[serde(rename = "not-found")]
    NotFound(NotFoundScreen),
}

impl Screen {
    pub fn view(&self) -> Option<View> {
        match self {
            Screen::Home(_) => Some(View::Home),
            Screen::HubDirectory(_) => Some(View::HubDirectory),
            Screen::HubProfile(_) => Some(View::HubProfile),
            Screen::EmployerDashboard(_) => Some(View::EmployerDashboard),
            Screen::HubDashboard(_) => Some(View::HubDashboard),
            Screen::SubmitReview(_) => Some(View::SubmitReview),
            Screen::Insights(_) => Some(View::Insights),
            Screen::HubSignup(_) => Some(View::HubSignup),
            Screen::NotFound(_) => None,
        }
    }
}

/// Directory/featured listing entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HubCard {
    pub id: String,
    pub name: String,
    pub location: String,
    pub logo: String,
    pub tech_stack: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub placement_rate: f64,
    pub verified: bool,
    pub price_range: String,
}

impl From<&TechHub> for HubCard {
    fn from(hub: &TechHub) -> Self {
        Self {
            id: hub.id.clone(),
            name: hub.name.clone(),
            location: hub.location.clone(),
            logo: hub.logo.clone(),
            tech_stack: hub.tech_stack.clone(),
            rating: hub.rating,
            review_count: hub.review_count,
            placement_rate: hub.placement_rate,
            verified: hub.verified,
            price_range: hub.price_range.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadlineStat {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeScreen {
    pub stats: Vec<HeadlineStat>,
    pub featured_hubs: Vec<HubCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectoryScreen {
    pub query: String,
    pub result_count: usize,
    pub hubs: Vec<HubCard>,
    pub empty_hint: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CohortStat {
    pub name: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HubProfile {
    pub hub: TechHub,
    pub reviews: Vec<Review>,
    pub cohort_stats: Vec<CohortStat>,
    pub insight: InsightState,
}

/// `profile` is `None` when no hub is selected: an explicit empty state.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileScreen {
    pub profile: Option<HubProfile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateRow {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub visible_to_employers: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployerScreen {
    pub query: String,
    pub candidates: Vec<CandidateRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TraineeRow {
    #[serde(flatten)]
    pub trainee: Trainee,
    pub visible_to_employers: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardScreen {
    pub hub_name: String,
    pub active_tab: DashboardTab,
    pub analytics: HubAnalytics,
    pub search: String,
    pub trainees: Vec<TraineeRow>,
    pub onboarding_open: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HubOption {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitReviewScreen {
    pub step: ReviewStep,
    pub step_number: u8,
    pub step_count: u8,
    pub progress_percent: u8,
    pub draft: ReviewDraft,
    pub hub_options: Vec<HubOption>,
    pub placement_options: Vec<ReviewPlacement>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightsScreen {
    pub regions: Vec<&'static str>,
    pub active_region: String,
    pub insight: InsightState,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupScreen {
    pub step: SignupStep,
    pub step_number: u8,
    pub steps: Vec<&'static str>,
    pub application: HubApplication,
    pub tech_stack_choices: Vec<&'static str>,
    pub pricing_tiers: Vec<PricingTier>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotFoundScreen {
    pub requested: String,
    pub message: &'static str,
}
