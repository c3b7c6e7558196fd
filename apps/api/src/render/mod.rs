//! Screen renderer: a pure mapping from session state and catalog to a screen model.
//!
//! One case per [`View`], matched exhaustively. A view tag the service cannot
//! parse renders [`Screen::NotFound`] instead of failing.

pub mod screens;

use crate::catalog::search::{filter_candidates, filter_hubs};
use crate::catalog::Catalog;
use crate::dashboard::analytics::hub_analytics;
use crate::navigation::View;
use crate::render::screens::*;
use crate::session::{Session, REGIONS};
use crate::wizard::review::{ReviewPlacement, STEP_COUNT};
use crate::wizard::signup::{PricingTier, STEP_LABELS, TECH_STACK_CHOICES};

const NO_HUBS_HINT: &str = "Try adjusting your filters or search terms.";
const NOT_FOUND_MESSAGE: &str = "View not found";

/// Renders the session's current view.
pub fn render_screen(session: &Session, catalog: &Catalog) -> Screen {
    render_view(session.navigator.current_view(), session, catalog)
}

/// Renders the view named by `tag`, or the not-found placeholder.
pub fn render_tag(tag: &str, session: &Session, catalog: &Catalog) -> Screen {
    match tag.parse::<View>() {
        Ok(view) => render_view(view, session, catalog),
        Err(_) => Screen::NotFound(NotFoundScreen {
            requested: tag.to_string(),
            message: NOT_FOUND_MESSAGE,
        }),
    }
}

pub fn render_view(view: View, session: &Session, catalog: &Catalog) -> Screen {
    match view {
        View::Home => Screen::Home(home(catalog)),
        View::HubDirectory => Screen::HubDirectory(directory(&session.search_query, catalog)),
        View::HubProfile => Screen::HubProfile(profile(session, catalog)),
        View::EmployerDashboard => {
            Screen::EmployerDashboard(employer(&session.employer_search, catalog))
        }
        View::HubDashboard => Screen::HubDashboard(dashboard(session, catalog)),
        View::SubmitReview => Screen::SubmitReview(submit_review(session, catalog)),
        View::Insights => Screen::Insights(insights(session)),
        View::HubSignup => Screen::HubSignup(signup(session)),
    }
}

fn home(catalog: &Catalog) -> HomeScreen {
    let hubs = catalog.hubs();
    let count = hubs.len().max(1) as f64;
    let avg_salary = hubs.iter().map(|h| h.avg_salary_increase).sum::<f64>() / count;
    let avg_placement = hubs.iter().map(|h| h.placement_rate).sum::<f64>() / count;
    let verified = hubs.iter().filter(|h| h.verified).count();
    let reviews: u32 = hubs.iter().map(|h| h.review_count).sum();

    HomeScreen {
        stats: vec![
            HeadlineStat {
                label: "Avg. Salary Increase",
                value: format!("+{avg_salary:.0}%"),
            },
            HeadlineStat {
                label: "Placement Rate",
                value: format!("{avg_placement:.0}%"),
            },
            HeadlineStat {
                label: "Verified Hubs",
                value: verified.to_string(),
            },
            HeadlineStat {
                label: "Global Reviews",
                value: reviews.to_string(),
            },
        ],
        featured_hubs: hubs.iter().map(HubCard::from).collect(),
    }
}

fn directory(query: &str, catalog: &Catalog) -> DirectoryScreen {
    let hubs: Vec<HubCard> = filter_hubs(catalog.hubs(), query)
        .into_iter()
        .map(HubCard::from)
        .collect();

    DirectoryScreen {
        query: query.to_string(),
        result_count: hubs.len(),
        empty_hint: hubs.is_empty().then_some(NO_HUBS_HINT),
        hubs,
    }
}

fn profile(session: &Session, catalog: &Catalog) -> ProfileScreen {
    let hub = session
        .navigator
        .selected_hub()
        .and_then(|id| catalog.hub(id));

    let Some(hub) = hub else {
        return ProfileScreen { profile: None };
    };

    let cohort_stats = vec![
        CohortStat {
            name: "Completion",
            value: hub.completion_rate,
        },
        CohortStat {
            name: "Placement",
            value: hub.placement_rate,
        },
        CohortStat {
            name: "ROI Increase",
            value: hub.avg_salary_increase,
        },
    ];

    ProfileScreen {
        profile: Some(HubProfile {
            hub: hub.clone(),
            reviews: catalog.reviews_for(&hub.id).into_iter().cloned().collect(),
            cohort_stats,
            insight: session.profile_insight.state_for(&hub.id),
        }),
    }
}

fn employer(query: &str, catalog: &Catalog) -> EmployerScreen {
    EmployerScreen {
        query: query.to_string(),
        candidates: filter_candidates(catalog.candidates(), query)
            .into_iter()
            .map(|c| CandidateRow {
                visible_to_employers: c.visible_to_employers(),
                candidate: c.clone(),
            })
            .collect(),
    }
}

fn dashboard(session: &Session, catalog: &Catalog) -> DashboardScreen {
    let dashboard = &session.dashboard;
    DashboardScreen {
        hub_name: catalog
            .hubs()
            .first()
            .map(|h| h.name.clone())
            .unwrap_or_default(),
        active_tab: dashboard.active_tab(),
        analytics: hub_analytics(dashboard.roster()),
        search: dashboard.search().to_string(),
        trainees: dashboard
            .visible_trainees()
            .into_iter()
            .map(|t| TraineeRow {
                visible_to_employers: t.visible_to_employers(),
                trainee: t.clone(),
            })
            .collect(),
        onboarding_open: dashboard.onboarding_open(),
    }
}

fn submit_review(session: &Session, catalog: &Catalog) -> SubmitReviewScreen {
    let wizard = &session.review;
    SubmitReviewScreen {
        step: wizard.step(),
        step_number: wizard.step().number(),
        step_count: STEP_COUNT,
        progress_percent: wizard.progress_percent(),
        draft: wizard.draft().clone(),
        hub_options: catalog
            .hubs()
            .iter()
            .map(|h| HubOption {
                id: h.id.clone(),
                name: h.name.clone(),
            })
            .collect(),
        placement_options: vec![
            ReviewPlacement::Employed,
            ReviewPlacement::Looking,
            ReviewPlacement::SelfEmployed,
        ],
    }
}

fn insights(session: &Session) -> InsightsScreen {
    InsightsScreen {
        regions: REGIONS.to_vec(),
        active_region: session.active_region.clone(),
        insight: session.region_insight.state_for(&session.active_region),
    }
}

fn signup(session: &Session) -> SignupScreen {
    let wizard = &session.signup;
    SignupScreen {
        step: wizard.step(),
        step_number: wizard.step().number(),
        steps: STEP_LABELS.to_vec(),
        application: wizard.application().clone(),
        tech_stack_choices: TECH_STACK_CHOICES.to_vec(),
        pricing_tiers: PricingTier::ALL.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::slot::InsightState;

    #[test]
    fn test_every_view_renders_its_own_screen() {
        let catalog = Catalog::seeded();
        let session = Session::default();
        for view in View::ALL {
            let screen = render_view(view, &session, &catalog);
            assert_eq!(screen.view(), Some(view));
        }
    }

    #[test]
    fn test_unknown_tag_renders_not_found() {
        let catalog = Catalog::seeded();
        let screen = render_tag("settings", &Session::default(), &catalog);
        let Screen::NotFound(not_found) = screen else {
            panic!("expected not found");
        };
        assert_eq!(not_found.requested, "settings");
        assert_eq!(not_found.message, "View not found");
    }

    #[test]
    fn test_profile_without_selected_hub_is_empty() {
        let catalog = Catalog::seeded();
        let mut session = Session::default();
        session.navigate(View::HubProfile, None);

        let Screen::HubProfile(screen) = render_screen(&session, &catalog) else {
            panic!("expected profile");
        };
        assert!(screen.profile.is_none());
    }

    #[test]
    fn test_profile_shows_hub_reviews_and_insight_state() {
        let catalog = Catalog::seeded();
        let mut session = Session::default();
        session.navigate(View::HubProfile, Some("1".to_string()));
        session.plan_insight(&catalog);

        let Screen::HubProfile(screen) = render_screen(&session, &catalog) else {
            panic!("expected profile");
        };
        let profile = screen.profile.unwrap();
        assert_eq!(profile.hub.name, "Lagos Tech School");
        assert_eq!(profile.reviews.len(), 2);
        assert_eq!(profile.cohort_stats[2].value, 150.0);
        assert_eq!(profile.insight, InsightState::Loading);
    }

    #[test]
    fn test_directory_applies_search_query() {
        let catalog = Catalog::seeded();
        let mut session = Session::default();
        session.search_query = "flutter".to_string();

        let Screen::HubDirectory(screen) = render_view(View::HubDirectory, &session, &catalog)
        else {
            panic!("expected directory");
        };
        assert_eq!(screen.result_count, 1);
        assert_eq!(screen.hubs[0].name, "Code Academy Nairobi");
        assert!(screen.empty_hint.is_none());

        session.search_query = "haskell".to_string();
        let Screen::HubDirectory(screen) = render_view(View::HubDirectory, &session, &catalog)
        else {
            panic!("expected directory");
        };
        assert_eq!(screen.empty_hint, Some(NO_HUBS_HINT));
    }

    #[test]
    fn test_home_stats_derive_from_catalog() {
        let catalog = Catalog::seeded();
        let screen = home(&catalog);
        assert_eq!(screen.featured_hubs.len(), 3);
        assert_eq!(screen.stats[2].value, "2");
        assert_eq!(screen.stats[3].value, "267");
    }

    #[test]
    fn test_employer_marks_ready_candidates_visible() {
        let catalog = Catalog::seeded();
        let screen = employer("", &catalog);
        assert!(screen.candidates[0].visible_to_employers);
        assert!(!screen.candidates[1].visible_to_employers);
    }

    #[test]
    fn test_screen_serializes_with_view_tag() {
        let catalog = Catalog::seeded();
        let json = serde_json::to_value(render_view(View::Insights, &Session::default(), &catalog))
            .unwrap();
        assert_eq!(json["view"], "insights");
        assert_eq!(json["active_region"], "Lagos, Nigeria");
        assert_eq!(json["insight"]["status"], "idle");
    }
}
