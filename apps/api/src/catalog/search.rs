//! Case-insensitive substring search over hubs and candidates.
//!
//! Filters never reorder or mutate their input: they return borrowed views over
//! the input slice in input order. An empty query matches everything.

use crate::catalog::models::{Candidate, TechHub};

fn normalize(query: &str) -> String {
    query.to_lowercase()
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// A hub matches when the query is a substring of its name or of any tech-stack tag.
pub fn hub_matches(hub: &TechHub, query: &str) -> bool {
    let needle = normalize(query);
    needle.is_empty()
        || contains_ci(&hub.name, &needle)
        || hub.tech_stack.iter().any(|tag| contains_ci(tag, &needle))
}

pub fn filter_hubs<'a>(hubs: &'a [TechHub], query: &str) -> Vec<&'a TechHub> {
    hubs.iter().filter(|hub| hub_matches(hub, query)).collect()
}

/// Employer talent search: skills, cohort or hub name.
pub fn candidate_matches(candidate: &Candidate, query: &str) -> bool {
    let needle = normalize(query);
    needle.is_empty()
        || candidate.skills.iter().any(|s| contains_ci(s, &needle))
        || contains_ci(&candidate.cohort, &needle)
        || contains_ci(&candidate.hub_name, &needle)
}

pub fn filter_candidates<'a>(candidates: &'a [Candidate], query: &str) -> Vec<&'a Candidate> {
    candidates
        .iter()
        .filter(|c| candidate_matches(c, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::{seed_candidates, seed_hubs};

    fn hub(name: &str, stack: &[&str]) -> TechHub {
        let mut hub = seed_hubs().remove(0);
        hub.name = name.to_string();
        hub.tech_stack = stack.iter().map(|s| s.to_string()).collect();
        hub
    }

    #[test]
    fn test_empty_query_returns_all_hubs_in_order() {
        let hubs = seed_hubs();
        let filtered = filter_hubs(&hubs, "");
        let ids: Vec<_> = filtered.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_query_matches_tech_stack_case_insensitively() {
        let hubs = vec![
            hub("Lagos Tech School", &["React", "Node.js"]),
            hub("DevBootcamp Cape Town", &["Figma"]),
        ];
        let filtered = filter_hubs(&hubs, "react");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Lagos Tech School");
    }

    #[test]
    fn test_query_matches_name_substring() {
        let hubs = seed_hubs();
        let filtered = filter_hubs(&hubs, "NAIROBI");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn test_filter_is_sound_and_complete() {
        let hubs = seed_hubs();
        for query in ["o", "js", "ui/", "town", "zzz", "P"] {
            let filtered = filter_hubs(&hubs, query);
            let q = query.to_lowercase();
            let predicate = |h: &TechHub| {
                h.name.to_lowercase().contains(&q)
                    || h.tech_stack.iter().any(|t| t.to_lowercase().contains(&q))
            };
            assert!(filtered.iter().all(|h| predicate(h)), "unsound for {query}");
            let expected = hubs.iter().filter(|h| predicate(h)).count();
            assert_eq!(filtered.len(), expected, "incomplete for {query}");
        }
    }

    #[test]
    fn test_no_match_returns_empty() {
        let hubs = seed_hubs();
        assert!(filter_hubs(&hubs, "cobol").is_empty());
    }

    #[test]
    fn test_candidate_search_by_skill_cohort_and_hub() {
        let candidates = seed_candidates();
        assert_eq!(filter_candidates(&candidates, "dart")[0].id, "c2");
        assert_eq!(filter_candidates(&candidates, "q3 2023")[0].id, "c1");
        assert_eq!(filter_candidates(&candidates, "lagos").len(), 1);
        assert_eq!(filter_candidates(&candidates, "").len(), 2);
    }
}
