// Prompt templates for the narrative insight calls.

use crate::catalog::models::Review;

pub const HUB_SUMMARY_PROMPT: &str = "\
Analyze these student reviews for \"{hub_name}\" tech hub and provide a brief 3-sentence \
summary of its key strengths and one area for improvement.
Reviews:
{reviews}";

pub const REGION_TOP_HUBS_PROMPT: &str = "\
Give me a list of top 3 tech hubs in {region} for software engineering training based on \
industry reputation and placement. Format as a brief paragraph.";

pub fn hub_summary_prompt(hub_name: &str, reviews: &[&Review]) -> String {
    let reviews_text = reviews
        .iter()
        .map(|r| r.content.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    HUB_SUMMARY_PROMPT
        .replace("{hub_name}", hub_name)
        .replace("{reviews}", &reviews_text)
}

pub fn region_prompt(region: &str) -> String {
    REGION_TOP_HUBS_PROMPT.replace("{region}", region)
}
