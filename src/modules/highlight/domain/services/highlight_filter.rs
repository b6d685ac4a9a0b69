use crate::modules::highlight::domain::entities::{Highlight, SearchResult};
use crate::modules::team::domain::entities::TeamRecord;

const HIGHLIGHTS_KEYWORD: &str = "highlights";

/// Whether a result title is plausibly a highlight reel for `team`: the
/// lowercased title must mention the mascot and the word "highlights".
pub fn is_relevant(title: &str, team: &TeamRecord) -> bool {
    let mascot = team.mascot();
    if mascot.is_empty() {
        return false;
    }
    let title = title.to_lowercase();
    title.contains(&mascot) && title.contains(HIGHLIGHTS_KEYWORD)
}

/// Keep relevant results in the order the search returned them
pub fn retain_relevant(results: &[SearchResult], team: &TeamRecord) -> Vec<SearchResult> {
    results
        .iter()
        .filter(|result| is_relevant(&result.title, team))
        .cloned()
        .collect()
}

/// Filter raw results down to highlights for `team`. An empty outcome is a
/// normal result, not an error.
pub fn filter_highlights(results: &[SearchResult], team: &TeamRecord) -> Vec<Highlight> {
    let highlights: Vec<Highlight> = results
        .iter()
        .filter(|result| is_relevant(&result.title, team))
        .map(Highlight::from)
        .collect();

    log::debug!(
        "Kept {} of {} results for {}",
        highlights.len(),
        results.len(),
        team.name
    );
    highlights
}
