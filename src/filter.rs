//! Checklist search filter.
//!
//! A pure, repeatable computation: given the fixed step sequence and a query,
//! derive the subsequence of steps whose title or bullets (in either
//! language) contain the query case-insensitively. The source sequence is
//! never mutated; callers re-derive the view whenever the query changes.

use crate::content::Step;

/// Filter steps by a free-text query.
///
/// # Arguments
/// * `steps` - The fixed ordered step sequence
/// * `query` - Free text typed into the search box
///
/// # Returns
/// The matching steps in their original order. An empty or whitespace-only
/// query returns the full sequence unfiltered.
///
/// Matching lower-cases both sides, so it is case-insensitive for the
/// English text; Devanagari has no case, so Hindi text matches verbatim.
pub fn filter_steps<'a>(steps: &'a [Step], query: &str) -> Vec<&'a Step> {
    if query.trim().is_empty() {
        return steps.iter().collect();
    }

    let q = query.to_lowercase();
    steps.iter().filter(|step| step_matches(step, &q)).collect()
}

/// Check one step against an already lower-cased query.
fn step_matches(step: &Step, q: &str) -> bool {
    step.title.en.to_lowercase().contains(q)
        || step.title.hi.to_lowercase().contains(q)
        || step.points.en.iter().any(|p| p.to_lowercase().contains(q))
        || step.points.hi.iter().any(|p| p.to_lowercase().contains(q))
}
