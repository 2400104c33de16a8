use once_cell::sync::Lazy;
use regex::Regex;

static CVE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bCVE-\d{4}-\d{4,}\b").expect("valid CVE pattern"));

/// Prompts that ask for the whole corpus instead of a best match.
const SHOW_ALL_PROMPTS: &[&str] = &[
    "show all",
    "show all docs",
    "show all documents",
    "show all indexed documents",
];

/// Filler words that never make useful search terms on their own.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "of", "for", "in", "on", "to", "is", "are", "was", "any", "all", "about",
    "show", "me", "find", "get", "list", "what", "which", "with", "and", "or", "tell", "give",
    "details", "info", "information",
];

/// How a prompt translates into an index lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan {
    /// Every document, in index order.
    MatchAll,
    /// Identifier lookup (a CVE id appeared in the prompt).
    Id(String),
    /// Substring search for the most specific prompt token.
    Term(String),
}

pub fn is_show_all(prompt: &str) -> bool {
    let normalized = prompt.trim().to_lowercase();
    SHOW_ALL_PROMPTS.contains(&normalized.as_str())
}

/// Turns a free-text prompt into a query plan.
///
/// Routing follows the same rules the original query generator was asked to
/// apply: CVE identifiers go to an id lookup, component-ish prompts search
/// package fields, and anything ambiguous falls back to match-all.
pub fn plan_query(prompt: &str) -> QueryPlan {
    let trimmed = prompt.trim();
    if trimmed.is_empty() || is_show_all(trimmed) {
        return QueryPlan::MatchAll;
    }

    if let Some(found) = CVE_ID.find(trimmed) {
        return QueryPlan::Id(found.as_str().to_uppercase());
    }

    let term = trimmed
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';' || c == '?' || c == '!')
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric() && c != '-' && c != '.'))
        .filter(|token| !token.is_empty())
        .filter(|token| !STOP_WORDS.contains(&token.to_lowercase().as_str()))
        .max_by_key(|token| token.len());

    match term {
        Some(term) => QueryPlan::Term(term.to_string()),
        None => QueryPlan::MatchAll,
    }
}
