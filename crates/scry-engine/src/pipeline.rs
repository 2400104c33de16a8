use crate::planner::{is_show_all, plan_query, QueryPlan};
use crate::tagger::{detect_intent, tag_hits};
use scry_index::Database;
use scry_types::{Hit, QueryResponse, QueryResults};

/// Runs a prompt end to end: plan, search, tag, detect intent, envelope.
///
/// Show-all prompts return every hit; anything else returns the first match
/// (or nothing). Index failures are folded into an error-intent response so
/// the caller always has something renderable.
pub fn run_query(db: &Database, prompt: &str, max_results: usize) -> QueryResponse {
    let plan = plan_query(prompt);
    let hits = match execute_plan(db, &plan, max_results) {
        Ok(hits) => hits,
        Err(err) => return QueryResponse::failed(err.to_string()),
    };

    if is_show_all(prompt) {
        let intent = detect_intent(&hits);
        return QueryResponse {
            intent,
            results: Some(QueryResults::All(tag_hits(&hits))),
            error: None,
        };
    }

    let first: Vec<Hit> = hits.into_iter().take(1).collect();
    let intent = detect_intent(&first);
    let results = tag_hits(&first).into_iter().next().map(QueryResults::Single);
    QueryResponse {
        intent,
        results,
        error: None,
    }
}

fn execute_plan(db: &Database, plan: &QueryPlan, limit: usize) -> scry_index::Result<Vec<Hit>> {
    let records = match plan {
        QueryPlan::MatchAll => db.list_documents(limit)?,
        QueryPlan::Id(id) => db.search_id(id, limit)?,
        QueryPlan::Term(term) => db.search_term(term, limit)?,
    };

    let mut hits = Vec::with_capacity(records.len());
    for record in records {
        let source: serde_json::Value = serde_json::from_str(&record.body)?;
        hits.push(Hit {
            id: record.id,
            source,
        });
    }
    Ok(hits)
}
