use scry_types::{Hit, Intent, TaggedHit, TEMPLATE_COMPONENT, TEMPLATE_CVE, TEMPLATE_UNKNOWN};

/// Template for a document, decided strictly by its declared `type` field.
pub fn template_for(source: &serde_json::Value) -> &'static str {
    match source.get("type").and_then(|t| t.as_str()) {
        Some(t) if t.eq_ignore_ascii_case("cve") => TEMPLATE_CVE,
        Some(t) if t.eq_ignore_ascii_case("component") => TEMPLATE_COMPONENT,
        _ => TEMPLATE_UNKNOWN,
    }
}

pub fn tag_hits(hits: &[Hit]) -> Vec<TaggedHit> {
    hits.iter()
        .map(|hit| TaggedHit {
            template: template_for(&hit.source).to_string(),
            data: hit.source.clone(),
        })
        .collect()
}

/// Coarse intent derived from the hits being returned: all advisories reads
/// as a CVE question, all components (or nothing) as a package question,
/// anything else as mixed.
pub fn detect_intent(hits: &[Hit]) -> Intent {
    if hits.is_empty() {
        return Intent::Package;
    }
    if hits
        .iter()
        .all(|hit| template_for(&hit.source) == TEMPLATE_CVE)
    {
        return Intent::Cve;
    }
    if hits
        .iter()
        .all(|hit| template_for(&hit.source) == TEMPLATE_COMPONENT)
    {
        return Intent::Package;
    }
    Intent::Mixed
}
