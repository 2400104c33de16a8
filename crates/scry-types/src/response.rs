use serde::{Deserialize, Serialize};
use std::fmt;

/// Template tag for component/package documents.
pub const TEMPLATE_COMPONENT: &str = "component";
/// Template tag for CVE advisory documents.
pub const TEMPLATE_CVE: &str = "cve";
/// Tag applied when a document declares no recognized type.
pub const TEMPLATE_UNKNOWN: &str = "unknown";

/// One raw search result from the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    pub id: String,
    pub source: serde_json::Value,
}

/// A hit paired with the rendering template selected for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedHit {
    pub template: String,
    pub data: serde_json::Value,
}

/// Coarse classification of what a query was about, derived from the hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Package,
    Cve,
    Mixed,
    Error,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Package => write!(f, "package"),
            Intent::Cve => write!(f, "cve"),
            Intent::Mixed => write!(f, "mixed"),
            Intent::Error => write!(f, "error"),
        }
    }
}

/// Either the first matching hit or the full hit list (show-all prompts).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryResults {
    Single(TaggedHit),
    All(Vec<TaggedHit>),
}

/// Envelope returned by the query pipeline.
///
/// Failures during search are carried here as `intent: error` with a message
/// rather than surfacing as a hard error; the view layer turns that into a
/// recoverable panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub intent: Intent,
    pub results: Option<QueryResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResponse {
    pub fn failed(message: impl Into<String>) -> Self {
        QueryResponse {
            intent: Intent::Error,
            results: None,
            error: Some(message.into()),
        }
    }
}
