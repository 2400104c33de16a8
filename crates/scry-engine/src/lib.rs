// Engine module - query processing between the index and CLI presentation.

pub mod pipeline;
pub mod planner;
pub mod tagger;

pub use pipeline::run_query;
pub use planner::{is_show_all, plan_query, QueryPlan};
pub use tagger::{detect_intent, tag_hits, template_for};
