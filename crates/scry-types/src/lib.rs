pub mod node;
pub mod response;
pub mod value;

pub use node::RenderNode;
pub use response::{
    Hit, Intent, QueryResponse, QueryResults, TaggedHit, TEMPLATE_COMPONENT, TEMPLATE_CVE,
    TEMPLATE_UNKNOWN,
};
pub use value::Value;
