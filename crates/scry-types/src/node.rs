use serde::Serialize;

/// Presentation tree produced by the renderer.
///
/// Views walk this tree to emit the final output; the tree itself carries no
/// styling and is discarded once materialized. Table rows only ever hold
/// `Text` cells -- the renderer refuses to put a composite inside a cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderNode {
    /// Leaf text: a stringified primitive, a summary, or a marker.
    Text(String),
    /// Tabular grid: one header per column, one row per source element.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<RenderNode>>,
    },
    /// Ordered sequence of anonymous child blocks.
    List(Vec<RenderNode>),
    /// Ordered (key, value) pairs.
    KeyValueList(Vec<(String, RenderNode)>),
}

impl RenderNode {
    pub fn text(text: impl Into<String>) -> Self {
        RenderNode::Text(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RenderNode::Text(text) => Some(text),
            _ => None,
        }
    }
}
