use crate::classify::{classify, Shape};
use crate::visited::VisitedSet;
use scry_types::{RenderNode, Value};

/// Marker emitted when a composite is encountered for the second time.
pub const CYCLE_MARKER: &str = "[circular reference]";

/// Marker emitted for an empty array at the depth ceiling.
pub const EMPTY_ARRAY_MARKER: &str = "[empty array]";

/// Renders a value from the root: depth 0, fresh visited set.
pub fn render(value: &Value) -> RenderNode {
    let mut visited = VisitedSet::new();
    render_at(value, 0, &mut visited)
}

/// The recursive pipeline: classify, then either emit a leaf or descend.
///
/// The visited set is threaded by mutable reference through the whole call
/// tree, never copied per branch. Composites are inserted after
/// classification and before their children are visited.
pub fn render_at(value: &Value, depth: usize, visited: &mut VisitedSet) -> RenderNode {
    let shape = classify(value, depth, visited);
    match shape {
        Shape::Truncated => return RenderNode::text(truncated_summary(value)),
        Shape::Cycle => return RenderNode::text(CYCLE_MARKER),
        _ => {}
    }
    visited.insert(value);

    match (shape, value) {
        (Shape::UniformPrimitiveTable, Value::Array(items)) => render_table(&items.borrow()),
        (Shape::UniformMixedRows, Value::Array(items)) => {
            // A table cell must never hold a composite, so each row becomes
            // its own key-value block tagged with the row index.
            let rows = items
                .borrow()
                .iter()
                .enumerate()
                .map(|(index, row)| (index.to_string(), render_at(row, depth + 1, visited)))
                .collect();
            RenderNode::KeyValueList(rows)
        }
        (Shape::GenericArray, Value::Array(items)) => RenderNode::List(
            items
                .borrow()
                .iter()
                .map(|item| render_at(item, depth + 1, visited))
                .collect(),
        ),
        (Shape::GenericObject, Value::Object(entries)) => RenderNode::KeyValueList(
            entries
                .borrow()
                .iter()
                .map(|(key, child)| {
                    let node = if child.is_composite() {
                        render_at(child, depth + 1, visited)
                    } else {
                        RenderNode::text(primitive_text(child))
                    };
                    (key.clone(), node)
                })
                .collect(),
        ),
        // The classifier only pairs array shapes with arrays and object
        // shapes with objects; anything else is a primitive.
        (_, other) => RenderNode::text(primitive_text(other)),
    }
}

fn render_table(rows: &[Value]) -> RenderNode {
    let headers: Vec<String> = match rows.first().and_then(Value::as_object) {
        Some(first) => first.borrow().iter().map(|(key, _)| key.clone()).collect(),
        None => Vec::new(),
    };
    let body = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|header| RenderNode::text(cell_text(row, header)))
                .collect()
        })
        .collect();
    RenderNode::Table {
        headers,
        rows: body,
    }
}

fn cell_text(row: &Value, header: &str) -> String {
    match row.as_object() {
        Some(entries) => entries
            .borrow()
            .iter()
            .find(|(key, _)| key == header)
            .map(|(_, cell)| primitive_text(cell))
            .unwrap_or_else(|| "null".to_string()),
        None => "null".to_string(),
    }
}

/// Canonical text for a primitive: `null`, `true`/`false`, decimal numbers,
/// strings verbatim. Composites fall back to their summary form; only the
/// truncation path hands them in.
fn primitive_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        composite => truncated_summary(composite),
    }
}

/// One-line summary for a value past the depth ceiling.
fn truncated_summary(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let items = items.borrow();
            if items.is_empty() {
                EMPTY_ARRAY_MARKER.to_string()
            } else if items.iter().all(|item| !item.is_composite()) {
                items
                    .iter()
                    .map(primitive_text)
                    .collect::<Vec<_>>()
                    .join(", ")
            } else if items.iter().all(|item| matches!(item, Value::Object(_))) {
                format!("[array of objects: keys = {}]", key_union(&items).join(", "))
            } else {
                format!("[array: {} items]", items.len())
            }
        }
        Value::Object(entries) => {
            let keys: Vec<String> = entries.borrow().iter().map(|(key, _)| key.clone()).collect();
            format!("[object: keys = {}]", keys.join(", "))
        }
        primitive => primitive_text(primitive),
    }
}

/// Union of keys across an all-object array, duplicates removed, first-seen
/// order preserved.
fn key_union(items: &[Value]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for item in items {
        if let Value::Object(entries) = item {
            for (key, _) in entries.borrow().iter() {
                if !keys.iter().any(|seen| seen == key) {
                    keys.push(key.clone());
                }
            }
        }
    }
    keys
}
