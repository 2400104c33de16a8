use crate::visited::VisitedSet;
use scry_types::Value;

/// Maximum recursion depth below the root. Values deeper than this are
/// summarized instead of rendered.
pub const MAX_DEPTH: usize = 5;

/// Rendering strategy for a value at a given depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Depth budget exhausted; emit a one-line summary.
    Truncated,
    /// Composite already entered during this render.
    Cycle,
    /// Non-empty array of same-keyed objects whose cells are all primitive.
    UniformPrimitiveTable,
    /// Same-keyed objects, but at least one cell is itself composite.
    UniformMixedRows,
    GenericArray,
    GenericObject,
    /// Includes null.
    Primitive,
}

/// Classifies a value. Pure: reads the visited set, never mutates it.
///
/// Evaluation order matters: the depth guard wins over everything (so a
/// too-deep cycle still summarizes), and the cycle check wins over shape
/// inspection.
pub fn classify(value: &Value, depth: usize, visited: &VisitedSet) -> Shape {
    if depth > MAX_DEPTH {
        return Shape::Truncated;
    }
    if visited.contains(value) {
        return Shape::Cycle;
    }
    match value {
        Value::Array(items) => {
            let items = items.borrow();
            if !items.is_empty() && uniform_object_rows(&items) {
                if all_cells_primitive(&items) {
                    Shape::UniformPrimitiveTable
                } else {
                    Shape::UniformMixedRows
                }
            } else {
                Shape::GenericArray
            }
        }
        Value::Object(_) => Shape::GenericObject,
        _ => Shape::Primitive,
    }
}

/// True when every element is a non-null object sharing the first element's
/// key set: same cardinality, same names, order irrelevant.
fn uniform_object_rows(items: &[Value]) -> bool {
    let first_keys: Vec<String> = match &items[0] {
        Value::Object(entries) => entries.borrow().iter().map(|(key, _)| key.clone()).collect(),
        _ => return false,
    };
    items.iter().all(|item| match item {
        Value::Object(entries) => {
            let entries = entries.borrow();
            entries.len() == first_keys.len()
                && first_keys
                    .iter()
                    .all(|key| entries.iter().any(|(candidate, _)| candidate == key))
        }
        _ => false,
    })
}

fn all_cells_primitive(items: &[Value]) -> bool {
    items.iter().all(|item| match item {
        Value::Object(entries) => entries.borrow().iter().all(|(_, cell)| !cell.is_composite()),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(entries: Vec<(&str, Value)>) -> Value {
        Value::new_object(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    fn num(n: i64) -> Value {
        Value::Number(serde_json::Number::from(n))
    }

    #[test]
    fn primitives_and_null_classify_as_primitive() {
        let visited = VisitedSet::new();
        assert_eq!(classify(&Value::Null, 0, &visited), Shape::Primitive);
        assert_eq!(classify(&Value::Bool(false), 0, &visited), Shape::Primitive);
        assert_eq!(classify(&num(7), 0, &visited), Shape::Primitive);
        assert_eq!(
            classify(&Value::String("x".to_string()), 0, &visited),
            Shape::Primitive
        );
    }

    #[test]
    fn depth_guard_wins_over_shape() {
        let visited = VisitedSet::new();
        let value = obj(vec![("a", num(1))]);
        assert_eq!(classify(&value, MAX_DEPTH, &visited), Shape::GenericObject);
        assert_eq!(classify(&value, MAX_DEPTH + 1, &visited), Shape::Truncated);
        assert_eq!(classify(&Value::Null, MAX_DEPTH + 1, &visited), Shape::Truncated);
    }

    #[test]
    fn visited_composite_classifies_as_cycle() {
        let mut visited = VisitedSet::new();
        let value = Value::new_array(vec![]);
        visited.insert(&value);
        assert_eq!(classify(&value, 1, &visited), Shape::Cycle);
        // depth guard still wins
        assert_eq!(classify(&value, MAX_DEPTH + 1, &visited), Shape::Truncated);
    }

    #[test]
    fn uniform_primitive_rows_classify_as_table() {
        let visited = VisitedSet::new();
        let rows = Value::new_array(vec![
            obj(vec![("a", num(1)), ("b", num(2))]),
            obj(vec![("b", num(4)), ("a", num(3))]),
        ]);
        assert_eq!(classify(&rows, 0, &visited), Shape::UniformPrimitiveTable);
    }

    #[test]
    fn null_cells_still_count_as_primitive() {
        let visited = VisitedSet::new();
        let rows = Value::new_array(vec![
            obj(vec![("a", Value::Null)]),
            obj(vec![("a", num(3))]),
        ]);
        assert_eq!(classify(&rows, 0, &visited), Shape::UniformPrimitiveTable);
    }

    #[test]
    fn composite_cell_downgrades_to_mixed_rows() {
        let visited = VisitedSet::new();
        let rows = Value::new_array(vec![
            obj(vec![("a", num(1))]),
            obj(vec![("a", Value::new_array(vec![num(2)]))]),
        ]);
        assert_eq!(classify(&rows, 0, &visited), Shape::UniformMixedRows);
    }

    #[test]
    fn key_set_mismatch_is_a_generic_array() {
        let visited = VisitedSet::new();
        let rows = Value::new_array(vec![
            obj(vec![("a", num(1))]),
            obj(vec![("a", num(2)), ("b", num(3))]),
        ]);
        assert_eq!(classify(&rows, 0, &visited), Shape::GenericArray);
    }

    #[test]
    fn null_element_disqualifies_uniformity() {
        let visited = VisitedSet::new();
        let rows = Value::new_array(vec![obj(vec![("a", num(1))]), Value::Null]);
        assert_eq!(classify(&rows, 0, &visited), Shape::GenericArray);
    }

    #[test]
    fn empty_array_is_generic_not_truncated() {
        let visited = VisitedSet::new();
        assert_eq!(
            classify(&Value::new_array(vec![]), 0, &visited),
            Shape::GenericArray
        );
    }
}
