use std::collections::BTreeSet;

/// Collects every dotted field path reachable in `value` into `paths`.
///
/// Objects contribute `prefix.key` for each entry and recurse; arrays are
/// transparent (their elements share the enclosing prefix); leaves add
/// nothing beyond the path that reached them.
pub fn extract_field_paths(value: &serde_json::Value, prefix: &str, paths: &mut BTreeSet<String>) {
    match value {
        serde_json::Value::Object(entries) => {
            for (key, child) in entries {
                let full_key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                paths.insert(full_key.clone());
                extract_field_paths(child, &full_key, paths);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                extract_field_paths(item, prefix, paths);
            }
        }
        _ => {}
    }
}

/// Sorted unique field paths across a document set.
pub fn field_paths<'a>(docs: impl IntoIterator<Item = &'a serde_json::Value>) -> Vec<String> {
    let mut paths = BTreeSet::new();
    for doc in docs {
        extract_field_paths(doc, "", &mut paths);
    }
    paths.into_iter().collect()
}
