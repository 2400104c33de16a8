use scry_types::Value;
use std::collections::HashSet;

/// Identity-keyed set of the composites entered during one render.
///
/// Entries are the addresses of composite backing allocations, inserted just
/// before the renderer descends into a composite's children and never removed
/// until the whole render completes. The set therefore tracks
/// ancestors-or-already-rendered, not strictly the active path: a shared
/// (diamond) node renders as a cycle on its second occurrence.
#[derive(Debug, Default)]
pub struct VisitedSet {
    entered: HashSet<usize>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a composite. No-op for primitives.
    pub fn insert(&mut self, value: &Value) {
        if let Some(identity) = value.identity() {
            self.entered.insert(identity);
        }
    }

    pub fn contains(&self, value: &Value) -> bool {
        value
            .identity()
            .is_some_and(|identity| self.entered.contains(&identity))
    }

    pub fn len(&self) -> usize {
        self.entered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_composites_by_identity() {
        let mut visited = VisitedSet::new();
        let array = Value::new_array(vec![]);
        let same = array.clone();
        let other = Value::new_array(vec![]);

        visited.insert(&array);
        assert!(visited.contains(&array));
        assert!(visited.contains(&same));
        assert!(!visited.contains(&other));
    }

    #[test]
    fn ignores_primitives() {
        let mut visited = VisitedSet::new();
        visited.insert(&Value::Null);
        visited.insert(&Value::Bool(true));
        assert!(visited.is_empty());
        assert!(!visited.contains(&Value::Null));
    }
}
