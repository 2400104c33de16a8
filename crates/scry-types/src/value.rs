use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to an array's elements.
pub type ArrayHandle = Rc<RefCell<Vec<Value>>>;

/// Shared handle to an object's entries. Entries keep insertion order.
pub type ObjectHandle = Rc<RefCell<Vec<(String, Value)>>>;

/// A JSON-compatible runtime value.
///
/// Composites live behind shared handles so that the same node can appear in
/// more than one place in a graph. Identity (the handle's address) is what
/// the renderer's visited set keys on; structural equality plays no part in
/// cycle detection.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(ArrayHandle),
    Object(ObjectHandle),
}

impl Value {
    pub fn new_array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items)))
    }

    pub fn new_object(entries: Vec<(String, Value)>) -> Self {
        Value::Object(Rc::new(RefCell::new(entries)))
    }

    /// True for arrays and objects; false for primitives and null.
    pub fn is_composite(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// Address of the backing allocation, for composites only.
    pub fn identity(&self) -> Option<usize> {
        match self {
            Value::Array(handle) => Some(Rc::as_ptr(handle) as *const () as usize),
            Value::Object(handle) => Some(Rc::as_ptr(handle) as *const () as usize),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayHandle> {
        match self {
            Value::Array(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectHandle> {
        match self {
            Value::Object(handle) => Some(handle),
            _ => None,
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(n.clone()),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::new_array(items.iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::new_object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from(&json)
    }
}
