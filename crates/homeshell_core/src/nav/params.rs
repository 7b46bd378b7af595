use crate::model::todo::TodoItem;
use log::warn;
use serde_json::Value;
use std::collections::BTreeMap;

const TODO_PARAM: &str = "todo";

/// Opaque key-value bag attached to a navigation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenParams {
    values: BTreeMap<String, Value>,
}

impl ScreenParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Params for the edit screen: `{todo: item}` or `{todo: null}`.
    pub fn with_todo(item: Option<&TodoItem>) -> Self {
        let value = item
            .and_then(|todo| serde_json::to_value(todo).ok())
            .unwrap_or(Value::Null);
        Self::new().insert(TODO_PARAM, value)
    }

    pub fn insert(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Record passed to the edit screen; `None` when absent, null or malformed.
    /// A malformed value opens the editor on a new record, so it is logged.
    pub fn todo(&self) -> Option<TodoItem> {
        match self.values.get(TODO_PARAM)? {
            Value::Null => None,
            value => serde_json::from_value(value.clone())
                .inspect_err(|err| {
                    warn!("event=param_decode module=nav status=error param={TODO_PARAM} error={err}");
                })
                .ok(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ScreenParams;
    use crate::model::todo::TodoItem;
    use chrono::Utc;
    use serde_json::{json, Value};

    #[test]
    fn todo_param_roundtrips_item() {
        let item = TodoItem::new("Buy milk", Utc::now());
        let params = ScreenParams::with_todo(Some(&item));
        assert_eq!(params.todo(), Some(item));
    }

    #[test]
    fn null_todo_param_means_new_record() {
        let params = ScreenParams::with_todo(None);
        assert_eq!(params.get("todo"), Some(&Value::Null));
        assert_eq!(params.todo(), None);
        assert!(!params.is_empty());
    }

    #[test]
    fn malformed_todo_param_reads_as_none() {
        let params = ScreenParams::new().insert("todo", json!({ "id": "1", "content": 7 }));
        assert!(params.get("todo").is_some());
        assert_eq!(params.todo(), None);
    }
}
