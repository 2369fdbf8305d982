//! Request-scoped key/value store
//!
//! Lives in the request's extensions. The gate publishes claims here and
//! downstream handlers read them back by key.

use std::collections::HashMap;

use serde_json::Value;

use crate::claims::Claims;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    values: HashMap<String, Value>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Claims published under `key`, if that key holds an object
    pub fn claims(&self, key: &str) -> Option<&Claims> {
        self.values.get(key).and_then(Value::as_object)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
