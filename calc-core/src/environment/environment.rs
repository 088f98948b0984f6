use std::collections::HashMap;

/// Variable bindings for one interpreter session.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    store: HashMap<String, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: HashMap::new()
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.store.get(name).copied()
    }

    pub fn set(&mut self, name: String, value: i64) {
        self.store.insert(name, value);
    }
}
