// ── Persisted preference collaborator ──
//
// External preference storage consumed by the views. Load/save of UI
// state (column selections) is delegated here rather than living in a
// module-level global; hosts bring their own backing store.

use std::collections::HashMap;
use std::sync::RwLock;

/// External key/value preference storage over JSON values.
pub trait PreferenceStore: Send + Sync {
    /// The stored value for `key`, or `None` when nothing was persisted.
    fn get(&self, key: &str) -> Option<serde_json::Value>;

    /// Persist a replacement value for `key`.
    fn set(&self, key: &str, value: serde_json::Value);
}

/// In-memory store for tests and hosts that don't persist preferences.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<HashMap<String, serde_json::Value>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.values
            .read()
            .expect("preferences lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: serde_json::Value) {
        self.values
            .write()
            .expect("preferences lock poisoned")
            .insert(key.to_owned(), value);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.get("columns"), None);
        prefs.set("columns", json!(["a", "b"]));
        assert_eq!(prefs.get("columns"), Some(json!(["a", "b"])));
        prefs.set("columns", json!(["c"]));
        assert_eq!(prefs.get("columns"), Some(json!(["c"])));
    }
}
