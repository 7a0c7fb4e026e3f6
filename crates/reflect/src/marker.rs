use serde::{Deserialize, Serialize};

/// A named tag attached to a type or member descriptor.
///
/// This is the registry-world analogue of an attribute/annotation: a key
/// plus an optional structured payload. Filtering members or types "by
/// marker" matches on the key only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Marker name (e.g. `"column"`, `"deprecated"`).
    pub key: String,

    /// Optional structured payload carried by the marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Marker {
    /// Create a marker with no payload.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            data: None,
        }
    }

    /// Attach a payload to this marker.
    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_has_no_data() {
        let marker = Marker::new("column");
        assert_eq!(marker.key, "column");
        assert!(marker.data.is_none());
    }

    #[test]
    fn with_data_builder() {
        let marker = Marker::new("column").with_data(json!({"name": "user_id"}));
        assert_eq!(marker.data, Some(json!({"name": "user_id"})));
    }

    #[test]
    fn data_omitted_from_json_when_absent() {
        let json = serde_json::to_string(&Marker::new("pk")).unwrap();
        assert!(!json.contains("data"));

        let back: Marker = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Marker::new("pk"));
    }
}
