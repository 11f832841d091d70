use serde::Deserialize;
use serde_json::Value;

/// The precomputed opportunities JSON. Only `combined` is ever read.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(transparent)]
pub struct OpportunitiesDocument(pub Value);

impl OpportunitiesDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn combined(&self) -> Option<&Vec<Value>> {
        self.0.get("combined").and_then(Value::as_array)
    }

    /// Length of `combined`, or 0 when it is absent or not an array.
    pub fn combined_count(&self) -> usize {
        self.combined().map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSpec {
    pub id: String,
    pub label: String,
}

impl TabSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

pub fn default_tabs() -> Vec<TabSpec> {
    vec![
        TabSpec::new("market", "Market"),
        TabSpec::new("opportunities", "Opportunities"),
        TabSpec::new("signals", "Signals"),
    ]
}
