use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of one node in a loaded scene graph.
///
/// Only meaningful within one model load.
pub type NodeId = u64;

/// Number of properties shown by [`PropertyBag::describe`].
const DESCRIBE_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub display_name: String,
    #[serde(default, deserialize_with = "display_value")]
    pub display_value: String,
}

impl Property {
    pub fn new(display_name: impl Into<String>, display_value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            display_value: display_value.into(),
        }
    }
}

/// Snapshot of the attributes the property service exposes for one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyBag {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl PropertyBag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, display_name: &str, display_value: &str) -> Self {
        self.properties.push(Property::new(display_name, display_value));
        self
    }

    /// Returns the element name, or `None` when it is blank.
    #[must_use]
    pub fn usable_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(self.name.as_str())
    }

    /// Short listing: the name followed by the first few properties.
    #[must_use]
    pub fn describe(&self) -> String {
        let name = if self.name.is_empty() { "N/A" } else { &self.name };
        let mut out = format!("Name: {name}");

        for prop in self.properties.iter().take(DESCRIBE_LIMIT) {
            out.push_str(&format!("\n• {}: {}", prop.display_name, prop.display_value));
        }

        if self.properties.len() > DESCRIBE_LIMIT {
            out.push_str(&format!(
                "\n... and {} more properties",
                self.properties.len() - DESCRIBE_LIMIT
            ));
        }

        out
    }
}

/// Semantic view of one element, produced by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementRecord {
    pub id: NodeId,
    pub name: String,
    pub category: Option<String>,
    pub material: Option<String>,
    pub family: Option<String>,
    #[serde(rename = "type")]
    pub element_type: Option<String>,
    pub level: Option<String>,
    pub properties: Vec<Property>,
}

// Viewers report numeric and boolean values untyped, so accept any scalar.
fn display_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}
