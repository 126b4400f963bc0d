// Template definition - opaque visual layout document
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sent to QuickSight exactly as read from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateDefinition(Value);

impl TemplateDefinition {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
