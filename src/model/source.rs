// Source: provenance marker, optionally linked to a metadata section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Source {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Name of the metadata section describing this source, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl Source {
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, section: impl Into<String>) -> Self {
        self.metadata = Some(section.into());
        self
    }
}
