// Section: free-form nested metadata tree
//
// Sections hold ordered key/value properties and child sections. Blocks
// and sources link to them by name.

use serde::{Deserialize, Serialize};

/// One metadata property. Values keep their original type so integers
/// survive a round-trip as integers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Int(i64),
    Real(f64),
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Real(value)
    }
}

/// Nested metadata node attachable to containers, blocks, and sources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
}

impl Section {
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            properties: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.properties.push(Property {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_child(mut self, child: Section) -> Self {
        self.sections.push(child);
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|property| property.name == name)
            .map(|property| &property.value)
    }

    /// Depth-first search through this node and its children.
    pub fn find(&self, name: &str) -> Option<&Section> {
        if self.name == name {
            return Some(self);
        }
        self.sections.iter().find_map(|child| child.find(name))
    }
}

/// Depth-first search over a section forest.
pub(crate) fn find_section<'a>(sections: &'a [Section], name: &str) -> Option<&'a Section> {
    sections.iter().find_map(|section| section.find(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_tree() -> Section {
        Section::new("in vivo 1", "setup").with_child(
            Section::new("amplifier", "hardware.amplifier")
                .with_property("model", "EXT 2F")
                .with_property("gain", 1000_i64),
        )
    }

    #[test]
    fn finds_nested_sections() {
        let tree = setup_tree();
        let amp = tree.find("amplifier").expect("child section");
        assert_eq!(amp.type_tag, "hardware.amplifier");
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn property_types_survive_json() {
        let tree = setup_tree();
        let json = serde_json::to_string(&tree).unwrap();
        let back: Section = serde_json::from_str(&json).unwrap();
        let amp = back.find("amplifier").unwrap();
        assert_eq!(amp.property("gain"), Some(&PropertyValue::Int(1000)));
        assert_eq!(
            amp.property("model"),
            Some(&PropertyValue::Text("EXT 2F".to_string()))
        );
    }

    #[test]
    fn real_values_stay_real() {
        let section = Section::new("weather", "data_origin").with_property("mean", 4.5_f64);
        let json = serde_json::to_string(&section).unwrap();
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back.property("mean"), Some(&PropertyValue::Real(4.5)));
    }
}
