// Region annotations: Tag (one region) and MultiTag (many regions)
//
// A Tag pins a point or a contiguous region (position + extent) inside its
// referenced data arrays. A MultiTag stores positions and extents as data
// arrays of their own, one entry (or row) per tagged instance. Both may
// carry feature links to auxiliary arrays.

use serde::{Deserialize, Serialize};

use crate::error::VaultError;
use crate::model::{Block, DataArray};

/// How a feature array relates to the tagged region. The fixture only uses
/// `Untagged`: the feature is not sliced by the tag's region.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    Tagged,
    Untagged,
    Indexed,
}

/// Auxiliary data array attached to a tag or multi-tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Name of the feature's data array.
    pub data: String,
    pub link_type: LinkType,
}

/// Single point/region annotation over one or more data arrays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    pub position: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extent: Option<Vec<f64>>,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
}

impl Tag {
    pub fn new(
        name: impl Into<String>,
        type_tag: impl Into<String>,
        position: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            definition: None,
            position,
            extent: None,
            references: Vec::new(),
            features: Vec::new(),
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn with_extent(mut self, extent: Vec<f64>) -> Self {
        self.extent = Some(extent);
        self
    }

    pub fn with_reference(mut self, array: impl Into<String>) -> Self {
        self.references.push(array.into());
        self
    }

    pub fn with_feature(mut self, data: impl Into<String>, link_type: LinkType) -> Self {
        self.features.push(Feature {
            data: data.into(),
            link_type,
        });
        self
    }

    /// Check the region against every referenced array in `block` and
    /// resolve all feature links.
    pub fn validate(&self, block: &Block) -> Result<(), VaultError> {
        if let Some(extent) = &self.extent {
            if extent.len() != self.position.len() {
                return Err(VaultError::MalformedRegion {
                    tag: self.name.clone(),
                    detail: format!(
                        "{} extents for {} position coordinates",
                        extent.len(),
                        self.position.len()
                    ),
                });
            }
        }

        for reference in &self.references {
            let array = lookup_array(block, reference)?;
            check_region(
                &self.name,
                array,
                &self.position,
                self.extent.as_deref(),
            )?;
        }

        resolve_features(block, &self.features)
    }
}

/// Multi-instance annotation: positions/extents live in data arrays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MultiTag {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Name of the positions data array (one entry or row per instance).
    pub positions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extents: Option<String>,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
}

impl MultiTag {
    pub fn new(
        name: impl Into<String>,
        type_tag: impl Into<String>,
        positions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            definition: None,
            positions: positions.into(),
            extents: None,
            references: Vec::new(),
            features: Vec::new(),
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn with_extents(mut self, array: impl Into<String>) -> Self {
        self.extents = Some(array.into());
        self
    }

    pub fn with_reference(mut self, array: impl Into<String>) -> Self {
        self.references.push(array.into());
        self
    }

    pub fn with_feature(mut self, data: impl Into<String>, link_type: LinkType) -> Self {
        self.features.push(Feature {
            data: data.into(),
            link_type,
        });
        self
    }

    /// Resolve the position/extent arrays, then check every instance region
    /// against every referenced array.
    pub fn validate(&self, block: &Block) -> Result<(), VaultError> {
        let positions = lookup_array(block, &self.positions)?;
        let position_values =
            positions
                .data
                .as_doubles()
                .ok_or_else(|| VaultError::MalformedRegion {
                    tag: self.name.clone(),
                    detail: format!("positions array '{}' is not numeric", positions.name),
                })?;

        let (instances, coords) = match positions.shape.as_slice() {
            [n] => (*n, 1),
            [n, c] => (*n, *c),
            _ => {
                return Err(VaultError::MalformedRegion {
                    tag: self.name.clone(),
                    detail: format!(
                        "positions array '{}' has rank {}",
                        positions.name,
                        positions.rank()
                    ),
                })
            }
        };

        let extent_values = match &self.extents {
            Some(name) => {
                let extents = lookup_array(block, name)?;
                if extents.shape != positions.shape {
                    return Err(VaultError::MalformedRegion {
                        tag: self.name.clone(),
                        detail: format!(
                            "extents shape {:?} differs from positions shape {:?}",
                            extents.shape, positions.shape
                        ),
                    });
                }
                Some(extents.data.as_doubles().ok_or_else(|| {
                    VaultError::MalformedRegion {
                        tag: self.name.clone(),
                        detail: format!("extents array '{}' is not numeric", extents.name),
                    }
                })?)
            }
            None => None,
        };

        for reference in &self.references {
            let array = lookup_array(block, reference)?;
            for instance in 0..instances {
                let row = &position_values[instance * coords..(instance + 1) * coords];
                let extent_row =
                    extent_values.map(|values| &values[instance * coords..(instance + 1) * coords]);
                check_region(&self.name, array, row, extent_row)?;
            }
        }

        resolve_features(block, &self.features)
    }
}

fn lookup_array<'a>(block: &'a Block, name: &str) -> Result<&'a DataArray, VaultError> {
    block
        .data_array(name)
        .ok_or_else(|| VaultError::MissingEntity {
            kind: "data array",
            name: name.to_string(),
        })
}

fn resolve_features(block: &Block, features: &[Feature]) -> Result<(), VaultError> {
    for feature in features {
        lookup_array(block, &feature.data)?;
    }
    Ok(())
}

/// Check one region (leading-axis coordinates plus optional extents)
/// against one referenced array's coordinate space.
fn check_region(
    tag: &str,
    array: &DataArray,
    position: &[f64],
    extent: Option<&[f64]>,
) -> Result<(), VaultError> {
    if position.len() > array.rank() {
        return Err(VaultError::MalformedRegion {
            tag: tag.to_string(),
            detail: format!(
                "{} coordinates for rank-{} reference '{}'",
                position.len(),
                array.rank(),
                array.name
            ),
        });
    }

    for (axis, &start) in position.iter().enumerate() {
        let (axis_start, axis_end) =
            array
                .axis_bounds(axis)
                .ok_or_else(|| VaultError::MalformedRegion {
                    tag: tag.to_string(),
                    detail: format!("'{}' axis {} has no descriptor", array.name, axis),
                })?;
        let length = extent.map(|values| values[axis]).unwrap_or(0.0);
        if start < axis_start || start + length > axis_end {
            return Err(VaultError::RegionOutOfBounds {
                tag: tag.to_string(),
                array: array.name.clone(),
                detail: format!(
                    "axis {}: [{}, {}] outside [{}, {}]",
                    axis,
                    start,
                    start + length,
                    axis_start,
                    axis_end
                ),
            });
        }
    }

    Ok(())
}
