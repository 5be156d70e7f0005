// DataArray: the core payload entity
//
// A named, typed array with a flat row-major payload, a declared shape,
// and one dimension descriptor per axis. Annotations (unit, label,
// definition) and provenance source links ride along.

use serde::{Deserialize, Serialize};

use crate::error::VaultError;
use crate::model::Dimension;

/// Flat payload of a [`DataArray`], tagged by element type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "dtype", content = "values", rename_all = "snake_case")]
pub enum DataValues {
    Double(Vec<f64>),
    Byte(Vec<u8>),
}

impl DataValues {
    pub fn len(&self) -> usize {
        match self {
            DataValues::Double(values) => values.len(),
            DataValues::Byte(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the payload as doubles, when it is one.
    pub fn as_doubles(&self) -> Option<&[f64]> {
        match self {
            DataValues::Double(values) => Some(values),
            DataValues::Byte(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            DataValues::Byte(values) => Some(values),
            DataValues::Double(_) => None,
        }
    }
}

/// Named multi-dimensional payload with per-axis descriptors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataArray {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub shape: Vec<usize>,
    pub data: DataValues,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

impl DataArray {
    pub fn from_doubles(
        name: impl Into<String>,
        type_tag: impl Into<String>,
        shape: Vec<usize>,
        values: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            definition: None,
            label: None,
            unit: None,
            shape,
            data: DataValues::Double(values),
            dimensions: Vec::new(),
            sources: Vec::new(),
        }
    }

    pub fn from_bytes(
        name: impl Into<String>,
        type_tag: impl Into<String>,
        shape: Vec<usize>,
        values: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            definition: None,
            label: None,
            unit: None,
            shape,
            data: DataValues::Byte(values),
            dimensions: Vec::new(),
            sources: Vec::new(),
        }
    }

    /// 1-D convenience constructor.
    pub fn vector(
        name: impl Into<String>,
        type_tag: impl Into<String>,
        values: Vec<f64>,
    ) -> Self {
        let shape = vec![values.len()];
        Self::from_doubles(name, type_tag, shape, values)
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Append the descriptor for the next data axis.
    pub fn with_dimension(mut self, dimension: impl Into<Dimension>) -> Self {
        self.dimensions.push(dimension.into());
        self
    }

    /// Link a provenance source by name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.sources.push(source.into());
        self
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Coordinate bounds of one axis: the first coordinate and the axis end
    /// (one spacing past the last sample for regular axes, the last
    /// coordinate for irregular ones, the extent for categorical ones).
    /// `None` when the axis or its descriptor is missing.
    pub fn axis_bounds(&self, axis: usize) -> Option<(f64, f64)> {
        let len = *self.shape.get(axis)?;
        match self.dimensions.get(axis)? {
            Dimension::Sampled(d) => Some((d.offset, d.offset + len as f64 * d.interval)),
            Dimension::Set(_) => Some((0.0, len as f64)),
            Dimension::Range(d) => Some((*d.ticks.first()?, *d.ticks.last()?)),
            Dimension::AliasRange(_) => {
                let values = self.data.as_doubles()?;
                Some((*values.first()?, *values.last()?))
            }
        }
    }

    /// Structural self-checks: payload length against shape, one descriptor
    /// per axis, label/tick counts, monotonicity of irregular axes.
    pub fn validate(&self) -> Result<(), VaultError> {
        let expected: usize = self.shape.iter().product();
        if self.data.len() != expected {
            return Err(VaultError::ShapeMismatch {
                array: self.name.clone(),
                expected,
                actual: self.data.len(),
            });
        }

        if self.dimensions.len() != self.rank() {
            return Err(VaultError::DimensionCount {
                array: self.name.clone(),
                rank: self.rank(),
                descriptors: self.dimensions.len(),
            });
        }

        for (axis, dimension) in self.dimensions.iter().enumerate() {
            let extent = self.shape[axis];
            match dimension {
                Dimension::Sampled(_) => {}
                Dimension::Set(d) => {
                    if !d.labels.is_empty() && d.labels.len() != extent {
                        return Err(VaultError::LabelCount {
                            array: self.name.clone(),
                            axis,
                            labels: d.labels.len(),
                            extent,
                        });
                    }
                }
                Dimension::Range(d) => {
                    if d.ticks.len() != extent {
                        return Err(VaultError::InvalidDescriptor {
                            array: self.name.clone(),
                            detail: format!(
                                "range axis {} has {} ticks for extent {}",
                                axis,
                                d.ticks.len(),
                                extent
                            ),
                        });
                    }
                    if !strictly_increasing(&d.ticks) {
                        return Err(VaultError::NotMonotonic {
                            array: self.name.clone(),
                        });
                    }
                }
                Dimension::AliasRange(_) => {
                    if self.rank() != 1 {
                        return Err(VaultError::InvalidDescriptor {
                            array: self.name.clone(),
                            detail: format!(
                                "alias range axis on rank-{} array",
                                self.rank()
                            ),
                        });
                    }
                    let values = self.data.as_doubles().ok_or_else(|| {
                        VaultError::InvalidDescriptor {
                            array: self.name.clone(),
                            detail: "alias range axis requires a double payload".to_string(),
                        }
                    })?;
                    if !strictly_increasing(values) {
                        return Err(VaultError::NotMonotonic {
                            array: self.name.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

fn strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SampledDimension;

    #[test]
    fn vector_matches_its_shape() {
        let da = DataArray::vector("temps", "categorical", vec![1.0, 2.0, 3.0]);
        assert_eq!(da.shape, vec![3]);
        assert_eq!(da.rank(), 1);
        da.clone().with_dimension(Dimension::set_empty()).validate().unwrap();
    }

    #[test]
    fn rejects_payload_shape_mismatch() {
        let da = DataArray::from_doubles("m", "matrix", vec![2, 3], vec![0.0; 5]);
        match da.validate() {
            Err(VaultError::ShapeMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 6);
                assert_eq!(actual, 5);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_descriptor_count_mismatch() {
        let da = DataArray::from_doubles("m", "matrix", vec![2, 2], vec![0.0; 4])
            .with_dimension(Dimension::set_empty());
        assert!(matches!(
            da.validate(),
            Err(VaultError::DimensionCount {
                rank: 2,
                descriptors: 1,
                ..
            })
        ));
    }

    #[test]
    fn rejects_wrong_label_count() {
        let da = DataArray::vector("temps", "categorical", vec![1.0, 2.0, 3.0])
            .with_dimension(Dimension::set(vec!["a".to_string(), "b".to_string()]));
        assert!(matches!(
            da.validate(),
            Err(VaultError::LabelCount {
                labels: 2,
                extent: 3,
                ..
            })
        ));
    }

    #[test]
    fn alias_range_requires_increasing_values() {
        let increasing = DataArray::vector("events", "event", vec![0.1, 0.2, 0.7])
            .with_dimension(Dimension::alias_range());
        increasing.validate().unwrap();

        let shuffled = DataArray::vector("events", "event", vec![0.1, 0.7, 0.2])
            .with_dimension(Dimension::alias_range());
        assert!(matches!(
            shuffled.validate(),
            Err(VaultError::NotMonotonic { .. })
        ));
    }

    #[test]
    fn range_ticks_must_cover_the_axis() {
        let good = DataArray::vector("events", "event", vec![5.0, 6.0, 7.0])
            .with_dimension(Dimension::range(vec![0.1, 0.4, 0.9]));
        good.validate().unwrap();

        let short = DataArray::vector("events", "event", vec![5.0, 6.0, 7.0])
            .with_dimension(Dimension::range(vec![0.1, 0.4]));
        assert!(matches!(
            short.validate(),
            Err(VaultError::InvalidDescriptor { .. })
        ));

        let unsorted = DataArray::vector("events", "event", vec![5.0, 6.0, 7.0])
            .with_dimension(Dimension::range(vec![0.1, 0.9, 0.4]));
        assert!(matches!(
            unsorted.validate(),
            Err(VaultError::NotMonotonic { .. })
        ));
    }

    #[test]
    fn alias_range_rejects_byte_payloads() {
        let da = DataArray::from_bytes("pix", "image", vec![2], vec![1, 2])
            .with_dimension(Dimension::alias_range());
        assert!(matches!(
            da.validate(),
            Err(VaultError::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn sampled_axis_bounds_cover_full_extent() {
        let da = DataArray::vector("trace", "signal", vec![0.0; 10])
            .with_dimension(SampledDimension::new(0.1).with_offset(-0.5));
        let (start, end) = da.axis_bounds(0).unwrap();
        assert!((start + 0.5).abs() < 1e-12);
        assert!((end - 0.5).abs() < 1e-12);
    }
}
