// Dimension descriptors: per-axis metadata for data arrays
//
// Exactly one descriptor is attached per data axis, in axis order. The
// descriptor kind decides how an index maps to a coordinate: fixed spacing
// (sampled), category labels (set), explicit ticks (range), or the array's
// own values (alias range).

use serde::{Deserialize, Serialize};

/// Per-axis descriptor attached to a [`crate::model::DataArray`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dimension {
    /// Regularly spaced axis: coordinate of index `i` is `offset + i * interval`.
    Sampled(SampledDimension),
    /// Categorical axis described by an ordered label set.
    Set(SetDimension),
    /// Irregularly spaced axis with explicit, strictly increasing ticks.
    Range(RangeDimension),
    /// Irregularly spaced axis whose coordinates are the data values themselves.
    AliasRange(AliasRangeDimension),
}

impl Dimension {
    pub fn sampled(interval: f64) -> Self {
        Dimension::Sampled(SampledDimension::new(interval))
    }

    pub fn set(labels: Vec<String>) -> Self {
        Dimension::Set(SetDimension { labels })
    }

    /// Bare set dimension with no labels (allowed on position/extent arrays).
    pub fn set_empty() -> Self {
        Dimension::Set(SetDimension { labels: Vec::new() })
    }

    pub fn range(ticks: Vec<f64>) -> Self {
        Dimension::Range(RangeDimension {
            ticks,
            label: None,
            unit: None,
        })
    }

    pub fn alias_range() -> Self {
        Dimension::AliasRange(AliasRangeDimension {
            label: None,
            unit: None,
        })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Dimension::Sampled(_) => "sampled",
            Dimension::Set(_) => "set",
            Dimension::Range(_) => "range",
            Dimension::AliasRange(_) => "alias_range",
        }
    }
}

/// Regularly spaced axis descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SampledDimension {
    pub interval: f64,
    #[serde(default)]
    pub offset: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl SampledDimension {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            offset: 0.0,
            label: None,
            unit: None,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
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

    /// Coordinates of the first `len` indices along this axis.
    pub fn axis(&self, len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| self.offset + i as f64 * self.interval)
            .collect()
    }
}

impl From<SampledDimension> for Dimension {
    fn from(dim: SampledDimension) -> Self {
        Dimension::Sampled(dim)
    }
}

/// Categorical axis descriptor. Labels may be empty; when present their
/// count must equal the axis extent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetDimension {
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Irregular axis with explicit tick coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeDimension {
    pub ticks: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Irregular axis borrowing its coordinates from the owning array's values.
/// Only valid on a 1-D numeric array with strictly increasing values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AliasRangeDimension {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl AliasRangeDimension {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

impl Dimension {
    /// Attach a label where the kind supports one.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        match self {
            Dimension::Sampled(d) => Dimension::Sampled(d.with_label(label)),
            Dimension::Range(mut d) => {
                d.label = Some(label.into());
                Dimension::Range(d)
            }
            Dimension::AliasRange(d) => Dimension::AliasRange(d.with_label(label)),
            other @ Dimension::Set(_) => other,
        }
    }

    /// Attach a unit where the kind supports one.
    pub fn with_unit(self, unit: impl Into<String>) -> Self {
        match self {
            Dimension::Sampled(d) => Dimension::Sampled(d.with_unit(unit)),
            Dimension::Range(mut d) => {
                d.unit = Some(unit.into());
                Dimension::Range(d)
            }
            Dimension::AliasRange(d) => Dimension::AliasRange(d.with_unit(unit)),
            other @ Dimension::Set(_) => other,
        }
    }
}
