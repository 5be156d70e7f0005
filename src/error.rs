// Error types for the container model and fixture builder
//
// One enum covers every failure class the generator can hit: a missing
// disk asset, a dangling entity reference, and structural mismatches
// caught by graph validation. Nothing is recoverable; callers propagate
// with `?` up to the process boundary.

use std::fmt;
use std::path::PathBuf;

/// Errors raised by the container model, the store, and the builder.
#[derive(Debug)]
pub enum VaultError {
    /// A referenced entity (data array, source, section) does not exist.
    MissingEntity { kind: &'static str, name: String },

    /// A data array's flat payload does not match its declared shape.
    ShapeMismatch {
        array: String,
        expected: usize,
        actual: usize,
    },

    /// A data array's dimension descriptor count differs from its rank.
    DimensionCount {
        array: String,
        rank: usize,
        descriptors: usize,
    },

    /// A set dimension's label count differs from the axis extent.
    LabelCount {
        array: String,
        axis: usize,
        labels: usize,
        extent: usize,
    },

    /// A range/alias-range axis is not strictly increasing.
    NotMonotonic { array: String },

    /// A dimension descriptor cannot describe the axis it is attached to.
    InvalidDescriptor { array: String, detail: String },

    /// A tag or multi-tag region falls outside a referenced array's axes.
    RegionOutOfBounds {
        tag: String,
        array: String,
        detail: String,
    },

    /// A tag or multi-tag is structurally malformed (extent/position shape).
    MalformedRegion { tag: String, detail: String },

    /// An input asset could not be read or decoded.
    AssetUnreadable { path: PathBuf, reason: String },

    /// Filesystem failure while reading or writing the container file.
    Io {
        context: String,
        source: std::io::Error,
    },

    /// The container document could not be encoded or decoded.
    Encoding { reason: String },
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::MissingEntity { kind, name } => {
                write!(f, "no {} named '{}' exists", kind, name)
            }
            VaultError::ShapeMismatch {
                array,
                expected,
                actual,
            } => write!(
                f,
                "data array '{}' declares {} elements but holds {}",
                array, expected, actual
            ),
            VaultError::DimensionCount {
                array,
                rank,
                descriptors,
            } => write!(
                f,
                "data array '{}' has rank {} but {} dimension descriptors",
                array, rank, descriptors
            ),
            VaultError::LabelCount {
                array,
                axis,
                labels,
                extent,
            } => write!(
                f,
                "data array '{}' axis {} has {} labels for extent {}",
                array, axis, labels, extent
            ),
            VaultError::NotMonotonic { array } => {
                write!(f, "range axis of '{}' is not strictly increasing", array)
            }
            VaultError::InvalidDescriptor { array, detail } => {
                write!(f, "bad dimension descriptor on '{}': {}", array, detail)
            }
            VaultError::RegionOutOfBounds { tag, array, detail } => write!(
                f,
                "region of '{}' falls outside '{}': {}",
                tag, array, detail
            ),
            VaultError::MalformedRegion { tag, detail } => {
                write!(f, "tag '{}' region is malformed: {}", tag, detail)
            }
            VaultError::AssetUnreadable { path, reason } => {
                write!(f, "cannot read asset {}: {}", path.display(), reason)
            }
            VaultError::Io { context, source } => write!(f, "{}: {}", context, source),
            VaultError::Encoding { reason } => write!(f, "container encoding failed: {}", reason),
        }
    }
}

impl std::error::Error for VaultError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VaultError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        VaultError::Encoding {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entity_names_the_lookup() {
        let err = VaultError::MissingEntity {
            kind: "data array",
            name: "eod".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("data array"));
        assert!(rendered.contains("eod"));
    }

    #[test]
    fn io_error_preserves_source() {
        let err = VaultError::Io {
            context: "writing container".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk gone"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("disk gone"));
    }

    #[test]
    fn serde_error_converts() {
        let parse_err =
            serde_json::from_str::<serde_json::Value>("{").expect_err("truncated JSON must fail");
        let err: VaultError = parse_err.into();
        assert!(matches!(err, VaultError::Encoding { .. }));
    }
}
