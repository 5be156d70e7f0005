//! Minimal hierarchical recording-container model.
//!
//! A [`Container`] owns metadata [`Section`]s and data [`Block`]s; blocks own
//! [`DataArray`]s with per-axis [`Dimension`] descriptors, provenance
//! [`Source`]s, and region annotations ([`Tag`], [`MultiTag`]) that may carry
//! [`Feature`] links. Cross-entity links are by name and resolved during
//! [`Container::validate`]; a dangling name is a hard error, never patched up.

mod block;
mod container;
mod data_array;
mod dimension;
mod section;
mod source;
mod tag;

pub use block::Block;
pub use container::{Container, FORMAT_VERSION};
pub use data_array::{DataArray, DataValues};
pub use dimension::{
    AliasRangeDimension, Dimension, RangeDimension, SampledDimension, SetDimension,
};
pub use section::{Property, PropertyValue, Section};
pub use source::Source;
pub use tag::{Feature, LinkType, MultiTag, Tag};
