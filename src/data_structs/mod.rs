//! Core data types of the annotation store.
//!
//! - [`Probe`]: one manifest row with its genomic position and annotations.
//! - [`Strand`], [`LocationTag`] and [`CpgContext`]: the strand symbol and
//!   the two fixed annotation vocabularies of the manifest.
//! - [`GenomicInterval`]: a chromosomal range for region queries.
//! - [`FeatureFilter`]: a tagged selector over location tags, CpG context or
//!   gene names.
//! - [`typedef`]: type aliases for identifiers and positions.

mod enums;
mod feature;
mod interval;
mod probe;
pub mod typedef;


pub use enums::{
    CpgContext,
    LocationTag,
    Strand,
};
pub use feature::FeatureFilter;
pub use interval::GenomicInterval;
pub use probe::Probe;
