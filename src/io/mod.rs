//! Readers for the two annotation sources: the Illumina manifest
//! ([`manifest`]) and the variant exclusion table ([`variants`]).

pub mod manifest;
pub mod variants;

#[cfg(test)]
mod tests;

pub use manifest::{
    probe_from_record,
    read_manifest,
    read_manifest_path,
};
pub use variants::{
    read_variant_exclusions,
    read_variant_exclusions_path,
    VariantExclusion,
};
