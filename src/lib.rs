//! # probeannot
//!
//! `probeannot` builds an in-memory reference of Illumina methylation array
//! probe annotations and answers the lookup and filter queries that
//! downstream plotting code needs (heatmaps, per-region box plots).
//!
//! The store is rebuilt from the source files on every initialisation:
//!
//! 1. The comma-delimited array manifest is parsed into [`Probe`] records
//!    ([`io::manifest`]).
//! 2. Probes overlapping known genetic variants can be removed using a
//!    tab-delimited exclusion table ([`io::variants`]).
//! 3. The store is frozen into an [`Annotator`], which serves queries by
//!    gene, location tag, CpG context and chromosomal interval.
//!
//! Queries return probe ids, so results of several queries can be combined
//! with [`intersect_ids`] before the records are materialised.
//!
//! Number of threads used for parallel scans can be configured with the
//! `PROBEANNOT_NUM_THREADS` environment variable.
//!
//! ## Structure
//!
//! * [`data_structs`]: [`Probe`], the annotation vocabularies,
//!   [`GenomicInterval`] and [`FeatureFilter`].
//! * [`io`]: manifest and variant table readers.
//! * [`store`]: [`ProbeStore`], [`Annotator`] and free query helpers.
//! * [`config`]: [`AnnotConfig`], locating the source files.
//! * [`error`]: typed load errors.
//!
//! ## Usage
//!
//! ```no_run
//! use probeannot::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = AnnotConfig::new("path/to/Data").with_default_variant_table();
//!     let annotator = Annotator::from_config(&config)?;
//!
//!     let brca1 = annotator.ids_by_gene("BRCA1");
//!     let island = annotator.ids_by_cpg_context(CpgContext::Island);
//!     let ids = intersect_ids(brca1, &island);
//!
//!     for probe in sort_by_coordinate(annotator.resolve(&ids)) {
//!         println!("{}\t{}:{}", probe.id(), probe.chromosome(), probe.coordinate());
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data_structs;
pub mod error;
pub mod exports;
pub mod io;
pub mod prelude;
pub mod store;
pub mod utils;

pub use crate::config::AnnotConfig;
pub use crate::data_structs::{
    CpgContext,
    FeatureFilter,
    GenomicInterval,
    LocationTag,
    Probe,
    Strand,
};
pub use crate::error::{
    ConfigError,
    ParseError,
};
pub use crate::io::VariantExclusion;
pub use crate::store::{
    filter_by_feature,
    ids_of,
    intersect_ids,
    sort_by_coordinate,
    Annotator,
    ProbeSource,
    ProbeStore,
};
