//! Storage and querying of probe records.
//!
//! Loading happens in two phases. A [`ProbeStore`] is filled by the
//! manifest parser and may have variant-affected probes removed from it.
//! [`ProbeStore::freeze`] then turns it into an [`Annotator`], which only
//! supports reads and can be shared between threads. Both implement
//! [`ProbeSource`].

mod annotator;
mod probe_store;
pub mod query;


pub use annotator::Annotator;
pub use probe_store::{
    ProbeSource,
    ProbeStore,
};
pub use query::{
    filter_by_feature,
    get_probes,
    ids_of,
    intersect_ids,
    sort_by_coordinate,
};
