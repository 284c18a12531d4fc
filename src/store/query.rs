//! Free functions over caller-supplied probe sequences.
//!
//! These work on any `P: Borrow<Probe>`, so both owned records and
//! references returned by the [`Annotator`](crate::store::Annotator) can be
//! passed in.

use std::borrow::Borrow;

use hashbrown::HashSet;
use log::debug;

use crate::data_structs::typedef::ProbeId;
use crate::data_structs::{
    FeatureFilter,
    Probe,
};
use crate::store::ProbeSource;

/// Keeps the probes matched by `filter`.
///
/// Without a filter there is nothing to apply and the result is `None`,
/// which is distinct from an empty match.
pub fn filter_by_feature<P, I>(
    probes: I,
    filter: Option<&FeatureFilter>,
) -> Option<Vec<P>>
where
    P: Borrow<Probe>,
    I: IntoIterator<Item = P>, {
    let filter = filter?;
    debug!("Filtering probes by {}", filter);
    Some(
        probes
            .into_iter()
            .filter(|p| filter.matches(p.borrow()))
            .collect(),
    )
}

/// Stable ascending sort on genomic coordinate.
///
/// Probes sharing a coordinate keep their input order.
pub fn sort_by_coordinate<P, I>(probes: I) -> Vec<P>
where
    P: Borrow<Probe>,
    I: IntoIterator<Item = P>, {
    let mut probes: Vec<P> = probes.into_iter().collect();
    probes.sort_by_key(|p| p.borrow().coordinate());
    probes
}

pub fn ids_of<P, I>(probes: I) -> Vec<ProbeId>
where
    P: Borrow<Probe>,
    I: IntoIterator<Item = P>, {
    probes
        .into_iter()
        .map(|p| p.borrow().id().clone())
        .collect()
}

/// Ids present in both `left` and `right`, in the order of `left`.
pub fn intersect_ids<S: AsRef<str>>(
    left: Vec<ProbeId>,
    right: &[S],
) -> Vec<ProbeId> {
    let right = right
        .iter()
        .map(AsRef::as_ref)
        .collect::<HashSet<&str>>();
    left.into_iter()
        .filter(|id| right.contains(id.as_str()))
        .collect()
}

/// Resolves `ids` against any probe source; see [`ProbeSource::get_many`].
pub fn get_probes<'a, T, I, S>(
    source: &'a T,
    ids: I,
) -> Vec<Option<&'a Probe>>
where
    T: ProbeSource + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>, {
    source.get_many(ids)
}
