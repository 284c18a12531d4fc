use arcstr::ArcStr;
use hashbrown::HashMap;
use itertools::Itertools;
use log::info;
use rayon::prelude::*;
use rust_lapper::{
    Interval,
    Lapper,
};

use crate::config::AnnotConfig;
use crate::data_structs::typedef::{
    PosType,
    ProbeId,
};
use crate::data_structs::{
    FeatureFilter,
    GenomicInterval,
    Probe,
};
use crate::store::{
    ProbeSource,
    ProbeStore,
};
use crate::utils::{
    n_threads,
    THREAD_POOL,
};

/// Read-only query engine over a frozen set of probes.
///
/// Built from a [`ProbeStore`] once loading and variant filtering are done.
/// Gene, location and interval lookups go through indices built at
/// construction; results are always returned in store order, exactly as a
/// linear scan over [`ProbeSource::all`] would yield them.
///
/// `Annotator` has no mutating methods and is `Send + Sync`.
pub struct Annotator {
    probes:         Vec<Probe>,
    positions:      HashMap<ProbeId, usize>,
    gene_index:     HashMap<ArcStr, Vec<usize>>,
    location_index: HashMap<ArcStr, Vec<usize>>,
    /// One point interval `[coordinate, coordinate + 1)` per probe.
    interval_index: HashMap<ArcStr, Lapper<PosType, usize>>,
}

impl From<ProbeStore> for Annotator {
    fn from(store: ProbeStore) -> Self {
        let probes = store.into_probes();

        let mut positions = HashMap::with_capacity(probes.len());
        let mut gene_index: HashMap<ArcStr, Vec<usize>> = HashMap::new();
        let mut location_index: HashMap<ArcStr, Vec<usize>> = HashMap::new();
        let mut by_chromosome: HashMap<ArcStr, Vec<Interval<PosType, usize>>> =
            HashMap::new();

        for (pos, probe) in probes.iter().enumerate() {
            positions.insert(probe.id().clone(), pos);
            for gene in probe.genes().iter().unique() {
                gene_index
                    .entry(gene.clone())
                    .or_default()
                    .push(pos);
            }
            for tag in probe.location_tags() {
                location_index
                    .entry(tag.clone())
                    .or_default()
                    .push(pos);
            }
            by_chromosome
                .entry(probe.chromosome().clone())
                .or_default()
                .push(Interval {
                    start: probe.coordinate(),
                    stop:  probe.coordinate().saturating_add(1),
                    val:   pos,
                });
        }

        let interval_index = by_chromosome
            .into_iter()
            .map(|(chr, intervals)| (chr, Lapper::new(intervals)))
            .collect::<HashMap<_, _>>();

        info!(
            "Indexed {} probes: {} genes, {} location tags, {} chromosomes ({} scan threads)",
            probes.len(),
            gene_index.len(),
            location_index.len(),
            interval_index.len(),
            n_threads()
        );

        Self {
            probes,
            positions,
            gene_index,
            location_index,
            interval_index,
        }
    }
}

impl Annotator {
    /// Full initialisation: load, optional variant filtering, freeze.
    pub fn from_config(config: &AnnotConfig) -> anyhow::Result<Self> {
        Ok(ProbeStore::from_config(config)?.freeze())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Probe> { self.probes.iter() }

    pub fn len(&self) -> usize { self.probes.len() }

    fn ids_at(
        &self,
        positions: &[usize],
    ) -> Vec<ProbeId> {
        positions
            .iter()
            .map(|&pos| self.probes[pos].id().clone())
            .collect()
    }

    /// Materialises ids returned by the `ids_by_*` queries.
    ///
    /// Ids absent from the store are dropped silently, so the result can be
    /// shorter than `ids`. Use [`ProbeSource::get_many`] to keep a `None` per
    /// missing id.
    pub fn resolve<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Vec<&Probe> {
        self.get_many(ids).into_iter().flatten().collect()
    }

    /// Probes whose gene list contains exactly `name`.
    pub fn ids_by_gene<S: AsRef<str>>(
        &self,
        name: S,
    ) -> Vec<ProbeId> {
        self.gene_index
            .get(name.as_ref())
            .map(|positions| self.ids_at(positions))
            .unwrap_or_default()
    }

    /// Probes carrying the location tag `tag`.
    pub fn ids_by_location<S: AsRef<str>>(
        &self,
        tag: S,
    ) -> Vec<ProbeId> {
        self.location_index
            .get(tag.as_ref())
            .map(|positions| self.ids_at(positions))
            .unwrap_or_default()
    }

    /// Probes whose CpG context contains `value` as a substring.
    pub fn ids_by_cpg_context<S: AsRef<str>>(
        &self,
        value: S,
    ) -> Vec<ProbeId> {
        let value = value.as_ref();
        THREAD_POOL.install(|| {
            self.probes
                .par_iter()
                .filter(|p| p.in_cpg_context(value))
                .map(|p| p.id().clone())
                .collect()
        })
    }

    /// Probes on `interval`'s chromosome with `start < coordinate < end`.
    pub fn ids_by_interval(
        &self,
        interval: &GenomicInterval,
    ) -> Vec<ProbeId> {
        let Some(lapper) = self
            .interval_index
            .get(interval.chromosome().as_str())
        else {
            return Vec::new();
        };
        let positions = lapper
            .find(interval.start().saturating_add(1), interval.end())
            .map(|iv| iv.val)
            .sorted_unstable()
            .collect_vec();
        self.ids_at(&positions)
    }

    pub fn ids_by_feature(
        &self,
        filter: &FeatureFilter,
    ) -> Vec<ProbeId> {
        match filter {
            FeatureFilter::Location(tag) => self.ids_by_location(tag),
            FeatureFilter::CpgContext(ctx) => self.ids_by_cpg_context(ctx),
            FeatureFilter::Gene(gene) => self.ids_by_gene(gene),
        }
    }

    pub fn probes_by_gene<S: AsRef<str>>(
        &self,
        name: S,
    ) -> Vec<&Probe> {
        self.resolve(&self.ids_by_gene(name))
    }

    pub fn probes_by_location<S: AsRef<str>>(
        &self,
        tag: S,
    ) -> Vec<&Probe> {
        self.resolve(&self.ids_by_location(tag))
    }

    pub fn probes_by_cpg_context<S: AsRef<str>>(
        &self,
        value: S,
    ) -> Vec<&Probe> {
        self.resolve(&self.ids_by_cpg_context(value))
    }

    pub fn probes_by_interval(
        &self,
        interval: &GenomicInterval,
    ) -> Vec<&Probe> {
        self.resolve(&self.ids_by_interval(interval))
    }

    pub fn probes_by_feature(
        &self,
        filter: &FeatureFilter,
    ) -> Vec<&Probe> {
        self.resolve(&self.ids_by_feature(filter))
    }
}

impl ProbeSource for Annotator {
    fn lookup(
        &self,
        id: &str,
    ) -> Option<&Probe> {
        self.positions
            .get(id)
            .map(|&pos| &self.probes[pos])
    }

    fn all(&self) -> Vec<&Probe> { self.probes.iter().collect() }

    fn count(&self) -> usize { self.probes.len() }
}
