use std::path::Path;

use hashbrown::HashSet;
use indexmap::IndexMap;
use log::{
    info,
    warn,
};

use crate::config::AnnotConfig;
use crate::data_structs::typedef::ProbeId;
use crate::data_structs::Probe;
use crate::io::{
    read_manifest_path,
    read_variant_exclusions_path,
    VariantExclusion,
};
use crate::store::Annotator;

/// Read access shared by the mutable [`ProbeStore`] and the frozen
/// [`Annotator`].
pub trait ProbeSource {
    /// Plain lookup, without logging.
    fn lookup(
        &self,
        id: &str,
    ) -> Option<&Probe>;

    /// All probes in store order.
    fn all(&self) -> Vec<&Probe>;

    fn count(&self) -> usize;

    /// Returns the probe with `id`, logging a warning if there is none.
    fn get(
        &self,
        id: &str,
    ) -> Option<&Probe> {
        let probe = self.lookup(id);
        if probe.is_none() {
            warn!("No probe with id of {} found", id);
        }
        probe
    }

    /// Resolves every id independently, keeping input order and duplicates.
    fn get_many<I, S>(
        &self,
        ids: I,
    ) -> Vec<Option<&Probe>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>, {
        ids.into_iter()
            .map(|id| self.get(id.as_ref()))
            .collect()
    }

    fn all_ids(&self) -> HashSet<ProbeId> {
        self.all()
            .into_iter()
            .map(|p| p.id().clone())
            .collect()
    }

    fn is_empty(&self) -> bool { self.count() == 0 }
}

/// Probe records keyed by id, in manifest order.
///
/// This is the load-phase container: records are inserted by the manifest
/// parser and pruned by the variant filter. Call [`ProbeStore::freeze`] to
/// obtain the read-only [`Annotator`] used for queries.
#[derive(Debug, Clone, Default)]
pub struct ProbeStore {
    probes: IndexMap<ProbeId, Probe>,
}

impl ProbeStore {
    pub fn new() -> Self { Self::default() }

    /// Loads the manifest named by `config` and, if a variant table is
    /// configured, removes the affected probes.
    pub fn from_config(config: &AnnotConfig) -> anyhow::Result<Self> {
        let mut store = read_manifest_path(config.manifest_path()?)?;
        if let Some(variant_table) = config.variant_table_path() {
            store.remove_variants_from_path(variant_table)?;
        }
        Ok(store)
    }

    /// Inserts `probe`, returning `None` without modifying the store if its
    /// id is already present.
    pub fn insert(
        &mut self,
        probe: Probe,
    ) -> Option<()> {
        if self.probes.contains_key(probe.id()) {
            None
        }
        else {
            self.probes.insert(probe.id().clone(), probe);
            Some(())
        }
    }

    /// Removes the probe with `id`. Removing an absent id is a no-op.
    pub fn remove(
        &mut self,
        id: &str,
    ) -> Option<Probe> {
        self.probes.shift_remove(id)
    }

    /// Removes every probe listed in `exclusions`. Ids may repeat and may
    /// be absent from the store.
    pub fn remove_variants<I>(
        &mut self,
        exclusions: I,
    ) where
        I: IntoIterator<Item = VariantExclusion>, {
        let excluded = exclusions
            .into_iter()
            .map(|v| v.probe_id)
            .collect::<HashSet<_>>();
        let before = self.len();
        self.probes
            .retain(|id, _| !excluded.contains(id));
        info!(
            "Removed {} variant-affected probes ({} distinct ids listed)",
            before - self.len(),
            excluded.len()
        );
    }

    pub fn remove_variants_from_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> anyhow::Result<()> {
        let exclusions = read_variant_exclusions_path(path)?;
        self.remove_variants(exclusions);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Probe> { self.probes.values() }

    pub fn len(&self) -> usize { self.probes.len() }

    /// Ends the load phase.
    pub fn freeze(self) -> Annotator { Annotator::from(self) }

    pub(crate) fn into_probes(self) -> Vec<Probe> {
        self.probes.into_values().collect()
    }
}

impl ProbeSource for ProbeStore {
    fn lookup(
        &self,
        id: &str,
    ) -> Option<&Probe> {
        self.probes.get(id)
    }

    fn all(&self) -> Vec<&Probe> { self.iter().collect() }

    fn count(&self) -> usize { self.len() }
}

impl FromIterator<Probe> for ProbeStore {
    fn from_iter<T: IntoIterator<Item = Probe>>(iter: T) -> Self {
        let mut new_self = Self::new();
        iter.into_iter().for_each(|probe| {
            new_self.insert(probe);
        });
        new_self
    }
}
