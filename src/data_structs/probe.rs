use arcstr::ArcStr;
use serde::Serialize;

use crate::data_structs::enums::Strand;
use crate::data_structs::typedef::{
    BetaType,
    PosType,
    ProbeId,
};
use crate::getter_fn;

/// A single methylation array probe, i.e. one data row of the manifest.
///
/// Everything except [`Probe::beta`] is fixed once the record is parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Probe {
    id:            ProbeId,
    name:          ArcStr,
    sequence:      ArcStr,
    chromosome:    ArcStr,
    coordinate:    PosType,
    strand:        Strand,
    genes:         Vec<ArcStr>,
    refseq:        ArcStr,
    location_tags: Vec<ArcStr>,
    cpg_context:   ArcStr,
    beta:          Option<BetaType>,
}

impl Probe {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ProbeId,
        name: ArcStr,
        sequence: ArcStr,
        chromosome: ArcStr,
        coordinate: PosType,
        strand: Strand,
        genes: Vec<ArcStr>,
        refseq: ArcStr,
        location_tags: Vec<ArcStr>,
        cpg_context: ArcStr,
    ) -> Self {
        Self {
            id,
            name,
            sequence,
            chromosome,
            coordinate,
            strand,
            genes,
            refseq,
            location_tags,
            cpg_context,
            beta: None,
        }
    }

    getter_fn!(id, ProbeId);

    getter_fn!(name, ArcStr);

    getter_fn!(sequence, ArcStr);

    getter_fn!(chromosome, ArcStr);

    getter_fn!(genes, Vec<ArcStr>);

    getter_fn!(refseq, ArcStr);

    getter_fn!(location_tags, Vec<ArcStr>);

    getter_fn!(cpg_context, ArcStr);

    pub fn coordinate(&self) -> PosType { self.coordinate }

    pub fn strand(&self) -> Strand { self.strand }

    /// Methylation level attached from sample data, if any.
    pub fn beta(&self) -> Option<BetaType> { self.beta }

    pub fn set_beta(
        &mut self,
        beta: Option<BetaType>,
    ) {
        self.beta = beta;
    }

    pub fn with_beta(
        mut self,
        beta: Option<BetaType>,
    ) -> Self {
        self.beta = beta;
        self
    }

    pub fn has_gene(
        &self,
        gene: &str,
    ) -> bool {
        self.genes.iter().any(|g| g.as_str() == gene)
    }

    pub fn has_location(
        &self,
        tag: &str,
    ) -> bool {
        self.location_tags
            .iter()
            .any(|t| t.as_str() == tag)
    }

    /// Substring test against the CpG context, so `"Shore"` matches both
    /// `N_Shore` and `S_Shore`.
    pub fn in_cpg_context(
        &self,
        value: &str,
    ) -> bool {
        self.cpg_context.contains(value)
    }
}
