use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use arcstr::ArcStr;

use crate::data_structs::enums::{
    CpgContext,
    LocationTag,
};
use crate::data_structs::probe::Probe;

/// Selector over one of the three annotation categories of a [`Probe`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeatureFilter {
    /// Membership in [`Probe::location_tags`].
    Location(ArcStr),
    /// Substring of [`Probe::cpg_context`].
    CpgContext(ArcStr),
    /// Membership in [`Probe::genes`].
    Gene(ArcStr),
}

impl FeatureFilter {
    /// Resolves the category of `value`: a [`LocationTag`] spelling selects
    /// `Location`, a [`CpgContext`] spelling selects `CpgContext` and
    /// anything else is taken as a gene name.
    pub fn classify(value: &str) -> Self {
        if LocationTag::is_member(value) {
            FeatureFilter::Location(value.into())
        }
        else if CpgContext::is_member(value) {
            FeatureFilter::CpgContext(value.into())
        }
        else {
            FeatureFilter::Gene(value.into())
        }
    }

    pub fn value(&self) -> &ArcStr {
        match self {
            FeatureFilter::Location(v)
            | FeatureFilter::CpgContext(v)
            | FeatureFilter::Gene(v) => v,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            FeatureFilter::Location(_) => "Location",
            FeatureFilter::CpgContext(_) => "CpgContext",
            FeatureFilter::Gene(_) => "Gene",
        }
    }

    pub fn matches(
        &self,
        probe: &Probe,
    ) -> bool {
        match self {
            FeatureFilter::Location(tag) => probe.has_location(tag),
            FeatureFilter::CpgContext(ctx) => probe.in_cpg_context(ctx),
            FeatureFilter::Gene(gene) => probe.has_gene(gene),
        }
    }
}

impl From<&str> for FeatureFilter {
    fn from(value: &str) -> Self { Self::classify(value) }
}

impl From<LocationTag> for FeatureFilter {
    fn from(value: LocationTag) -> Self {
        FeatureFilter::Location(value.as_str().into())
    }
}

impl From<CpgContext> for FeatureFilter {
    fn from(value: CpgContext) -> Self {
        FeatureFilter::CpgContext(value.as_str().into())
    }
}

impl FromStr for FeatureFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(Self::classify(s)) }
}

impl Display for FeatureFilter {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}={}", self.category(), self.value())
    }
}
