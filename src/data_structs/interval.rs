use std::fmt::Display;
use std::str::FromStr;

use anyhow::{
    anyhow,
    Context,
};
use arcstr::ArcStr;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::probe::Probe;
use crate::data_structs::typedef::PosType;

/// A chromosomal interval used for region queries.
///
/// Both bounds are exclusive: a coordinate `c` lies within the interval iff
/// `start < c < end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenomicInterval {
    chromosome: ArcStr,
    start:      PosType,
    end:        PosType,
}

impl GenomicInterval {
    /// Creates a new `GenomicInterval`. An interval with `end <= start + 1`
    /// is valid and contains nothing.
    pub fn new<S: Into<ArcStr>>(
        chromosome: S,
        start: PosType,
        end: PosType,
    ) -> Self {
        Self {
            chromosome: chromosome.into(),
            start,
            end,
        }
    }

    pub fn chromosome(&self) -> &ArcStr { &self.chromosome }

    pub fn start(&self) -> PosType { self.start }

    pub fn end(&self) -> PosType { self.end }

    pub fn contains(
        &self,
        chromosome: &str,
        coordinate: PosType,
    ) -> bool {
        self.chromosome.as_str() == chromosome
            && self.start < coordinate
            && coordinate < self.end
    }

    pub fn contains_probe(
        &self,
        probe: &Probe,
    ) -> bool {
        self.contains(probe.chromosome(), probe.coordinate())
    }
}

impl Display for GenomicInterval {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.chromosome, self.start, self.end)
    }
}

impl FromStr for GenomicInterval {
    type Err = anyhow::Error;

    /// Parses `chr:start-end`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chromosome, range) = s
            .rsplit_once(':')
            .ok_or_else(|| anyhow!("Missing ':' in interval {:?}", s))?;
        let (start, end) = range
            .split_once('-')
            .ok_or_else(|| anyhow!("Missing '-' in interval {:?}", s))?;
        if chromosome.is_empty() {
            return Err(anyhow!("Empty chromosome in interval {:?}", s));
        }
        let start = start
            .trim()
            .parse::<PosType>()
            .with_context(|| format!("Invalid start in interval {:?}", s))?;
        let end = end
            .trim()
            .parse::<PosType>()
            .with_context(|| format!("Invalid end in interval {:?}", s))?;
        Ok(Self::new(chromosome, start, end))
    }
}
