use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use arcstr::ArcStr;
use csv::StringRecord;
use itertools::Itertools;
use log::{
    debug,
    info,
};

use crate::data_structs::typedef::{
    PosType,
    PROBE_ID_PREFIX,
};
use crate::data_structs::{
    Probe,
    Strand,
};
use crate::error::ParseError;
use crate::store::ProbeStore;
use crate::utils::{
    split_list,
    split_list_unique,
};

/// Ordinal offsets of the manifest columns that make up a [`Probe`].
pub mod columns {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    pub const CHROMOSOME: usize = 11;
    pub const COORDINATE: usize = 12;
    pub const SEQUENCE: usize = 13;
    pub const STRAND: usize = 16;
    pub const GENES: usize = 21;
    pub const REFSEQ: usize = 22;
    pub const LOCATION_TAGS: usize = 23;
    pub const CPG_CONTEXT: usize = 25;
}

/// A data row must reach the CpG context column.
pub const MANIFEST_MIN_FIELDS: usize = columns::CPG_CONTEXT + 1;
pub const LIST_SEPARATOR: char = ';';

pub(crate) fn is_probe_row(record: &StringRecord) -> bool {
    record
        .get(0)
        .is_some_and(|id| id.starts_with(PROBE_ID_PREFIX))
}

/// Maps csv record positions back to physical, 1-based line numbers.
///
/// The position csv reports for a record can sit on the terminator of the
/// previous line (the `\n` of a `\r\n` pair, or skipped blank lines), so
/// the line is taken from the first byte that is not a line terminator.
pub(crate) struct LineIndex<'a> {
    data:     &'a [u8],
    newlines: Vec<u64>,
}

impl<'a> LineIndex<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        let newlines = data
            .iter()
            .positions(|&b| b == b'\n')
            .map(|pos| pos as u64)
            .collect();
        Self { data, newlines }
    }

    pub(crate) fn line(
        &self,
        record: &StringRecord,
    ) -> u64 {
        let byte = record
            .position()
            .map(|p| p.byte() as usize)
            .unwrap_or_default()
            .min(self.data.len());
        let start = self.data[byte..]
            .iter()
            .position(|&b| b != b'\r' && b != b'\n')
            .map_or(self.data.len(), |offset| byte + offset) as u64;
        self.newlines.partition_point(|&nl| nl < start) as u64 + 1
    }
}

/// Reads the whole source so that row positions can be resolved to lines.
pub(crate) fn read_source<R: Read>(mut reader: R) -> anyhow::Result<Vec<u8>> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .context("Failed to read input")?;
    Ok(data)
}

/// Builds a [`Probe`] from a single manifest data row.
///
/// `line` is only used for error reporting.
pub fn probe_from_record(
    record: &StringRecord,
    line: u64,
) -> Result<Probe, ParseError> {
    if record.len() < MANIFEST_MIN_FIELDS {
        return Err(ParseError::MissingColumns {
            line,
            expected: MANIFEST_MIN_FIELDS,
            found: record.len(),
        });
    }
    let field = |idx: usize| record.get(idx).unwrap_or_default().trim();

    let chromosome = field(columns::CHROMOSOME);
    if chromosome.is_empty() {
        return Err(ParseError::EmptyChromosome { line });
    }
    let coordinate = field(columns::COORDINATE)
        .parse::<PosType>()
        .map_err(|_| {
            ParseError::InvalidCoordinate {
                line,
                value: field(columns::COORDINATE).to_string(),
            }
        })?;
    let strand = field(columns::STRAND)
        .parse::<Strand>()
        .unwrap_or_default();

    Ok(Probe::new(
        field(columns::ID).into(),
        field(columns::NAME).into(),
        field(columns::SEQUENCE).into(),
        chromosome.into(),
        coordinate,
        strand,
        split_list(field(columns::GENES), LIST_SEPARATOR)
            .map(ArcStr::from)
            .collect(),
        field(columns::REFSEQ).into(),
        split_list_unique(field(columns::LOCATION_TAGS), LIST_SEPARATOR)
            .map(ArcStr::from)
            .collect(),
        field(columns::CPG_CONTEXT).into(),
    ))
}

/// Parses a comma-delimited manifest into a [`ProbeStore`].
///
/// Rows whose first field does not start with `cg` (section markers, the
/// column header, control probes) are skipped. The first malformed data
/// row aborts the load with a [`ParseError`].
pub fn read_manifest<R: Read>(reader: R) -> anyhow::Result<ProbeStore> {
    let start = Instant::now();
    let data = read_source(reader)?;
    let lines = LineIndex::new(&data);
    let mut csv_reader = csv::ReaderBuilder::default()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_slice());

    let mut store = ProbeStore::new();
    let mut skipped = 0usize;
    for result in csv_reader.records() {
        let record = result.context("Failed to read manifest row")?;
        if !is_probe_row(&record) {
            skipped += 1;
            continue;
        }
        let line = lines.line(&record);
        let probe = probe_from_record(&record, line)?;
        let id = probe.id().clone();
        if store.insert(probe).is_none() {
            return Err(ParseError::DuplicateId { line, id }.into());
        }
    }

    debug!("Skipped {} non-probe manifest rows", skipped);
    info!(
        "Loaded {} probes in {}ms",
        store.len(),
        start.elapsed().as_millis()
    );
    Ok(store)
}

pub fn read_manifest_path<P: AsRef<Path>>(path: P) -> anyhow::Result<ProbeStore> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open manifest {}", path.display()))?;
    read_manifest(file)
        .with_context(|| format!("Failed to load manifest {}", path.display()))
}
