use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use arcstr::ArcStr;
use log::debug;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::ProbeId;
use crate::error::ParseError;
use crate::io::manifest::{
    is_probe_row,
    read_source,
    LineIndex,
};

pub const VARIANT_MIN_FIELDS: usize = 2;

/// A probe known to overlap a genetic variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantExclusion {
    pub probe_id:   ProbeId,
    pub variant_id: ArcStr,
}

impl VariantExclusion {
    pub fn new<P: Into<ProbeId>, V: Into<ArcStr>>(
        probe_id: P,
        variant_id: V,
    ) -> Self {
        Self {
            probe_id:   probe_id.into(),
            variant_id: variant_id.into(),
        }
    }
}

/// Reads a tab-delimited exclusion table (`probe_id<TAB>variant_id[...]`).
///
/// No header is expected; rows not starting with `cg` are ignored and any
/// columns past the second are discarded.
pub fn read_variant_exclusions<R: Read>(
    reader: R
) -> anyhow::Result<Vec<VariantExclusion>> {
    let data = read_source(reader)?;
    let lines = LineIndex::new(&data);
    let mut csv_reader = csv::ReaderBuilder::default()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(data.as_slice());

    let mut exclusions = Vec::new();
    for result in csv_reader.records() {
        let record = result.context("Failed to read variant table row")?;
        if !is_probe_row(&record) {
            continue;
        }
        if record.len() < VARIANT_MIN_FIELDS {
            return Err(ParseError::MissingColumns {
                line:     lines.line(&record),
                expected: VARIANT_MIN_FIELDS,
                found:    record.len(),
            }
            .into());
        }
        exclusions.push(VariantExclusion::new(
            record[0].trim(),
            record[1].trim(),
        ));
    }

    debug!("Read {} variant exclusions", exclusions.len());
    Ok(exclusions)
}

pub fn read_variant_exclusions_path<P: AsRef<Path>>(
    path: P
) -> anyhow::Result<Vec<VariantExclusion>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| {
        format!("Failed to open variant table {}", path.display())
    })?;
    read_variant_exclusions(file)
        .with_context(|| format!("Failed to load variant table {}", path.display()))
}
