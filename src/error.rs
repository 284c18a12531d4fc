//! Typed errors for the load phase.
//!
//! Loading functions return [`anyhow::Result`]; the structural failures
//! below can be recovered from it with `downcast_ref`. A missing probe is
//! not an error: lookups return `None`.

use std::path::PathBuf;

use crate::data_structs::typedef::ProbeId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MissingColumns {
        line:     u64,
        expected: usize,
        found:    usize,
    },
    #[error("line {line}: invalid coordinate {value:?}")]
    InvalidCoordinate { line: u64, value: String },
    #[error("line {line}: empty chromosome")]
    EmptyChromosome { line: u64 },
    #[error("line {line}: duplicate probe id {id}")]
    DuplicateId { line: u64, id: ProbeId },
}

impl ParseError {
    pub fn line(&self) -> u64 {
        match self {
            ParseError::MissingColumns { line, .. }
            | ParseError::InvalidCoordinate { line, .. }
            | ParseError::EmptyChromosome { line }
            | ParseError::DuplicateId { line, .. } => *line,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("pointer file {0} does not name a manifest")]
    EmptyPointerFile(PathBuf),
    #[error("data directory is not set (use {0})")]
    MissingDataDir(&'static str),
}
