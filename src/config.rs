//! Location of the annotation sources.
//!
//! All paths are resolved against an explicit data directory. The manifest
//! itself is named indirectly by a pointer file inside that directory whose
//! last non-empty line holds the manifest file name.

use std::fs;
use std::io::Read;
use std::path::{
    Path,
    PathBuf,
};

use anyhow::Context;
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::ConfigError;
use crate::with_field_fn;

pub const DATA_DIR_ENV: &str = "PROBEANNOT_DATA_DIR";
pub const DEFAULT_POINTER_FILE: &str = "config.ini";
pub const DEFAULT_VARIANT_TABLE: &str =
    "humanmethylation450_dbsnp137.snpupdate.table.v2.sorted.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotConfig {
    data_dir:      PathBuf,
    #[serde(default = "default_pointer_file")]
    pointer_file:  String,
    /// Variant exclusion table, relative to `data_dir`. Variant filtering is
    /// skipped when unset.
    #[serde(default)]
    variant_table: Option<String>,
}

fn default_pointer_file() -> String { DEFAULT_POINTER_FILE.to_string() }

impl AnnotConfig {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir:      data_dir.into(),
            pointer_file:  default_pointer_file(),
            variant_table: None,
        }
    }

    /// Reads the data directory from `PROBEANNOT_DATA_DIR`.
    pub fn from_env() -> anyhow::Result<Self> {
        let data_dir = std::env::var_os(DATA_DIR_ENV)
            .ok_or(ConfigError::MissingDataDir(DATA_DIR_ENV))?;
        Ok(Self::new(data_dir))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
        serde_json::from_reader(reader).context("Failed to parse config")
    }

    with_field_fn!(pointer_file, String);

    with_field_fn!(variant_table, Option<String>);

    /// Enables variant filtering with the standard 450k dbSNP table.
    pub fn with_default_variant_table(self) -> Self {
        self.with_variant_table(Some(DEFAULT_VARIANT_TABLE.to_string()))
    }

    pub fn data_dir(&self) -> &Path { &self.data_dir }

    pub fn pointer_path(&self) -> PathBuf { self.data_dir.join(&self.pointer_file) }

    /// Resolves the manifest named by the pointer file.
    pub fn manifest_path(&self) -> anyhow::Result<PathBuf> {
        let pointer = self.pointer_path();
        let contents = fs::read_to_string(&pointer).with_context(|| {
            format!("Failed to read pointer file {}", pointer.display())
        })?;
        let name = contents
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .last()
            .ok_or(ConfigError::EmptyPointerFile(pointer.clone()))?;
        Ok(self.data_dir.join(name))
    }

    pub fn variant_table_path(&self) -> Option<PathBuf> {
        self.variant_table
            .as_ref()
            .map(|name| self.data_dir.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The variable is process-wide, both cases run in one test.
    #[test]
    fn test_from_env() {
        let previous = std::env::var_os(DATA_DIR_ENV);

        std::env::remove_var(DATA_DIR_ENV);
        let err = AnnotConfig::from_env().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingDataDir(DATA_DIR_ENV))
        ));

        let dir = tempfile::tempdir().unwrap();
        std::env::set_var(DATA_DIR_ENV, dir.path());
        let config = AnnotConfig::from_env().unwrap();
        assert_eq!(config.data_dir(), dir.path());
        assert_eq!(config.pointer_path(), dir.path().join(DEFAULT_POINTER_FILE));
        assert_eq!(config.variant_table_path(), None);

        match previous {
            Some(value) => std::env::set_var(DATA_DIR_ENV, value),
            None => std::env::remove_var(DATA_DIR_ENV),
        }
    }
}
