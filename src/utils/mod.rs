//! This module contains utility functions and helper macros used throughout
//! the probeannot crate.
//!
//! - The crate-wide [`THREAD_POOL`] used for parallel scans over probe
//!   records.
//! - Macros for common struct operations (getter functions, builder-style
//!   `with_*` methods).
//! - Helpers for splitting delimited manifest fields.

use itertools::Itertools;
use once_cell::sync::Lazy;
use rayon::{
    ThreadPool,
    ThreadPoolBuilder,
};

pub const NUM_THREADS_ENV: &str = "PROBEANNOT_NUM_THREADS";

pub static THREAD_POOL: Lazy<ThreadPool> = Lazy::new(|| {
    let num_threads: Option<usize> = std::env::var(NUM_THREADS_ENV)
        .ok()
        .and_then(|str| str.parse::<usize>().ok());
    ThreadPoolBuilder::new()
        .num_threads(num_threads.unwrap_or(0))
        .build()
        .expect("Failed to create thread pool")
});

pub fn n_threads() -> usize {
    THREAD_POOL.current_num_threads()
}

#[macro_export]
macro_rules! getter_fn {
    ($field_name: ident, $field_type: ty) => {
        pub fn $field_name(&self) -> &$field_type {
            &self.$field_name
        }
    };
}

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
            self.$field_name = value;
            self
            }
        }
    };
}

/// Splits a `sep`-joined manifest field into its non-empty, trimmed items.
pub fn split_list(
    field: &str,
    sep: char,
) -> impl Iterator<Item = &str> {
    field
        .split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Same as [`split_list`], but keeps only the first occurrence of each item.
pub fn split_list_unique(
    field: &str,
    sep: char,
) -> impl Iterator<Item = &str> {
    split_list(field, sep).unique()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_pool_is_sized() {
        assert!(n_threads() >= 1);
    }

    #[test]
    fn test_split_list_drops_empty() {
        let items = split_list("BRCA1;;BRCA2; ", ';').collect_vec();
        assert_eq!(items, vec!["BRCA1", "BRCA2"]);
        assert_eq!(split_list("", ';').count(), 0);
    }

    #[test]
    fn test_split_list_unique_keeps_first_seen_order() {
        let items = split_list_unique("Body;TSS200;Body;Exon;TSS200", ';')
            .collect_vec();
        assert_eq!(items, vec!["Body", "TSS200", "Exon"]);
    }
}
