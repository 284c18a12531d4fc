use arcstr::ArcStr;

/// Probe identifier, e.g. `cg00000029`.
pub type ProbeId = ArcStr;
/// 1-based genomic coordinate.
pub type PosType = u32;
pub type BetaType = f64;

/// Prefix that marks data rows in both the manifest and the variant
/// exclusion table.
pub const PROBE_ID_PREFIX: &str = "cg";
