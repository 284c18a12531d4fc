pub use crate::config::AnnotConfig;
pub use crate::data_structs::typedef::{
    PosType,
    ProbeId,
};
pub use crate::data_structs::{
    CpgContext,
    FeatureFilter,
    GenomicInterval,
    LocationTag,
    Probe,
    Strand,
};
pub use crate::error::{
    ConfigError,
    ParseError,
};
pub use crate::io::{
    read_manifest,
    read_manifest_path,
    read_variant_exclusions,
    read_variant_exclusions_path,
    VariantExclusion,
};
pub use crate::store::{
    filter_by_feature,
    get_probes,
    ids_of,
    intersect_ids,
    sort_by_coordinate,
    Annotator,
    ProbeSource,
    ProbeStore,
};
