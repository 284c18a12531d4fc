/// ***********************************************************************
/// *****
/// * Copyright (c) 2025
/// ***********************************************************************
/// ****

pub use {
    anyhow,
    arcstr,
    itertools,
    log,
    pretty_env_logger,
    rayon,
    serde,
    serde_json,
};
