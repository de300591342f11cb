/// Configuration validation errors.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Drawing area must have positive, finite dimensions (got {width}x{height})")]
    InvalidArea { width: f32, height: f32 },
    #[error("Population size must be non-zero")]
    EmptyPopulation,
    #[error("History capacity must be non-zero")]
    EmptyHistory,
    #[error("Timing value `{0}` must be positive")]
    InvalidInterval(&'static str),
}
