use thiserror::Error;

/// Failures from the fallible edges of the engine: parsing, validation and
/// design persistence. The calculators themselves never return errors.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("unknown unit system {0:?} (expected \"meters\" or \"feet\")")]
    UnknownUnitSystem(String),

    #[error("invalid channel configuration {0:?} (expected <mains>.<lfe>[.<height>])")]
    InvalidConfiguration(String),

    #[error("wall feature needs offset >= 0 and width > 0 (got offset {offset} m, width {width} m)")]
    InvalidFeatureSize { offset: f64, width: f64 },

    #[error("wall feature (offset {offset} m + width {width} m) exceeds the wall length {wall_length:.2} m")]
    FeatureExceedsWall {
        offset: f64,
        width: f64,
        wall_length: f64,
    },

    #[error("design name must not be blank")]
    InvalidDesignName,

    #[error("design not found: {0}")]
    DesignNotFound(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
