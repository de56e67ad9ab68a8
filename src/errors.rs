use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AirfoilError {
    /// A parameter lies outside the range in which the construction is geometrically meaningful.
    /// These are rejected before any curve is built.
    #[error("parameter `{name}` = {value} is out of range, expected {expected}")]
    Range {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// A parameter combination makes a control point mathematically undefined
    #[error("undefined control point: {0}")]
    Domain(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

pub type Result<T> = std::result::Result<T, AirfoilError>;
