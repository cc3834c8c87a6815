use thiserror::Error;

/// Errors reported by [`Grid`](crate::grid::Grid) and the evolution functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("cell ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("alive probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("grid dimensions differ: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },
}

/// Errors reported when validating a [`LifeConfig`](crate::config::LifeConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("pixel size must be positive")]
    ZeroPixelSize,

    #[error("fps must be positive")]
    ZeroFps,

    #[error("window {width}x{height} px cannot hold a single {pixel_size} px cell")]
    WindowTooSmall {
        width: u32,
        height: u32,
        pixel_size: u32,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}
