use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("no raster supplied")]
    EmptyInput,

    #[error("failed to decode raster: {0}")]
    Decode(#[from] tiff::TiffError),

    #[error("invalid grid dimensions {width}x{height} ({reason})")]
    Dimension {
        width: usize,
        height: usize,
        reason: &'static str,
    },

    #[error("ragged grid: row {row} has {len} columns, expected {expected}")]
    RaggedRows { row: usize, len: usize, expected: usize },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
