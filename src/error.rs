//! Error type shared by the board, the heading pass and configuration loading.

use crate::data::points::PointId;

#[derive(Debug, thiserror::Error)]
pub enum PinError {
    /// An identifier outside the range handed out by the registry.
    #[error("no pin with id {id}")]
    NotFound { id: PointId },

    #[error("invalid front matter: {0}")]
    FrontMatter(#[source] serde_yaml::Error),

    #[error("invalid YAML configuration: {0}")]
    Config(#[source] serde_yaml::Error),

    #[error("invalid JSON configuration: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = PinError> = std::result::Result<T, E>;
