//! Error types for the gw-app service layer.

use std::path::PathBuf;

/// Unified error for frontends; wraps every lower crate's error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Graph error: {0}")]
    Graph(#[from] gw_graph::GraphError),

    #[error("Layout error: {0}")]
    Layout(#[from] gw_layout::LayoutError),

    #[error("{0}")]
    Client(#[from] gw_client::ClientError),

    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read edge list: {path}")]
    EdgeFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for gw-app operations.
pub type AppResult<T> = Result<T, AppError>;
