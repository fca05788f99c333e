//! Error types for layout configuration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid layout config: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Non-finite layout parameter {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type LayoutResult<T> = Result<T, LayoutError>;

impl From<gw_core::CoreError> for LayoutError {
    fn from(e: gw_core::CoreError) -> Self {
        let gw_core::CoreError::NonFinite { what, value } = e;
        LayoutError::NonFinite { what, value }
    }
}
