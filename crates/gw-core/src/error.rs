use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Numeric validation failures shared by the solver crates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
