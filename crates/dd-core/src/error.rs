use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Not a number: {raw:?}")]
    NotNumeric { raw: String },

    #[error("Unrecognized timestamp: {raw:?}")]
    Timestamp { raw: String },
}
