use thiserror::Error;

use crate::field::Field;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A record reached catalog construction without a required value.
    #[error("record {index} is missing required field {field}")]
    MissingRequiredValue { index: usize, field: Field },
}

pub type Result<T> = std::result::Result<T, ModelError>;
