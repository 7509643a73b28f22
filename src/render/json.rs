use serde::Serialize;

use crate::error::TrialsError;

pub fn to_pretty<T: Serialize>(value: &T) -> Result<String, TrialsError> {
    Ok(serde_json::to_string_pretty(value)?)
}
