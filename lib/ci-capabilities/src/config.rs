use std::env::{self, VarError};

use crate::error::{CapabilityError, Result};

/// Reads `key` from the environment (or `.env`). An unset variable is `Ok(None)`.
pub fn optional_from_env(key: &str) -> Result<Option<String>> {
    dotenvy::dotenv().ok();
    interpret_var(key, env::var(key))
}

fn interpret_var(
    key: &str,
    value: std::result::Result<String, VarError>,
) -> Result<Option<String>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(CapabilityError::Config {
            key: key.to_string(),
            message: "value is not valid unicode".to_string(),
        }),
    }
}
