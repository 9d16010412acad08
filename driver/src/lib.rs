use crate::error::DriverError;

pub mod config;
pub mod error;
pub mod logging;
pub mod notify;
pub mod store;

/// Reads `key` from the process environment or a `.env` file.
pub(crate) fn env(key: &str) -> Result<Option<String>, DriverError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err(DriverError::from(error)),
    }
}
