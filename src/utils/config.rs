/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::str::FromStr;
use tracing::{error, warn};

/// Reads and parses an environment variable, falling back to `default`
///
/// A variable that is set but cannot be parsed is reported and replaced by the
/// default as well.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T {
    let Ok(raw) = env::var(env_var) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!("Failed to parse {}: {}, using default", env_var, raw);
            default
        }
    }
}

/// Reads and parses an environment variable, `None` when unset or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T> {
    let raw = env::var(env_var).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Failed to parse {}: {}, ignoring it", env_var, raw);
            None
        }
    }
}

/// Reads a credential-like variable that the client cannot work without
///
/// Missing or blank values are logged as errors and returned as an empty
/// string; the service rejects the request later with a proper status.
pub fn get_env_required(env_var: &str) -> String {
    match env::var(env_var) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            error!("{} not found in environment variables or .env file", env_var);
            String::new()
        }
    }
}
