//! Server configuration read from the environment.

use std::env::{self, VarError};

/// The port the server listens on if none is configured.
pub const DEFAULT_PORT: u16 = 5000;

/// The environment variable that may hold the server port.
pub const PORT_ENV_KEY: &str = "PORT";

/// Get a port number from the environment variable `env_key` if set, otherwise return `default_port`.
///
/// # Panics
/// This function may panic if the environment variable `env_key` is not valid unicode.
///
/// This function may panic if the environment variable `env_key` cannot be parsed as an integer.
///
/// ```rust,should_panic
/// use budget_api::parse_port_or_default;
///
/// unsafe { std::env::set_var("BUDGET_API_BAD_PORT", "123s"); }
/// // This will panic!
/// let port = parse_port_or_default("BUDGET_API_BAD_PORT", 1234);
/// # unsafe { std::env::remove_var("BUDGET_API_BAD_PORT"); }
/// ```
///
/// # Examples
///
/// ```
/// use budget_api::parse_port_or_default;
///
/// assert_eq!(parse_port_or_default("BUDGET_API_PORT", 1234), 1234);
///
/// unsafe { std::env::set_var("BUDGET_API_PORT", "4321"); }
/// assert_eq!(parse_port_or_default("BUDGET_API_PORT", 1234), 4321);
/// # unsafe { std::env::remove_var("BUDGET_API_PORT"); }
/// ```
pub fn parse_port_or_default(env_key: &str, default_port: u16) -> u16 {
    let port_string = match env::var(env_key) {
        Ok(string) => string,
        Err(VarError::NotPresent) => {
            tracing::debug!(
                "The environment variable '{}' was not set, using the default port {}.",
                env_key,
                default_port
            );
            return default_port;
        }
        Err(e) => {
            tracing::error!(
                "An error occurred retrieving the environment variable '{}': {}",
                env_key,
                e
            );
            panic!("could not read the environment variable '{env_key}': {e}");
        }
    };

    match port_string.parse() {
        Ok(port_number) => port_number,
        Err(e) => {
            tracing::error!(
                "An error occurred parsing the port number '{}' from the environment variable '{}': {}",
                port_string,
                env_key,
                e
            );
            panic!("could not parse the port number '{port_string}': {e}");
        }
    }
}
