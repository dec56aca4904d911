//! The API endpoints URIs.
//!
//! For endpoints that take parameters, e.g. '/api/accounts/{user}', use [format_endpoint].

/// The route that describes the server.
pub const INFO: &str = "/api";
/// The info route with a trailing slash.
pub const INFO_SLASH: &str = "/api/";
/// The route for creating accounts.
pub const ACCOUNTS: &str = "/api/accounts";
/// The route to access a single account.
pub const ACCOUNT: &str = "/api/accounts/{user}";
/// The route for adding transactions to an account.
pub const TRANSACTIONS: &str = "/api/accounts/{user}/transactions";
/// The route to access a single transaction in an account.
pub const TRANSACTION: &str = "/api/accounts/{user}/transactions/{transaction_id}";

/// Replace the parameters in `endpoint_path` with `values`, in order.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/accounts/{user}', '{user}' is the parameter.
///
/// Parameters without a matching value, and values without a matching
/// parameter, are left as is and ignored respectively.
pub fn format_endpoint(endpoint_path: &str, values: &[&str]) -> String {
    let mut formatted = String::with_capacity(endpoint_path.len());
    let mut rest = endpoint_path;
    let mut values = values.iter();

    while let Some(param_start) = rest.find('{') {
        let Some(param_len) = rest[param_start..].find('}') else {
            break;
        };
        let Some(value) = values.next() else {
            break;
        };

        formatted.push_str(&rest[..param_start]);
        formatted.push_str(value);
        rest = &rest[param_start + param_len + 1..];
    }

    formatted.push_str(rest);
    formatted
}
