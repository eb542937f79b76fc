//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/accounts/{number}', use [format_endpoint].

/// The route to create and list accounts.
pub const ACCOUNTS: &str = "/accounts";
/// The route to get, update and delete an account by its account number.
pub const ACCOUNT: &str = "/accounts/{number}";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/accounts/{number}', '{number}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter. `value` is inserted as is, so it should not
/// contain characters that need percent-encoding.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, value: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}
