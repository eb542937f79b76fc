//! Checks candidate account documents against the account field contract.

use serde_json::{Map, Value};

use crate::account::core::{
    AccountFields, AccountType, Balance, REQUIRED_FIELDS, parse_float,
};

/// The reason a candidate account document was rejected.
///
/// The messages are returned to clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is absent.
    #[error("Attribute {0} missing")]
    Missing(&'static str),

    /// A field is an empty or whitespace-only string.
    #[error("Attribute {0} empty")]
    Empty(&'static str),

    /// A free-text field holds something other than a string.
    #[error("Attribute {0} must be a string")]
    NotAString(&'static str),

    /// The account type is not one of the known types.
    #[error("Attribute type must be one of CR, CE, CV")]
    InvalidType,

    /// The balance cannot be read as a float.
    #[error("Attribute balance must be a float")]
    InvalidBalance,
}

/// Validate `candidate` and decode it into [AccountFields].
///
/// The checks run in a fixed order and stop at the first failure:
/// 1. every field in [REQUIRED_FIELDS], in order, must be present and, if it
///    is a string, must not be empty or whitespace.
/// 2. `type` must be one of [AccountType::ALL].
/// 3. `balance` must be a number or a string that parses as a float.
/// 4. the free-text fields must be strings.
///
/// Fields outside [REQUIRED_FIELDS] are ignored and dropped.
///
/// # Errors
/// Returns the [ValidationError] for the first check that failed.
pub fn validate_account(candidate: &Map<String, Value>) -> Result<AccountFields, ValidationError> {
    for field in REQUIRED_FIELDS {
        check_present(candidate, field)?;
    }

    let account_type = candidate
        .get("type")
        .and_then(Value::as_str)
        .and_then(AccountType::from_name)
        .ok_or(ValidationError::InvalidType)?;

    let balance = match candidate.get("balance") {
        Some(Value::Number(number)) => Balance::Number(number.clone()),
        Some(Value::String(text)) if parse_float(text).is_some() => Balance::Text(text.clone()),
        _ => return Err(ValidationError::InvalidBalance),
    };

    Ok(AccountFields {
        account_type,
        balance,
        cust_name: text_field(candidate, "cust_name")?,
        cust_firstname: text_field(candidate, "cust_firstname")?,
        cust_address: text_field(candidate, "cust_address")?,
        cust_dob: text_field(candidate, "cust_dob")?,
        number: text_field(candidate, "number")?,
    })
}

fn check_present(candidate: &Map<String, Value>, field: &'static str) -> Result<(), ValidationError> {
    match candidate.get(field) {
        None => Err(ValidationError::Missing(field)),
        Some(Value::String(text)) if text.trim().is_empty() => Err(ValidationError::Empty(field)),
        Some(_) => Ok(()),
    }
}

fn text_field(candidate: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    match candidate.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(ValidationError::NotAString(field)),
        None => Err(ValidationError::Missing(field)),
    }
}
