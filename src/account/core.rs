use rusqlite::{Connection, OptionalExtension, params, types::Type};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, collection::Collection};

/// The internal, generated identifier of a stored account.
pub type AccountId = i64;

/// The fields every account must have, in the order they are validated.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "type",
    "balance",
    "cust_name",
    "cust_firstname",
    "cust_address",
    "cust_dob",
    "number",
];

/// The fields that may be changed after an account has been created.
///
/// The account `number` identifies the account and cannot be changed.
pub const MUTABLE_FIELDS: [&str; 6] = [
    "type",
    "balance",
    "cust_name",
    "cust_firstname",
    "cust_address",
    "cust_dob",
];

/// The kind of account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    /// CR account.
    CR,
    /// CE account.
    CE,
    /// CV account.
    CV,
}

impl AccountType {
    /// Every account type, in the order they are listed to clients.
    pub const ALL: [AccountType; 3] = [AccountType::CR, AccountType::CE, AccountType::CV];

    /// The account type as it appears in JSON documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::CR => "CR",
            AccountType::CE => "CE",
            AccountType::CV => "CV",
        }
    }

    /// Parse an account type from its exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|account_type| account_type.as_str() == name)
    }
}

/// An account balance in the JSON form it was submitted in.
///
/// Clients may send the balance as a JSON number or as a string holding a
/// number, e.g. `"12.5"`. Both forms are stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Balance {
    /// A JSON number.
    Number(serde_json::Number),
    /// A string that parses as a float.
    Text(String),
}

impl From<Balance> for Value {
    fn from(balance: Balance) -> Self {
        match balance {
            Balance::Number(number) => Value::Number(number),
            Balance::Text(text) => Value::String(text),
        }
    }
}

/// Parse `text` as a float, ignoring surrounding whitespace.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// The seven fields that make up an account document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountFields {
    /// The kind of account.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// The amount of money in the account.
    pub balance: Balance,
    /// The customer's last name.
    pub cust_name: String,
    /// The customer's first name.
    pub cust_firstname: String,
    /// The customer's postal address.
    pub cust_address: String,
    /// The customer's date of birth, as entered by the client.
    pub cust_dob: String,
    /// The account number clients use to look up the account.
    pub number: String,
}

impl AccountFields {
    /// Convert the fields into a loosely typed JSON object.
    pub fn to_document(&self) -> Map<String, Value> {
        let mut document = Map::new();
        document.insert(
            "type".to_owned(),
            Value::String(self.account_type.as_str().to_owned()),
        );
        document.insert("balance".to_owned(), self.balance.clone().into());
        document.insert(
            "cust_name".to_owned(),
            Value::String(self.cust_name.clone()),
        );
        document.insert(
            "cust_firstname".to_owned(),
            Value::String(self.cust_firstname.clone()),
        );
        document.insert(
            "cust_address".to_owned(),
            Value::String(self.cust_address.clone()),
        );
        document.insert("cust_dob".to_owned(), Value::String(self.cust_dob.clone()));
        document.insert("number".to_owned(), Value::String(self.number.clone()));

        document
    }
}

/// A customer account stored in a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    /// The id generated when the account was inserted.
    #[serde(rename = "_id")]
    pub id: AccountId,
    /// The account document.
    #[serde(flatten)]
    pub fields: AccountFields,
}

/// Create the table that backs `collection`.
///
/// The `number` column duplicates the document's account number so that
/// lookups do not need to parse every document. It is deliberately not
/// unique.
pub fn create_account_table(
    collection: &Collection,
    connection: &Connection,
) -> Result<(), rusqlite::Error> {
    connection.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS \"{collection}\" (
                id INTEGER PRIMARY KEY,
                number TEXT NOT NULL,
                document TEXT NOT NULL
            )"
        ),
        (),
    )?;

    Ok(())
}

/// Map a row of `id, document` to an [Account].
pub fn map_row_to_account(row: &rusqlite::Row) -> Result<Account, rusqlite::Error> {
    let id = row.get(0)?;
    let document: String = row.get(1)?;
    let fields = serde_json::from_str(&document)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(error)))?;

    Ok(Account { id, fields })
}

/// Get the first account, in insertion order, with the account `number`.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails or a stored document cannot
/// be decoded.
pub fn get_account_by_number(
    number: &str,
    collection: &Collection,
    connection: &Connection,
) -> Result<Option<Account>, Error> {
    connection
        .query_row(
            &format!(
                "SELECT id, document FROM \"{collection}\" WHERE number = ?1 ORDER BY id LIMIT 1"
            ),
            params![number],
            map_row_to_account,
        )
        .optional()
        .map_err(Error::from)
}
