//! Defines the endpoint for updating an account
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::{Connection, params};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::{
    AppState, Error,
    account::{
        core::{AccountFields, AccountId, MUTABLE_FIELDS, get_account_by_number},
        validation::validate_account,
    },
    collection::Collection,
    status::StatusResponse,
};

/// The failure message for updates to an account number that does not exist.
pub const NO_ACCOUNT_FOUND: &str = "No account was found with provided account number";

/// The state needed to edit an account.
#[derive(Debug, Clone)]
pub struct EditAccountState {
    /// The database connection for managing accounts.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The collection accounts are stored in.
    pub collection: Collection,
}

impl FromRef<AppState> for EditAccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            collection: state.collection.clone(),
        }
    }
}

/// A partial account sent to update an existing account.
///
/// A field is `Some` whenever the key was in the request body, including
/// when its value is `null`. Any `number` in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct AccountPatch {
    #[serde(rename = "type", default, deserialize_with = "present")]
    account_type: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    balance: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    cust_name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    cust_firstname: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    cust_address: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    cust_dob: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl AccountPatch {
    /// Overwrite the fields of `document` with the fields set in this patch.
    pub fn apply(self, document: &mut Map<String, Value>) {
        let values = [
            self.account_type,
            self.balance,
            self.cust_name,
            self.cust_firstname,
            self.cust_address,
            self.cust_dob,
        ];

        for (field, value) in MUTABLE_FIELDS.into_iter().zip(values) {
            if let Some(value) = value {
                document.insert(field.to_owned(), value);
            }
        }
    }
}

/// A route handler for updating the first account with the given account number.
///
/// The fields in the request body are merged into the stored account and the
/// result is validated before it is saved.
pub async fn edit_account_endpoint(
    State(state): State<EditAccountState>,
    Path(number): Path<String>,
    Json(patch): Json<AccountPatch>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    let account = match get_account_by_number(&number, &state.collection, &connection) {
        Ok(Some(account)) => account,
        Ok(None) => return StatusResponse::failure(NO_ACCOUNT_FOUND).into_response(),
        Err(error) => {
            tracing::error!("Could not get account {number}: {error}");
            return error.into_response();
        }
    };

    let mut document = account.fields.to_document();
    patch.apply(&mut document);

    let fields = match validate_account(&document) {
        Ok(fields) => fields,
        Err(error) => {
            tracing::debug!("Rejected update to account {number}: {error}");
            return StatusResponse::failure(error).into_response();
        }
    };

    match update_account(account.id, &fields, &state.collection, &connection) {
        Ok(_) => StatusResponse::Success.into_response(),
        Err(error) => {
            tracing::error!("Could not update account {number}: {error}");
            error.into_response()
        }
    }
}

type RowsAffected = usize;

fn update_account(
    id: AccountId,
    fields: &AccountFields,
    collection: &Collection,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    let document = serde_json::to_string(fields)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    connection
        .execute(
            &format!(
                "UPDATE \"{collection}\" \
                SET number = ?1, document = ?2 \
                WHERE id = ?3"
            ),
            params![fields.number, document, id],
        )
        .map_err(Error::from)
}
