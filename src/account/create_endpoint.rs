//! Defines the endpoint for creating a new account.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    AppState, Error,
    account::{
        Account,
        core::{AccountFields, AccountId},
        validation::validate_account,
    },
    collection::Collection,
    status::StatusResponse,
};

/// The state needed to create an account.
#[derive(Debug, Clone)]
pub struct CreateAccountState {
    /// The database connection for managing accounts.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The collection accounts are stored in.
    pub collection: Collection,
}

impl FromRef<AppState> for CreateAccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            collection: state.collection.clone(),
        }
    }
}

/// The response body for a newly created account.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatedAccount {
    /// The generated id of the new account.
    pub cust_id: AccountId,
}

/// A route handler for creating a new account.
///
/// Responds with the generated account id, or a failure envelope if the
/// request body is not a valid account.
pub async fn create_account_endpoint(
    State(state): State<CreateAccountState>,
    Json(candidate): Json<Map<String, Value>>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    let fields = match validate_account(&candidate) {
        Ok(fields) => fields,
        Err(error) => {
            tracing::debug!("Rejected new account: {error}");
            return StatusResponse::failure(error).into_response();
        }
    };

    match create_account(&fields, &state.collection, &connection) {
        Ok(account) => Json(CreatedAccount {
            cust_id: account.id,
        })
        .into_response(),
        Err(error) => {
            tracing::error!("Could not create account {fields:?}: {error}");
            error.into_response()
        }
    }
}

/// Insert the account `fields` into `collection`.
///
/// # Errors
/// Returns an error if the document cannot be serialized or the insert
/// fails.
pub fn create_account(
    fields: &AccountFields,
    collection: &Collection,
    connection: &Connection,
) -> Result<Account, Error> {
    let document = serde_json::to_string(fields)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    connection.execute(
        &format!("INSERT INTO \"{collection}\" (number, document) VALUES (?1, ?2)"),
        params![fields.number, document],
    )?;

    let id = connection.last_insert_rowid();

    Ok(Account {
        id,
        fields: fields.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, body::Body, extract::State, http::Response, http::StatusCode};
    use rusqlite::Connection;
    use serde_json::{Map, Value, json};

    use crate::{
        account::{
            AccountFields, AccountType, Balance, create_account_endpoint,
            create_endpoint::{CreateAccountState, CreatedAccount},
            get_account_by_number,
        },
        collection::Collection,
        db::initialize,
        status::StatusResponse,
    };

    fn get_test_state() -> CreateAccountState {
        let conn = Connection::open_in_memory().unwrap();
        let collection = Collection::default();
        initialize(&conn, &collection).unwrap();

        CreateAccountState {
            db_connection: Arc::new(Mutex::new(conn)),
            collection,
        }
    }

    fn as_object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("want JSON object, got {other}"),
        }
    }

    async fn parse_body<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("could not read response body");

        serde_json::from_slice(&body).expect("could not parse response body")
    }

    #[tokio::test]
    async fn can_create_account() {
        let state = get_test_state();
        let candidate = as_object(json!({
            "cust_address": "A",
            "balance": 999,
            "cust_name": "N",
            "number": "1",
            "cust_firstname": "F",
            "cust_dob": "D",
            "type": "CE",
        }));

        let response = create_account_endpoint(State(state.clone()), Json(candidate)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let created: CreatedAccount = parse_body(response).await;
        assert_eq!(created, CreatedAccount { cust_id: 1 });

        let connection = state.db_connection.lock().unwrap();
        let got = get_account_by_number("1", &state.collection, &connection)
            .unwrap()
            .expect("account should have been stored");
        assert_eq!(got.id, 1);
        assert_eq!(
            got.fields,
            AccountFields {
                account_type: AccountType::CE,
                balance: Balance::Number(999.into()),
                cust_name: "N".to_owned(),
                cust_firstname: "F".to_owned(),
                cust_address: "A".to_owned(),
                cust_dob: "D".to_owned(),
                number: "1".to_owned(),
            }
        );
    }

    #[tokio::test]
    async fn invalid_account_returns_failure_and_stores_nothing() {
        let state = get_test_state();
        let candidate = as_object(json!({
            "cust_address": "A",
            "balance": 999,
            "cust_name": "N",
            "number": "1",
            "cust_firstname": "F",
            "cust_dob": "D",
        }));

        let response = create_account_endpoint(State(state.clone()), Json(candidate)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let got: StatusResponse = parse_body(response).await;
        assert_eq!(got, StatusResponse::failure("Attribute type missing"));

        let connection = state.db_connection.lock().unwrap();
        let count: i64 = connection
            .query_row("SELECT COUNT(*) FROM customers", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn extra_fields_are_not_stored() {
        let state = get_test_state();
        let candidate = as_object(json!({
            "cust_address": "A",
            "balance": "10.5",
            "cust_name": "N",
            "number": "2",
            "cust_firstname": "F",
            "cust_dob": "D",
            "type": "CR",
            "is_admin": true,
        }));

        create_account_endpoint(State(state.clone()), Json(candidate)).await;

        let connection = state.db_connection.lock().unwrap();
        let document: String = connection
            .query_row(
                "SELECT document FROM customers WHERE number = '2'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        let document: Value = serde_json::from_str(&document).unwrap();
        assert_eq!(document.get("is_admin"), None);
        assert_eq!(document.get("balance"), Some(&json!("10.5")));
    }
}
