//! Defines the endpoint for deleting accounts.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, collection::Collection};

/// The state needed to delete an account.
#[derive(Debug, Clone)]
pub struct DeleteAccountState {
    /// The database connection for managing accounts.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The collection accounts are stored in.
    pub collection: Collection,
}

impl FromRef<AppState> for DeleteAccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            collection: state.collection.clone(),
        }
    }
}

/// The outcome of a delete, in the shape document stores report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    /// The number of accounts removed.
    pub n: usize,
    /// Always `1.0` when the delete ran.
    pub ok: f64,
}

/// A route handler for deleting every account with the given account number.
///
/// Deleting an account number that does not exist is not an error, the
/// outcome simply reports that nothing was removed.
pub async fn delete_account_endpoint(
    State(state): State<DeleteAccountState>,
    Path(number): Path<String>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match delete_accounts(&number, &state.collection, &connection) {
        Ok(rows_affected) => Json(DeleteOutcome {
            n: rows_affected,
            ok: 1.0,
        })
        .into_response(),
        Err(error) => {
            tracing::error!("Could not delete account {number}: {error}");
            error.into_response()
        }
    }
}

type RowsAffected = usize;

fn delete_accounts(
    number: &str,
    collection: &Collection,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            &format!("DELETE FROM \"{collection}\" WHERE number = ?1"),
            params![number],
        )
        .map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use rusqlite::Connection;

    use crate::{
        account::{
            AccountFields, AccountType, Balance, create_account, delete_account_endpoint,
            delete_endpoint::{DeleteAccountState, DeleteOutcome, delete_accounts},
            get_account_by_number,
        },
        collection::Collection,
        db::initialize,
    };

    fn must_create_test_connection() -> Connection {
        let connection =
            Connection::open_in_memory().expect("could not create in-memory SQLite database");
        initialize(&connection, &Collection::default()).expect("could not initialize test DB");

        connection
    }

    fn test_fields(number: &str) -> AccountFields {
        AccountFields {
            account_type: AccountType::CV,
            balance: Balance::Number(1.into()),
            cust_name: "N".to_owned(),
            cust_firstname: "F".to_owned(),
            cust_address: "A".to_owned(),
            cust_dob: "D".to_owned(),
            number: number.to_owned(),
        }
    }

    #[test]
    fn deletes_every_matching_account() {
        let connection = must_create_test_connection();
        let collection = Collection::default();
        create_account(&test_fields("1"), &collection, &connection).unwrap();
        create_account(&test_fields("1"), &collection, &connection).unwrap();
        create_account(&test_fields("2"), &collection, &connection).unwrap();

        let rows_affected = delete_accounts("1", &collection, &connection).unwrap();

        assert_eq!(rows_affected, 2);
        assert_eq!(
            get_account_by_number("1", &collection, &connection),
            Ok(None)
        );
        assert!(
            get_account_by_number("2", &collection, &connection)
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn reports_zero_for_unknown_number() {
        let state = DeleteAccountState {
            db_connection: Arc::new(Mutex::new(must_create_test_connection())),
            collection: Collection::default(),
        };

        let response = delete_account_endpoint(State(state), Path("missing".to_owned())).await;

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let outcome: DeleteOutcome = serde_json::from_slice(&body).unwrap();
        assert_eq!(outcome, DeleteOutcome { n: 0, ok: 1.0 });
    }
}
