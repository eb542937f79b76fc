//! Defines the endpoint for listing every account.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    account::core::{Account, map_row_to_account},
    collection::Collection,
};

/// The state needed to list accounts.
#[derive(Debug, Clone)]
pub struct ListAccountsState {
    /// The database connection for managing accounts.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The collection accounts are stored in.
    pub collection: Collection,
}

impl FromRef<AppState> for ListAccountsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            collection: state.collection.clone(),
        }
    }
}

/// A route handler for listing every account in insertion order.
pub async fn list_accounts_endpoint(State(state): State<ListAccountsState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match get_all_accounts(&state.collection, &connection) {
        Ok(accounts) => Json(accounts).into_response(),
        Err(error) => {
            tracing::error!("Could not list accounts: {error}");
            error.into_response()
        }
    }
}

/// Get every account in `collection`, oldest first.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails or a stored document cannot
/// be decoded.
pub fn get_all_accounts(
    collection: &Collection,
    connection: &Connection,
) -> Result<Vec<Account>, Error> {
    connection
        .prepare(&format!(
            "SELECT id, document FROM \"{collection}\" ORDER BY id"
        ))?
        .query_map([], map_row_to_account)?
        .map(|maybe_account| maybe_account.map_err(Error::from))
        .collect()
}
