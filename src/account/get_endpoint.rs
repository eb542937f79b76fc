//! Defines the endpoint for fetching a single account by its account number.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{AppState, Error, account::core::get_account_by_number, collection::Collection};

/// The state needed to get an account.
#[derive(Debug, Clone)]
pub struct GetAccountState {
    /// The database connection for managing accounts.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The collection accounts are stored in.
    pub collection: Collection,
}

impl FromRef<AppState> for GetAccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            collection: state.collection.clone(),
        }
    }
}

/// A route handler for getting the first account with the given account number.
///
/// Responds with `null` if there is no such account.
pub async fn get_account_endpoint(
    State(state): State<GetAccountState>,
    Path(number): Path<String>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match get_account_by_number(&number, &state.collection, &connection) {
        Ok(account) => Json(account).into_response(),
        Err(error) => {
            tracing::error!("Could not get account {number}: {error}");
            error.into_response()
        }
    }
}
