//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, collection::Collection, db::initialize};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,

    /// The collection that account documents are stored in.
    pub collection: Collection,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the table for
    /// `collection` if it does not exist yet.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, collection: Collection) -> Result<Self, Error> {
        initialize(&db_connection, &collection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
            collection,
        })
    }
}
