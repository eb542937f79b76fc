//! Sets up the application's SQLite database.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, account::create_account_table, collection::Collection};

/// Create the tables needed to store accounts in `collection`.
///
/// Existing tables and their rows are left untouched, so this is safe to call
/// on every start up.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection, collection: &Collection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_account_table(collection, &transaction)?;

    transaction.commit()?;

    Ok(())
}
