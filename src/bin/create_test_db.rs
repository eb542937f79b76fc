use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use accounts_api::{
    AccountFields, AccountType, Balance, Collection, create_account, initialize_db,
};

/// A utility for creating a test database for the accounts REST API server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The collection to create and add the test account to.
    #[arg(long, default_value = Collection::DEFAULT_NAME)]
    collection: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    let collection = Collection::new(&args.collection)?;

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn, &collection)?;

    println!("Creating test account...");

    let account = create_account(
        &AccountFields {
            account_type: AccountType::CE,
            balance: Balance::Number(250.into()),
            cust_name: "De Keyser".to_owned(),
            cust_firstname: "Michael".to_owned(),
            cust_address: "Karrenberg 35, 1170 Watermael-Boitsfort".to_owned(),
            cust_dob: "17/05/1989".to_owned(),
            number: "234234324324424".to_owned(),
        },
        &collection,
        &conn,
    )?;

    println!(
        "Created account {} with id {}",
        account.fields.number, account.id
    );
    println!("Success!");

    Ok(())
}
