mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;
mod validation;

pub use core::{
    Account, AccountFields, AccountId, AccountType, Balance, create_account_table,
    get_account_by_number,
};
pub use create_endpoint::{CreatedAccount, create_account, create_account_endpoint};
pub use delete_endpoint::{DeleteOutcome, delete_account_endpoint};
pub use edit_endpoint::{AccountPatch, NO_ACCOUNT_FOUND, edit_account_endpoint};
pub use get_endpoint::get_account_endpoint;
pub use list_endpoint::list_accounts_endpoint;
pub use validation::{ValidationError, validate_account};
