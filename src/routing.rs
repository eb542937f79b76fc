//! Application router configuration.

use axum::{Router, routing::get};

use crate::{
    AppState,
    account::{
        create_account_endpoint, delete_account_endpoint, edit_account_endpoint,
        get_account_endpoint, list_accounts_endpoint,
    },
    endpoints,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::ACCOUNTS,
            get(list_accounts_endpoint).post(create_account_endpoint),
        )
        .route(
            endpoints::ACCOUNT,
            get(get_account_endpoint)
                .put(edit_account_endpoint)
                .delete(delete_account_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}
