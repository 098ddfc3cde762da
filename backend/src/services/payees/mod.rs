//! Payee lookup table routes: listing, manual additions and spreadsheet
//! import/export.
//!
//! The provided routes are:
//! - `GET /api/payees`: every entry in table order, as JSON.
//! - `POST /api/payees/add`: remembers one `PayeeRecord` unless its
//!   (name, bank account) pair is already present.
//! - `POST /api/payees/import`: multipart upload with a `file` field holding a
//!   `.csv` export of the spreadsheet. Replaces the whole table.
//! - `GET /api/payees/export`: the table as a CSV attachment.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod add;
mod export;
mod import;
mod list;
pub mod spreadsheet;

const API_PATH: &str = "/api/payees";

/// Configures and returns the Actix scope for payee routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/add", post().to(add::process))
        .route("/import", post().to(import::process))
        .route("/export", get().to(export::process))
}
