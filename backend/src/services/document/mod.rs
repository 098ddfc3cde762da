//! # Document Service Module
//!
//! Routes for the working document: the two form copies the user is editing.
//!
//! ## Sub-modules:
//! - `get`: returns the saved document, or an empty one on first use.
//! - `save`: stores the document sent by the frontend.

mod get;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all document-related API endpoints.
const API_PATH: &str = "/api/document";

/// Configures and returns the Actix `Scope` for document routes.
///
/// # Registered Routes:
///
/// *   **`GET /api/document`**: the stored `PaymentDocument` as JSON.
/// *   **`POST /api/document/save`**: replaces the stored document with the JSON
///     `PaymentDocument` in the body.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("/save", post().to(save::process))
}
