//! # Export Service Module
//!
//! Renders the two-copy document into a print-ready A4 PNG.
//!
//! ## Sub-modules:
//! - `sheet`: millimetre-addressed grayscale page with line and text drawing.
//! - `render`: the paper layout of the form.
//! - `encode`: PNG encoding with the print resolution embedded.
//!
//! Exporting is also the moment new payees are captured: every copy whose payee,
//! bank account and bank name are all filled in is remembered in the lookup
//! table before the image is produced.

mod encode;
mod render;
mod sheet;

pub use sheet::load_font;

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::web::{post, scope};
use actix_web::{web, HttpResponse, Responder, ResponseError, Scope};
use common::model::document::PaymentDocument;
use common::model::payee::PayeeRecord;
use log::{error, info, warn};

use crate::error::Result;
use crate::state::AppState;

const API_PATH: &str = "/api/export";
const FILE_NAME: &str = "payment-request.png";

/// Configures and returns the Actix `Scope` for the export route.
///
/// *   **`POST /api/export`**: takes a `PaymentDocument` as JSON and answers with
///     the rendered page as `image/png`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(process))
}

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<PaymentDocument>,
) -> impl Responder {
    match export_document(&state, payload.into_inner()).await {
        Ok(png) => HttpResponse::Ok()
            .content_type("image/png")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Inline,
                parameters: vec![DispositionParam::Filename(FILE_NAME.to_string())],
            })
            .body(png),
        Err(e) => {
            error!("Export failed: {}", e);
            e.error_response()
        }
    }
}

async fn export_document(state: &AppState, document: PaymentDocument) -> Result<Vec<u8>> {
    let captured = state.store.remember_payees(
        document
            .copies()
            .into_iter()
            .filter_map(PayeeRecord::from_form),
    )?;

    if state.font.is_none() {
        warn!("No export font loaded; the image will only contain the form grid");
    }

    let font = state.font.clone();
    let dpi = state.config.dpi;
    let rendered = web::block(move || {
        let image = render::render_document(&document, font.as_ref(), dpi);
        encode::encode_png(&image, dpi)
    })
    .await??;

    info!(
        "Exported document ({} bytes, {} new payee(s))",
        rendered.len(),
        captured
    );
    Ok(rendered)
}
