use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::document::PaymentDocument;
use log::{error, info};

use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<PaymentDocument>,
) -> impl Responder {
    match state.store.save_document(&payload) {
        Ok(()) => {
            info!("Document saved");
            HttpResponse::Ok().body("单据已保存")
        }
        Err(e) => {
            error!("Saving document failed: {}", e);
            e.error_response()
        }
    }
}
